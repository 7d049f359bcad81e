use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;
use uuid::Uuid;

/// Session token. The marker keeps tokens for different things apart.
pub struct ID<T>(Uuid, PhantomData<fn() -> T>);

impl<T> From<Uuid> for ID<T> {
    fn from(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }
}
impl<T> From<ID<T>> for Uuid {
    fn from(id: ID<T>) -> Self {
        id.0
    }
}

/// Time-ordered, so fresh tokens never repeat.
impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<T> Hash for ID<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> std::fmt::Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID({})", self.0)
    }
}
impl<T> std::fmt::Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_the_uuid_it_was_given() {
        let uuid = Uuid::now_v7();
        let id = ID::<()>::from(uuid);
        assert_eq!(Uuid::from(id), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(serde_json::to_value(id).unwrap(), uuid.to_string());
    }

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(ID::<()>::default(), ID::<()>::default());
    }
}
