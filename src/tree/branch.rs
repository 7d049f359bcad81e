/// The two ways out of a question node.
/// Also the two accepted answers to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Yes,
    No,
}

impl Branch {
    pub const ALL: [Self; 2] = [Self::Yes, Self::No];
    /// Title-cased label used by the path view.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl std::ops::Not for Branch {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

/// Accepts the english and french spellings players type in,
/// ignoring case and surrounding whitespace.
impl TryFrom<&str> for Branch {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "oui" | "o" => Ok(Self::Yes),
            "no" | "n" | "non" => Ok(Self::No),
            _ => Err(s.to_string()),
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        for token in ["yes", " YES ", "y", "Oui", "o"] {
            assert_eq!(Branch::try_from(token), Ok(Branch::Yes));
        }
        for token in ["no", "No\n", "n", "NON"] {
            assert_eq!(Branch::try_from(token), Ok(Branch::No));
        }
    }

    #[test]
    fn rejects_everything_else() {
        for token in ["maybe", "", "  ", "yess", "1", "true"] {
            assert!(Branch::try_from(token).is_err());
        }
    }

    #[test]
    fn negation_swaps() {
        assert_eq!(!Branch::Yes, Branch::No);
        assert_eq!(!!Branch::No, Branch::No);
    }
}
