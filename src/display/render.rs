use crate::tree::Branch;
use crate::tree::Tree;
use std::fmt::Formatter;
use std::fmt::Result;

/// Text drawing of a whole [`Tree`], yes branch above no branch.
///
/// ```text
/// Does it bark?
/// ├──YES → [Dog]
/// └──NO → [Cat]
/// ```
pub struct Render<'tree>(pub &'tree Tree);

impl std::fmt::Display for Render<'_> {
    /// Driven by [`Tree::walk`], so depth costs heap, not stack.
    /// `cuts[d]` is where the prefix for children at depth `d + 1` ends.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut prefix = String::new();
        let mut cuts = Vec::<usize>::new();
        for visit in self.0.walk() {
            match visit.branch {
                None => writeln!(f, "{}", visit.node)?,
                Some(branch) => {
                    let last = branch == Branch::No;
                    let stem = if last { "└" } else { "├" };
                    let gaps = if last { "    " } else { "│   " };
                    cuts.truncate(visit.depth);
                    prefix.truncate(cuts.last().copied().unwrap_or_default());
                    writeln!(f, "{}{}──{} → {}", prefix, stem, branch, visit.node)?;
                    prefix.push_str(gaps);
                }
            }
            cuts.push(prefix.len());
        }
        Ok(())
    }
}
