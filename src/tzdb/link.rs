//! `Link` resolution.

use std::collections::BTreeMap;

/// Result of resolving the collected link groups.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResolvedLinks {
    pub links: BTreeMap<String, String>,
    /// Aliases named by more than one `Link` line, with their targets.
    pub conflicts: BTreeMap<String, Vec<String>>,
}

impl ResolvedLinks {
    /// Lines belonging to conflicting aliases; all of them count as invalid.
    pub fn invalid_lines(&self) -> usize {
        self.conflicts.values().map(Vec::len).sum()
    }
}

/// Resolve each alias to its single target.
///
/// An alias with several target lines is unresolvable: it is left out
/// entirely rather than merged or resolved first-wins.
pub fn resolve_links(groups: &BTreeMap<String, Vec<String>>) -> ResolvedLinks {
    let mut resolved = ResolvedLinks::default();
    for (alias, targets) in groups {
        match targets.as_slice() {
            [target] => {
                resolved.links.insert(alias.clone(), target.clone());
            }
            [] => {}
            _ => {
                resolved.conflicts.insert(alias.clone(), targets.clone());
            }
        }
    }
    resolved
}
