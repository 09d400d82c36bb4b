use std::collections::HashSet;

/// Base names hidden at any level by default.
/// Editor and VCS metadata that only adds noise to a rendered tree.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] =
    &[".DS_Store", ".vscode", "launch.json", ".git", "__debug_bin"];

/// Set of base names never shown at any level, checked by exact match.
///
/// Built once before the walk and read-only afterwards; excluded
/// directories are not recursed into.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    names: HashSet<String>,
}

impl ExcludeSet {
    /// Create a set holding the built-in default names
    pub fn defaults() -> Self {
        Self {
            names: DEFAULT_EXCLUDED_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    /// Create an empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add further names to the set
    pub fn extend<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.names.extend(names);
    }

    /// Check whether a base name is excluded
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
