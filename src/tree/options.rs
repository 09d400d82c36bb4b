/// Child ordering applied by the directory lister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Sort children by name for deterministic output
    #[default]
    Name,
    /// Keep whatever order the filesystem returns
    Unsorted,
}

impl SortOrder {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "none" => SortOrder::Unsorted,
            _ => SortOrder::Name,
        }
    }
}

/// Configuration options for a tree rendering run.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// List plain files in addition to directories
    pub print_files: bool,

    /// Child ordering
    pub sort: SortOrder,
}

impl RenderOptions {
    /// Create a new RenderOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether plain files are listed
    pub fn with_files(mut self, print_files: bool) -> Self {
        self.print_files = print_files;
        self
    }

    /// Set child ordering
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}
