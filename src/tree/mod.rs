mod entry;
mod exclude;
mod label;
mod lister;
mod options;
mod walker;

pub use entry::DirEntry;
pub use exclude::{ExcludeSet, DEFAULT_EXCLUDED_NAMES};
pub use label::entry_label;
pub use lister::list_children;
pub use options::{RenderOptions, SortOrder};
pub use walker::render_tree;
