//! Filesystem traversal
//!
//! Two lazy walkers share one rule: symlinks are never followed or returned,
//! which is what keeps cyclic link structures from looping.
//!
//! - `DirWalker`: directories under a root, one level or unbounded
//! - `FileCollector`: regular files under a root, one level or unbounded
//!
//! Each directory is read completely (and its handle closed) before any of its
//! entries is yielded.

mod classify;
mod dirs;
mod files;
mod listing;
mod utils;

pub use classify::{Entry, EntryKind};
pub use dirs::{DEFAULT_LEADER, DirWalker, ListedDir};
pub use files::FileCollector;
pub use listing::{DirListing, read_entries};
pub use utils::{join_child, normalize_root, relative_to};
