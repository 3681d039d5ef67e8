//! dirlist - list directories, files and file extensions with colored output

pub mod app;
pub mod config;
pub mod error;
pub mod output;
pub mod suffix;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod walk;

pub use app::run;
pub use config::{DisplayMode, ListConfig};
pub use error::{ListError, Result};
pub use output::{ConsoleFormatter, JsonFormatter, ListingOutput, OutputConfig};
pub use suffix::{NO_SUFFIX_LABEL, SuffixGroup, group_by_suffix, list_suffixes, suffix_of};
pub use walk::{DirWalker, FileCollector, ListedDir};
