//! FileCollector - lazily lists regular files under a root

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::listing::DirListing;
use super::utils::normalize_root;

/// Pre-order walk yielding regular, non-symlink files.
///
/// Each directory's files come first, sorted by name ignoring case, followed by the
/// files of its subdirectories, visited in the same name order. Symlinked
/// directories are not entered. After yielding an error the collector is exhausted.
pub struct FileCollector {
    recurse: bool,
    /// Directory to read before anything else is yielded
    pending: Option<PathBuf>,
    files: std::vec::IntoIter<PathBuf>,
    stack: Vec<std::vec::IntoIter<PathBuf>>,
}

impl FileCollector {
    /// Collector over `root`, recursing by default.
    pub fn new(root: &Path) -> Self {
        Self {
            recurse: true,
            pending: Some(normalize_root(root)),
            files: Vec::new().into_iter(),
            stack: Vec::new(),
        }
    }

    pub fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }
}

impl Iterator for FileCollector {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.files.next() {
                return Some(Ok(file));
            }

            if let Some(dir) = self.pending.take() {
                match DirListing::read(&dir) {
                    Ok(listing) => {
                        self.files = listing.files.into_iter();
                        if self.recurse {
                            self.stack.push(listing.dirs.into_iter());
                        }
                    }
                    Err(e) => {
                        self.stack.clear();
                        return Some(Err(e));
                    }
                }
                continue;
            }

            let subdirs = self.stack.last_mut()?;
            match subdirs.next() {
                Some(dir) => self.pending = Some(dir),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
