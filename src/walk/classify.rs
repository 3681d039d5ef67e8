//! Entry classification without following symlinks

use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};

/// What a directory entry is, judged from the entry itself rather than its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// Any symlink, whatever it points at (or if it points nowhere)
    Symlink,
    /// Sockets, fifos, devices
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }

    /// Classify the object at `path` without following a final symlink.
    pub fn of(path: &Path) -> io::Result<Self> {
        fs::symlink_metadata(path).map(|meta| Self::from_file_type(meta.file_type()))
    }
}

/// A path met during traversal, with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    /// A real directory, safe to descend into.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// A regular file that is not a symlink.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_classify_file_and_dir() {
        let dir = TestDir::new();
        let file = dir.add_file("a.txt", "a");
        let sub = dir.add_dir("sub");

        assert_eq!(EntryKind::of(&file).unwrap(), EntryKind::File);
        assert_eq!(EntryKind::of(&sub).unwrap(), EntryKind::Dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_followed() {
        let dir = TestDir::new();
        dir.add_file("target.txt", "t");
        dir.add_dir("realdir");
        let file_link = dir.add_symlink("target.txt", "link.txt");
        let dir_link = dir.add_symlink("realdir", "linkdir");
        let broken = dir.add_symlink("missing", "broken");

        assert_eq!(EntryKind::of(&file_link).unwrap(), EntryKind::Symlink);
        assert_eq!(EntryKind::of(&dir_link).unwrap(), EntryKind::Symlink);
        assert_eq!(EntryKind::of(&broken).unwrap(), EntryKind::Symlink);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = TestDir::new();
        assert!(EntryKind::of(&dir.path().join("nope")).is_err());
    }
}
