//! Reading a single directory

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{ListError, Result};

use super::classify::{Entry, EntryKind};
use super::utils::{join_child, sort_by_name};

/// Read every entry of `dir`, in the order the filesystem returns them.
///
/// The directory handle is dropped before returning, on success and on error.
pub fn read_entries(dir: &Path) -> Result<Vec<Entry>> {
    trace!(dir = %dir.display(), "reading directory");

    let read_dir = fs::read_dir(dir).map_err(|e| ListError::walk(dir, e))?;
    let mut entries = Vec::new();

    for entry in read_dir {
        let entry = entry.map_err(|e| ListError::walk(dir, e))?;
        let path = join_child(dir, &entry.file_name());
        let kind = match entry.file_type() {
            Ok(file_type) => EntryKind::from_file_type(file_type),
            Err(e) => return Err(ListError::walk(path, e)),
        };
        entries.push(Entry { path, kind });
    }

    Ok(entries)
}

/// The real subdirectories and regular files of one directory.
/// Both lists are sorted by name, ignoring case; symlinks and special files are dropped.
#[derive(Debug, Default)]
pub struct DirListing {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl DirListing {
    pub fn read(dir: &Path) -> Result<Self> {
        let mut listing = Self::default();

        for entry in read_entries(dir)? {
            if entry.is_dir() {
                listing.dirs.push(entry.path);
            } else if entry.is_file() {
                listing.files.push(entry.path);
            }
        }

        sort_by_name(&mut listing.dirs);
        sort_by_name(&mut listing.files);
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_listing_splits_and_sorts_ignoring_case() {
        let dir = TestDir::new();
        dir.add_file("b.txt", "");
        dir.add_file("A.txt", "");
        dir.add_file("c.txt", "");
        dir.add_dir("Zeta");
        dir.add_dir("alpha");

        let listing = DirListing::read(dir.path()).unwrap();
        let names = |paths: &[PathBuf]| -> Vec<String> {
            paths
                .iter()
                .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
                .collect()
        };

        assert_eq!(names(&listing.files), vec!["A.txt", "b.txt", "c.txt"]);
        assert_eq!(names(&listing.dirs), vec!["alpha", "Zeta"]);
    }

    #[test]
    fn test_entries_are_joined_to_their_directory() {
        let dir = TestDir::new();
        dir.add_file("sub/file.rs", "");

        let entries = read_entries(&dir.path().join("sub")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, dir.path().join("sub").join("file.rs"));
        assert!(entries[0].is_file());
    }

    #[test]
    fn test_reading_a_file_fails() {
        let dir = TestDir::new();
        let file = dir.add_file("plain.txt", "");

        let err = DirListing::read(&file).unwrap_err();
        assert!(matches!(err, ListError::Walk { ref path, .. } if path == &file));
    }

    #[cfg(unix)]
    #[test]
    fn test_listing_drops_symlinks() {
        let dir = TestDir::new();
        dir.add_file("real.txt", "");
        dir.add_dir("realdir");
        dir.add_symlink("real.txt", "link.txt");
        dir.add_symlink("realdir", "linkdir");

        let listing = DirListing::read(dir.path()).unwrap();
        assert_eq!(listing.files, vec![dir.path().join("real.txt")]);
        assert_eq!(listing.dirs, vec![dir.path().join("realdir")]);
    }
}
