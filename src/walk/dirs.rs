//! DirWalker - lazily lists directories under a root

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::Result;

use super::listing::DirListing;
use super::utils::normalize_root;

/// Prefix printed before every listed directory.
pub const DEFAULT_LEADER: &str = " ";

/// A directory yielded by `DirWalker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedDir {
    /// Display prefix. The same at every depth.
    #[serde(skip)]
    pub leader: String,
    /// 0 for immediate children of the root
    pub depth: usize,
    /// Serialized lossily, like every other path in the JSON report
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
}

fn serialize_path_lossy<S>(path: &Path, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&path.to_string_lossy())
}

/// Pre-order walk over real (non-symlink) directories, siblings sorted by name ignoring case.
///
/// A directory is yielded before its own subdirectories are read, so a failure
/// below it surfaces after it. After yielding an error the walker is exhausted.
pub struct DirWalker {
    recurse: bool,
    leader: String,
    /// Directory whose children must be read before the next item
    expand: Option<(usize, PathBuf)>,
    stack: Vec<(usize, std::vec::IntoIter<PathBuf>)>,
}

impl DirWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            recurse: false,
            leader: DEFAULT_LEADER.to_string(),
            expand: Some((0, normalize_root(root))),
            stack: Vec::new(),
        }
    }

    /// Descend into every listed directory (default: immediate children only).
    pub fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    pub fn leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = leader.into();
        self
    }
}

impl Iterator for DirWalker {
    type Item = Result<ListedDir>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((depth, dir)) = self.expand.take() {
            match DirListing::read(&dir) {
                Ok(listing) => self.stack.push((depth, listing.dirs.into_iter())),
                Err(e) => {
                    self.stack.clear();
                    return Some(Err(e));
                }
            }
        }

        loop {
            let (depth, siblings) = self.stack.last_mut()?;
            let depth = *depth;

            match siblings.next() {
                Some(path) => {
                    if self.recurse {
                        self.expand = Some((depth + 1, path.clone()));
                    }
                    return Some(Ok(ListedDir {
                        leader: self.leader.clone(),
                        depth,
                        path,
                    }));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;
    use crate::test_utils::TestDir;

    fn relative_paths(dir: &TestDir, walker: DirWalker) -> Vec<String> {
        walker
            .map(|d| {
                d.unwrap()
                    .path
                    .strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_immediate_children_sorted_ignoring_case() {
        let dir = TestDir::new();
        dir.add_dir("beta/inner");
        dir.add_dir("Alpha");
        dir.add_dir("gamma");
        dir.add_file("file.txt", "");

        let paths = relative_paths(&dir, DirWalker::new(dir.path()));
        assert_eq!(paths, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_recursive_walk_is_pre_order() {
        let dir = TestDir::new();
        dir.add_dir("b/y");
        dir.add_dir("b/x/deep");
        dir.add_dir("a");

        let paths = relative_paths(&dir, DirWalker::new(dir.path()).recurse(true));
        assert_eq!(paths, vec!["a", "b", "b/x", "b/x/deep", "b/y"]);
    }

    #[test]
    fn test_depth_and_flat_leader() {
        let dir = TestDir::new();
        dir.add_dir("a/b/c");

        let listed: Vec<ListedDir> = DirWalker::new(dir.path())
            .recurse(true)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            listed.iter().map(|d| d.depth).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(listed.iter().all(|d| d.leader == DEFAULT_LEADER));
    }

    #[test]
    fn test_custom_leader() {
        let dir = TestDir::new();
        dir.add_dir("a");

        let listed: Vec<ListedDir> = DirWalker::new(dir.path())
            .leader("> ")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(listed[0].leader, "> ");
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let dir = TestDir::new();
        assert_eq!(DirWalker::new(dir.path()).recurse(true).count(), 0);
    }

    #[test]
    fn test_missing_root_yields_one_error() {
        let dir = TestDir::new();
        let mut walker = DirWalker::new(&dir.path().join("missing"));

        assert!(matches!(walker.next(), Some(Err(ListError::Walk { .. }))));
        assert!(walker.next().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_never_listed() {
        let dir = TestDir::new();
        dir.add_dir("real/inner");
        dir.add_symlink("real", "link");
        dir.add_symlink("..", "real/up");

        let paths = relative_paths(&dir, DirWalker::new(dir.path()).recurse(true));
        assert_eq!(paths, vec!["real", "real/inner"]);
    }
}
