//! Path helpers shared by the walkers and the suffix grouper

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{ListError, Result};

/// Drop `.` components. An empty result means the current directory.
fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Lexically normalize a traversal root: `./src/` becomes `src`, `./` becomes `.`.
pub fn normalize_root(root: &Path) -> PathBuf {
    let stripped = strip_cur_dir(root);
    if stripped.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        stripped
    }
}

fn is_current_dir(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::CurDir))
}

/// Path of `name` inside `parent`. Children of the current directory are bare names.
pub fn join_child(parent: &Path, name: &OsStr) -> PathBuf {
    if is_current_dir(parent) {
        PathBuf::from(name)
    } else {
        parent.join(name)
    }
}

/// Express `path` relative to `base`, ignoring `.` components on both sides.
pub fn relative_to(path: &Path, base: &Path) -> Result<PathBuf> {
    let stripped_path = strip_cur_dir(path);
    let stripped_base = strip_cur_dir(base);

    let error = || ListError::Relativize {
        path: path.to_path_buf(),
        base: base.to_path_buf(),
    };

    if stripped_path.is_absolute() != stripped_base.is_absolute() {
        return Err(error());
    }

    stripped_path
        .strip_prefix(&stripped_base)
        .map(Path::to_path_buf)
        .map_err(|_| error())
}

/// Sort paths by file name, ignoring case. Equal names keep their order.
pub(crate) fn sort_by_name(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|p| {
        p.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
}
