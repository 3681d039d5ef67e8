//! Grouping and summarizing files by extension

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::walk::relative_to;

/// Label shown for the group of files without an extension.
pub const NO_SUFFIX_LABEL: &str = "(no suffix)";

/// Extension of `path` including its dot (`.txt`), or an empty string.
///
/// `.bashrc` and `notes.` have no extension; `archive.tar.gz` has `.gz`.
pub fn suffix_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy()),
        _ => String::new(),
    }
}

/// Files sharing one extension, as paths relative to the listing root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixGroup {
    /// Extension as found on disk, empty for files without one
    pub suffix: String,
    pub files: Vec<String>,
}

impl SuffixGroup {
    /// Header to display for this group.
    pub fn label(&self) -> &str {
        if self.suffix.is_empty() {
            NO_SUFFIX_LABEL
        } else {
            &self.suffix
        }
    }
}

struct Keyed {
    sort_key: (String, String),
    suffix: String,
    path: PathBuf,
}

/// Group files by extension.
///
/// Files are ordered by extension and then full path, both ignoring case. Runs of
/// consecutive files with exactly the same extension form a group, so `.TXT` and
/// `.txt` end up in separate groups even though they sort together.
///
/// Fails if a file is not under `root`.
pub fn group_by_suffix<I>(files: I, root: &Path) -> Result<Vec<SuffixGroup>>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut keyed: Vec<Keyed> = files
        .into_iter()
        .map(|file| {
            let path = file.as_ref().to_path_buf();
            let suffix = suffix_of(&path);
            let sort_key = (
                suffix.to_lowercase(),
                path.to_string_lossy().to_lowercase(),
            );
            Keyed {
                sort_key,
                suffix,
                path,
            }
        })
        .collect();
    keyed.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

    let mut groups: Vec<SuffixGroup> = Vec::new();
    for entry in keyed {
        let relative = relative_to(&entry.path, root)?
            .to_string_lossy()
            .to_string();

        match groups.last_mut() {
            Some(group) if group.suffix == entry.suffix => group.files.push(relative),
            _ => groups.push(SuffixGroup {
                suffix: entry.suffix,
                files: vec![relative],
            }),
        }
    }

    Ok(groups)
}

/// Distinct extensions present in `files`, sorted ignoring case.
///
/// Spellings differing only in case collapse into the first one seen. Files
/// without an extension are left out.
pub fn list_suffixes<I>(files: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for file in files {
        let suffix = suffix_of(file.as_ref());
        if !suffix.is_empty() {
            seen.entry(suffix.to_lowercase()).or_insert(suffix);
        }
    }
    seen.into_values().collect()
}
