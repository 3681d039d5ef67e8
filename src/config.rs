//! Run configuration built once from the command line

use std::path::PathBuf;

use serde::Serialize;

/// Which result set a run produces. Exactly one per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Plain file listing
    #[default]
    Files,
    /// Directories only
    DirsOnly,
    /// Files grouped by extension
    BySuffix,
    /// Distinct extensions only
    Suffixes,
}

impl DisplayMode {
    /// Pick the mode from the three exclusive command-line flags.
    ///
    /// The parser rejects more than one flag; if several are set anyway,
    /// by-suffix wins over suffixes, which wins over dirs-only.
    pub fn from_flags(dirs_only: bool, by_suffix: bool, suffixes: bool) -> Self {
        if by_suffix {
            DisplayMode::BySuffix
        } else if suffixes {
            DisplayMode::Suffixes
        } else if dirs_only {
            DisplayMode::DirsOnly
        } else {
            DisplayMode::Files
        }
    }
}

/// Configuration for a listing run.
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub root: PathBuf,
    pub recurse: bool,
    pub mode: DisplayMode,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recurse: false,
            mode: DisplayMode::Files,
        }
    }
}
