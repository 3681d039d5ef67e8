//! Rendering listing results
//!
//! Every result set goes through the `ListingOutput` trait:
//! - `console` - colored lines, written as results arrive
//! - `json` - one JSON document, written once the run finishes
//!
//! Line styles live in `style`; each rendered line carries its own color and
//! resets it before the newline.

mod config;
mod console;
mod json;
mod style;

use std::path::Path;

use crate::config::DisplayMode;
use crate::error::Result;
use crate::suffix::SuffixGroup;
use crate::walk::ListedDir;

pub use config::OutputConfig;
pub use console::ConsoleFormatter;
pub use json::{JsonFormatter, JsonReport};
pub use style::{LineStyle, StyledLine};

/// Receives the results of one run, in display order.
pub trait ListingOutput {
    /// Called once before any result.
    fn start(&mut self, _mode: DisplayMode) -> Result<()> {
        Ok(())
    }

    fn directory(&mut self, dir: &ListedDir) -> Result<()>;

    fn file(&mut self, path: &Path) -> Result<()>;

    fn suffix_group(&mut self, group: &SuffixGroup) -> Result<()>;

    fn suffix(&mut self, suffix: &str) -> Result<()>;

    /// Called once after the last result.
    fn finish(&mut self) -> Result<()>;
}
