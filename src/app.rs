//! Dispatching a run to the walker, collector, grouper or summarizer

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{DisplayMode, ListConfig};
use crate::error::Result;
use crate::output::ListingOutput;
use crate::suffix::{group_by_suffix, list_suffixes};
use crate::walk::{DirWalker, FileCollector};

/// Produce the listing described by `config` into `output`.
///
/// The first filesystem, path or output error ends the run.
pub fn run<O: ListingOutput>(config: &ListConfig, output: &mut O) -> Result<()> {
    debug!(?config, "parsed configuration");

    output.start(config.mode)?;
    let count = match config.mode {
        DisplayMode::DirsOnly => {
            let mut count = 0;
            for dir in DirWalker::new(&config.root).recurse(config.recurse) {
                output.directory(&dir?)?;
                count += 1;
            }
            count
        }
        DisplayMode::BySuffix => {
            let files = collect_files(config)?;
            let groups = group_by_suffix(&files, &config.root)?;
            for group in &groups {
                output.suffix_group(group)?;
            }
            groups.len()
        }
        DisplayMode::Suffixes => {
            let suffixes = list_suffixes(collect_files(config)?);
            for suffix in &suffixes {
                output.suffix(suffix)?;
            }
            suffixes.len()
        }
        DisplayMode::Files => {
            let mut count = 0;
            for file in FileCollector::new(&config.root).recurse(config.recurse) {
                output.file(&file?)?;
                count += 1;
            }
            count
        }
    };
    output.finish()?;

    info!(mode = ?config.mode, count, "listing complete");
    Ok(())
}

/// Materialize the collector for modes that need every file before printing.
fn collect_files(config: &ListConfig) -> Result<Vec<PathBuf>> {
    FileCollector::new(&config.root)
        .recurse(config.recurse)
        .collect()
}
