//! Console output formatter
//!
//! `ConsoleFormatter` writes each result as soon as it arrives, so plain and
//! dirs-only listings stream while the walk is still running.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{StandardStream, WriteColor};
use tracing::debug;

use crate::error::Result;
use crate::suffix::SuffixGroup;
use crate::walk::ListedDir;

use super::ListingOutput;
use super::config::OutputConfig;
use super::style::StyledLine;

/// Colored line output to any termcolor writer.
pub struct ConsoleFormatter<W: WriteColor> {
    out: W,
    lines: usize,
}

impl ConsoleFormatter<StandardStream> {
    pub fn stdout(config: &OutputConfig) -> Self {
        Self::new(StandardStream::stdout(config.color_choice()))
    }
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    fn write_line(&mut self, line: StyledLine) -> io::Result<()> {
        line.write_to(&mut self.out)?;
        self.lines += 1;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> ListingOutput for ConsoleFormatter<W> {
    fn directory(&mut self, dir: &ListedDir) -> Result<()> {
        Ok(self.write_line(StyledLine::directory(dir))?)
    }

    fn file(&mut self, path: &Path) -> Result<()> {
        Ok(self.write_line(StyledLine::file(path))?)
    }

    fn suffix_group(&mut self, group: &SuffixGroup) -> Result<()> {
        self.write_line(StyledLine::group_header(group))?;
        for file in &group.files {
            self.write_line(StyledLine::group_member(file))?;
        }
        Ok(())
    }

    fn suffix(&mut self, suffix: &str) -> Result<()> {
        Ok(self.write_line(StyledLine::suffix(suffix))?)
    }

    fn finish(&mut self) -> Result<()> {
        debug!(lines = self.lines, "console output complete");
        Ok(self.out.flush()?)
    }
}
