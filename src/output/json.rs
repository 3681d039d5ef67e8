//! JSON output formatting

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::DisplayMode;
use crate::error::Result;
use crate::suffix::SuffixGroup;
use crate::walk::ListedDir;

use super::ListingOutput;

/// Everything one run produced. Only the collection for the run's mode is present.
#[derive(Debug, Default, Serialize)]
pub struct JsonReport {
    pub mode: DisplayMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories: Option<Vec<ListedDir>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<SuffixGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffixes: Option<Vec<String>>,
}

/// Pretty-print `value` into a buffer, so a serialization failure leaves the output untouched.
fn render_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec_pretty(value)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Buffers results and writes them as one pretty-printed JSON document on `finish`.
pub struct JsonFormatter<W: Write> {
    out: W,
    report: JsonReport,
}

impl JsonFormatter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: JsonReport::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ListingOutput for JsonFormatter<W> {
    fn start(&mut self, mode: DisplayMode) -> Result<()> {
        self.report = JsonReport {
            mode,
            ..Default::default()
        };
        match mode {
            DisplayMode::Files => self.report.files = Some(Vec::new()),
            DisplayMode::DirsOnly => self.report.directories = Some(Vec::new()),
            DisplayMode::BySuffix => self.report.groups = Some(Vec::new()),
            DisplayMode::Suffixes => self.report.suffixes = Some(Vec::new()),
        }
        Ok(())
    }

    fn directory(&mut self, dir: &ListedDir) -> Result<()> {
        self.report
            .directories
            .get_or_insert_with(Vec::new)
            .push(dir.clone());
        Ok(())
    }

    fn file(&mut self, path: &Path) -> Result<()> {
        self.report
            .files
            .get_or_insert_with(Vec::new)
            .push(path.to_string_lossy().to_string());
        Ok(())
    }

    fn suffix_group(&mut self, group: &SuffixGroup) -> Result<()> {
        self.report
            .groups
            .get_or_insert_with(Vec::new)
            .push(group.clone());
        Ok(())
    }

    fn suffix(&mut self, suffix: &str) -> Result<()> {
        self.report
            .suffixes
            .get_or_insert_with(Vec::new)
            .push(suffix.to_string());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let rendered = render_json(&self.report)?;
        self.out.write_all(&rendered)?;
        Ok(self.out.flush()?)
    }
}
