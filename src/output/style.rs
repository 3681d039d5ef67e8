//! Line styles for console output

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::suffix::SuffixGroup;
use crate::walk::ListedDir;

/// Indentation of files listed under a suffix group header.
const GROUP_MEMBER_INDENT: &str = "    ";
/// Prefix of files in the plain listing.
const FILE_LEADER: &str = " ";

/// What kind of result a line shows, which fixes its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Directory in the dirs-only listing (bright magenta)
    Directory,
    /// Extension heading a suffix group (bright cyan)
    GroupHeader,
    /// File inside a suffix group (yellow)
    GroupMember,
    /// File in the plain listing (yellow)
    File,
    /// Entry of the extension summary (magenta)
    Suffix,
}

impl LineStyle {
    pub fn color(&self) -> Color {
        match self {
            LineStyle::Directory | LineStyle::Suffix => Color::Magenta,
            LineStyle::GroupHeader => Color::Cyan,
            LineStyle::GroupMember | LineStyle::File => Color::Yellow,
        }
    }

    pub fn is_bright(&self) -> bool {
        matches!(self, LineStyle::Directory | LineStyle::GroupHeader)
    }

    pub fn spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(self.color()))
            .set_bold(self.is_bright())
            .set_intense(self.is_bright());
        spec
    }
}

/// One line of console output with its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub style: LineStyle,
    pub text: String,
}

impl StyledLine {
    pub fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    pub fn directory(dir: &ListedDir) -> Self {
        Self::new(
            LineStyle::Directory,
            format!("{}{}", dir.leader, dir.path.display()),
        )
    }

    pub fn group_header(group: &SuffixGroup) -> Self {
        Self::new(LineStyle::GroupHeader, group.label())
    }

    pub fn group_member(relative: &str) -> Self {
        Self::new(
            LineStyle::GroupMember,
            format!("{}{}", GROUP_MEMBER_INDENT, relative),
        )
    }

    pub fn file(path: &Path) -> Self {
        Self::new(LineStyle::File, format!("{}{}", FILE_LEADER, path.display()))
    }

    pub fn suffix(suffix: &str) -> Self {
        Self::new(LineStyle::Suffix, suffix)
    }

    /// Write the line in its color, reset, then end the line.
    pub fn write_to<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        out.set_color(&self.style.spec())?;
        write!(out, "{}", self.text)?;
        out.reset()?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::{Ansi, NoColor};

    use super::*;

    #[test]
    fn test_style_colors() {
        assert_eq!(LineStyle::Directory.color(), Color::Magenta);
        assert_eq!(LineStyle::GroupHeader.color(), Color::Cyan);
        assert_eq!(LineStyle::GroupMember.color(), Color::Yellow);
        assert_eq!(LineStyle::File.color(), Color::Yellow);
        assert_eq!(LineStyle::Suffix.color(), Color::Magenta);

        assert!(LineStyle::Directory.is_bright());
        assert!(LineStyle::GroupHeader.is_bright());
        assert!(!LineStyle::Suffix.is_bright());
    }

    #[test]
    fn test_line_text() {
        let dir = ListedDir {
            leader: " ".to_string(),
            depth: 0,
            path: PathBuf::from("src"),
        };
        assert_eq!(StyledLine::directory(&dir).text, " src");
        assert_eq!(StyledLine::file(Path::new("a.rs")).text, " a.rs");
        assert_eq!(StyledLine::group_member("lib/a.rs").text, "    lib/a.rs");
        assert_eq!(StyledLine::suffix(".rs").text, ".rs");

        let bare = SuffixGroup {
            suffix: String::new(),
            files: Vec::new(),
        };
        assert_eq!(StyledLine::group_header(&bare).text, "(no suffix)");
    }

    #[test]
    fn test_write_without_color() {
        let mut out = NoColor::new(Vec::new());
        StyledLine::suffix(".md").write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), ".md\n");
    }

    #[test]
    fn test_color_is_reset_before_newline() {
        let mut out = Ansi::new(Vec::new());
        StyledLine::suffix(".md").write_to(&mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();

        assert!(text.starts_with("\x1b["), "expected escape, got {:?}", text);
        assert!(text.ends_with("\x1b[0m\n"), "expected reset, got {:?}", text);
        assert!(text.contains(".md"));
    }
}
