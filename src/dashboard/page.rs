//! Styled line buffer and its terminal renderer.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::constants::ui::CONTENT_MARGIN;

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub type Line = Vec<Span>;

/// A dashboard page: lines of spans, rendered top to bottom.
#[derive(Debug, Default, Clone)]
pub struct Page {
    lines: Vec<Line>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.lines.push(vec![Span::plain(text)]);
    }

    pub fn push_colored(&mut self, text: impl Into<String>, color: Color) {
        self.lines.push(vec![Span::colored(text, color)]);
    }

    pub fn blank(&mut self) {
        self.lines.push(Vec::new());
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Text without styling, one line per row
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            for span in line {
                out.push_str(&span.text);
            }
            out.push('\n');
        }
        out
    }

    /// Writes the page to `out`. With `plain` no escape sequences are emitted.
    pub fn render<W: Write>(&self, out: &mut W, plain: bool) -> std::io::Result<()> {
        let margin = " ".repeat(CONTENT_MARGIN);
        for line in &self.lines {
            queue!(out, Print(&margin))?;
            for span in line {
                if plain {
                    queue!(out, Print(&span.text))?;
                    continue;
                }
                if span.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                if let Some(color) = span.color {
                    queue!(out, SetForegroundColor(color))?;
                }
                queue!(out, Print(&span.text))?;
                if span.color.is_some() || span.bold {
                    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
                }
            }
            queue!(out, Print("\n"))?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Page {
        let mut page = Page::new();
        page.push(vec![
            Span::plain("Win Rate "),
            Span::colored("70.0%", Color::Green).bold(),
        ]);
        page.blank();
        page.push_text("done");
        page
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(sample().plain_text(), "Win Rate 70.0%\n\ndone\n");
    }

    #[test]
    fn test_plain_render_has_no_escapes() {
        let mut out = Vec::new();
        sample().render(&mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\x1b'));
        assert!(text.starts_with("  Win Rate 70.0%\n"));
    }

    #[test]
    fn test_colored_render_resets_style() {
        let mut out = Vec::new();
        sample().render(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\x1b'));
        assert!(text.contains("70.0%"));
    }
}
