//! `TerminalSink`: A display sink writing straight to a terminal.
//!
//! Each appended run is queued and flushed as one unit, so a revealed
//! run hits the screen atomically. Wrapping is done manually against a
//! configured column width because streamed story text is CJK-heavy and
//! double-width aware wrapping reads much better than hard terminal
//! wrap.

use crate::typewriter::DisplaySink;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal-backed display sink with width-aware wrapping.
pub struct TerminalSink<W: Write> {
    out: W,
    /// Wrap column; 0 disables wrapping.
    wrap_width: u16,
    column: u16,
    fg: Option<Color>,
}

impl TerminalSink<io::Stdout> {
    /// Sink over stdout, wrapping at the given column.
    pub fn stdout(wrap_width: u16) -> Self {
        Self::with_writer(io::stdout(), wrap_width)
    }
}

impl<W: Write> TerminalSink<W> {
    /// Sink over an arbitrary writer.
    pub const fn with_writer(out: W, wrap_width: u16) -> Self {
        Self {
            out,
            wrap_width,
            column: 0,
            fg: None,
        }
    }

    /// Set a foreground color applied to every appended run.
    #[must_use]
    pub const fn with_color(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Current cursor column as tracked by the sink.
    pub const fn column(&self) -> u16 {
        self.column
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, text: &str) -> io::Result<()> {
        if let Some(fg) = self.fg {
            queue!(self.out, SetForegroundColor(fg))?;
        }

        for grapheme in text.graphemes(true) {
            if grapheme == "\n" || grapheme == "\r\n" {
                queue!(self.out, Print("\r\n"))?;
                self.column = 0;
                continue;
            }

            let width = UnicodeWidthStr::width(grapheme) as u16;
            if self.wrap_width > 0 && width > 0 && self.column + width > self.wrap_width {
                queue!(self.out, Print("\r\n"))?;
                self.column = 0;
            }
            queue!(self.out, Print(grapheme))?;
            self.column += width;
        }

        if self.fg.is_some() {
            queue!(self.out, ResetColor)?;
        }
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    /// Append one revealed run; queued and flushed in a single pass.
    ///
    /// Write failures are swallowed: a broken pipe must not take the
    /// pacing thread down with it.
    fn append(&mut self, text: &str) {
        let _ = self.render(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(sink: TerminalSink<Vec<u8>>) -> String {
        String::from_utf8(sink.out).unwrap()
    }

    #[test]
    fn test_wraps_at_the_configured_column() {
        let mut sink = TerminalSink::with_writer(Vec::new(), 4);
        sink.append("abcdef");
        assert_eq!(rendered(sink), "abcd\r\nef");
    }

    #[test]
    fn test_wide_clusters_never_straddle_the_edge() {
        let mut sink = TerminalSink::with_writer(Vec::new(), 5);
        // Each ideograph is two columns; the third would overflow col 5.
        sink.append("你好世");
        assert_eq!(rendered(sink), "你好\r\n世");
    }

    #[test]
    fn test_newlines_reset_the_column() {
        let mut sink = TerminalSink::with_writer(Vec::new(), 10);
        sink.append("ab\ncd");
        assert_eq!(sink.column(), 2);
        assert_eq!(rendered(sink), "ab\r\ncd");
    }

    #[test]
    fn test_zero_width_disables_wrapping() {
        let mut sink = TerminalSink::with_writer(Vec::new(), 0);
        sink.append("abcdefghij");
        assert_eq!(rendered(sink), "abcdefghij");
    }

    #[test]
    fn test_color_wraps_each_run() {
        let mut sink = TerminalSink::with_writer(Vec::new(), 0).with_color(Color::Rgb {
            r: 200,
            g: 200,
            b: 200,
        });
        sink.append("hi");
        let out = rendered(sink);
        assert!(out.contains("38;2;200;200;200"));
        assert!(out.ends_with("\u{1b}[0m"));
    }
}
