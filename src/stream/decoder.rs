//! `StreamDecoder`: Incremental decode of chunked stream blocks.
//!
//! The transport hands over opaque byte blocks whose boundaries land
//! anywhere, including mid-line and mid-codepoint. The decoder splits
//! complete lines off a byte carry-over, parses each as a frame, and
//! invokes the caller's fragment callback synchronously in stream order.

use super::frame::{self, StreamFrame};
use log::debug;

/// Accumulated result of a decoded stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Completion {
    /// Full concatenated content, in arrival order.
    pub text: String,
    /// Last completion reason observed on the stream, if any.
    pub finish_reason: Option<String>,
}

/// Parses a line-framed incremental stream into ordered content events.
///
/// One decoder instance serves exactly one stream; create a fresh one
/// per generation.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    /// Bytes of the trailing incomplete line, carried across blocks.
    carry: Vec<u8>,
    text: String,
    finish_reason: Option<String>,
    terminated: bool,
}

impl StreamDecoder {
    /// Create a decoder with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the terminal sentinel has been consumed.
    ///
    /// Once terminated, all further input is ignored.
    #[inline]
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Content accumulated so far.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Feed one block from the transport.
    ///
    /// Complete lines are decoded immediately; the trailing incomplete
    /// line (if any) is retained and prepended to the next block. The
    /// callback fires once per recognized content fragment, in order.
    pub fn feed<F: FnMut(&str)>(&mut self, block: &[u8], mut on_delta: F) {
        if self.terminated {
            return;
        }

        self.carry.extend_from_slice(block);
        while let Some(pos) = self.carry.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.carry.drain(..=pos).collect();
            self.consume_line(&line[..line.len() - 1], &mut on_delta);
            if self.terminated {
                self.carry.clear();
                return;
            }
        }
    }

    /// Signal end-of-stream and return the accumulated result.
    ///
    /// Any carry-over is flushed as one final line attempt first.
    pub fn finish<F: FnMut(&str)>(mut self, mut on_delta: F) -> Completion {
        if !self.terminated && !self.carry.is_empty() {
            let tail = std::mem::take(&mut self.carry);
            self.consume_line(&tail, &mut on_delta);
        }
        debug!(
            "stream decoded: {} chars, finish_reason={:?}",
            self.text.chars().count(),
            self.finish_reason
        );
        Completion {
            text: self.text,
            finish_reason: self.finish_reason,
        }
    }

    /// Degrade path for transports that cannot stream.
    ///
    /// Accepts one complete structured response and synthesizes exactly
    /// one content event from it, under the same callback contract.
    pub fn absorb_complete<F: FnMut(&str)>(mut self, body: &str, mut on_delta: F) -> Completion {
        if let Some((content, finish_reason)) = frame::parse_complete(body) {
            if !content.is_empty() {
                on_delta(&content);
                self.text.push_str(&content);
            }
            if finish_reason.is_some() {
                self.finish_reason = finish_reason;
            }
        }
        Completion {
            text: self.text,
            finish_reason: self.finish_reason,
        }
    }

    fn consume_line<F: FnMut(&str)>(&mut self, line: &[u8], on_delta: &mut F) {
        let line = String::from_utf8_lossy(line);
        match frame::parse_line(&line) {
            Some(StreamFrame::Done) => self.terminated = true,
            Some(StreamFrame::Delta {
                content,
                finish_reason,
            }) => {
                if finish_reason.is_some() {
                    self.finish_reason = finish_reason;
                }
                if let Some(fragment) = content {
                    self.text.push_str(&fragment);
                    on_delta(&fragment);
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta_line(content: &str) -> String {
        format!("data: {{\"choices\":[{{\"delta\":{{\"content\":\"{content}\"}}}}]}}\n")
    }

    fn collect(blocks: &[&[u8]]) -> (Completion, Vec<String>) {
        let mut seen = Vec::new();
        let mut decoder = StreamDecoder::new();
        for block in blocks {
            decoder.feed(block, |d| seen.push(d.to_owned()));
        }
        let completion = decoder.finish(|d| seen.push(d.to_owned()));
        (completion, seen)
    }

    #[test]
    fn test_decodes_fragments_in_order() {
        let stream = format!("{}{}data: [DONE]\n", delta_line("A"), delta_line("B"));
        let (completion, seen) = collect(&[stream.as_bytes()]);
        assert_eq!(seen, vec!["A", "B"]);
        assert_eq!(completion.text, "AB");
    }

    #[test]
    fn test_every_split_point_yields_identical_content() {
        let stream = format!(
            "{}{}data: {{\"choices\":[{{\"delta\":{{}},\"finish_reason\":\"stop\"}}]}}\ndata: [DONE]\n",
            delta_line("Hello, "),
            delta_line("世界")
        );
        let bytes = stream.as_bytes();
        let (whole, _) = collect(&[bytes]);

        for split in 0..=bytes.len() {
            let (left, right) = bytes.split_at(split);
            let (parts, _) = collect(&[left, right]);
            assert_eq!(parts, whole, "split at byte {split}");
        }
    }

    #[test]
    fn test_nothing_decodes_after_the_sentinel() {
        let stream = format!("{}data: [DONE]\n{}", delta_line("kept"), delta_line("dropped"));
        let (completion, seen) = collect(&[stream.as_bytes()]);
        assert_eq!(seen, vec!["kept"]);
        assert_eq!(completion.text, "kept");

        // Even a whole later block is ignored.
        let mut decoder = StreamDecoder::new();
        decoder.feed(stream.as_bytes(), |_| {});
        assert!(decoder.is_terminated());
        decoder.feed(delta_line("late").as_bytes(), |_| panic!("decoded after sentinel"));
    }

    #[test]
    fn test_carry_over_flushes_on_finish() {
        // No trailing newline on the last line.
        let stream = delta_line("head");
        let tail = r#"data: {"choices":[{"delta":{"content":"tail"},"finish_reason":"stop"}]}"#;
        let (completion, seen) = collect(&[stream.as_bytes(), tail.as_bytes()]);
        assert_eq!(seen, vec!["head", "tail"]);
        assert_eq!(completion.text, "headtail");
        assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_malformed_lines_are_skipped_silently() {
        let stream = format!(
            "data: {{broken\n{}\n: comment\ndata: [DONE]\n",
            delta_line("ok").trim_end()
        );
        let (completion, seen) = collect(&[stream.as_bytes()]);
        assert_eq!(seen, vec!["ok"]);
        assert_eq!(completion.text, "ok");
    }

    #[test]
    fn test_finish_reason_tracks_last_observed() {
        let stream = format!(
            "data: {{\"choices\":[{{\"delta\":{{\"content\":\"x\"}},\"finish_reason\":\"length\"}}]}}\n{}",
            "data: {\"choices\":[{\"delta\":{},\"finish_reason\":\"stop\"}]}\n"
        );
        let (completion, _) = collect(&[stream.as_bytes()]);
        assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_absorb_complete_synthesizes_one_event() {
        let mut seen = Vec::new();
        let decoder = StreamDecoder::new();
        let body = r#"{"choices":[{"message":{"content":"whole story"},"finish_reason":"stop"}]}"#;
        let completion = decoder.absorb_complete(body, |d| seen.push(d.to_owned()));
        assert_eq!(seen, vec!["whole story"]);
        assert_eq!(completion.text, "whole story");
        assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_crlf_lines_are_tolerated() {
        let stream = format!("{}\r\ndata: [DONE]\r\n", delta_line("x").trim_end());
        let (completion, _) = collect(&[stream.as_bytes()]);
        assert_eq!(completion.text, "x");
    }
}
