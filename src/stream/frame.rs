//! Wire frames for the line-framed streaming completion protocol.
//!
//! Significant lines start with a `data:` marker. The payload is either
//! the `[DONE]` terminal sentinel or a JSON chunk whose first choice
//! carries an optional content delta and an optional completion reason.
//! Anything else on the wire (blank lines, keep-alives, malformed JSON)
//! is ignored without error.

use log::trace;
use serde::Deserialize;

/// Marker prefix of significant stream lines.
pub const DATA_PREFIX: &str = "data:";

/// Terminal sentinel payload.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One decoded protocol event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamFrame {
    /// A content and/or completion-reason carrying record.
    Delta {
        /// Incremental text fragment, absent on reason-only records.
        content: Option<String>,
        /// Completion reason, absent until the service reports one.
        finish_reason: Option<String>,
    },
    /// The terminal sentinel; nothing after it is significant.
    Done,
}

#[derive(Debug, Deserialize)]
struct ChunkBody {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    message: CompletionMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Parse one logical line into a frame.
///
/// Returns `None` for lines that carry nothing: no marker, an empty
/// payload, unparsable JSON, or a record with neither content nor a
/// completion reason. A bad line is never an error.
pub fn parse_line(line: &str) -> Option<StreamFrame> {
    let payload = line.trim().strip_prefix(DATA_PREFIX)?.trim();
    if payload.is_empty() {
        return None;
    }
    if payload == DONE_SENTINEL {
        return Some(StreamFrame::Done);
    }

    let body: ChunkBody = match serde_json::from_str(payload) {
        Ok(body) => body,
        Err(err) => {
            trace!("dropping unparsable stream line: {err}");
            return None;
        }
    };

    let choice = body.choices.into_iter().next()?;
    let content = choice.delta.content.filter(|c| !c.is_empty());
    let finish_reason = choice.finish_reason.filter(|r| !r.is_empty());
    if content.is_none() && finish_reason.is_none() {
        return None;
    }

    Some(StreamFrame::Delta {
        content,
        finish_reason,
    })
}

/// Parse a complete (non-streaming) response body.
///
/// Returns the full text of the first choice and its completion reason.
/// Used by the degrade path when the transport cannot stream.
pub fn parse_complete(body: &str) -> Option<(String, Option<String>)> {
    let body: CompletionBody = match serde_json::from_str(body) {
        Ok(body) => body,
        Err(err) => {
            trace!("dropping unparsable completion body: {err}");
            return None;
        }
    };
    let choice = body.choices.into_iter().next()?;
    let content = choice.message.content.unwrap_or_default();
    let finish_reason = choice.finish_reason.filter(|r| !r.is_empty());
    Some((content, finish_reason))
}
