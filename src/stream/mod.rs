//! Stream module: The token-delta wire protocol.
//!
//! This module implements the consuming half of a line-framed streaming
//! chat-completion protocol:
//!
//! 1. **Frames**: Only lines carrying the `data:` marker are significant.
//!    The payload is either the `[DONE]` terminal sentinel or a JSON
//!    record with an optional content fragment and completion reason.
//!
//! 2. **Decoding**: The transport delivers opaque byte blocks with
//!    arbitrary boundaries. [`StreamDecoder`] keeps the trailing
//!    incomplete line as carry-over, so content comes out identical no
//!    matter how the bytes were chunked.
//!
//! Malformed lines are dropped silently; a single bad frame is never
//! fatal to the stream.

mod decoder;
mod frame;

pub use decoder::{Completion, StreamDecoder};
pub use frame::{parse_complete, parse_line, StreamFrame, DATA_PREFIX, DONE_SENTINEL};
