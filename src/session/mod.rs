//! Session module: One generation from request to revealed text.
//!
//! A session owns nothing shared: each generation gets its own decoder,
//! its own typewriter, and its own seed. The transport and the prompt
//! text are the caller's; this module wires them to the streaming
//! pipeline and shapes the errors the caller presents.
//!
//! # Error policy
//!
//! - Transport failures and non-success statuses abort the generation
//!   and surface as [`SessionError`].
//! - Malformed individual stream lines are absorbed by the decoder and
//!   never become errors.
//! - A completed stream with no content is [`SessionError::EmptyCompletion`],
//!   a distinct user-visible failure.
//! - Cancellation is not an error.

mod config;
mod error;
mod pipeline;
mod transport;

pub use config::{ChatMessage, CompletionRequest, ModelConfig};
pub use error::{Result, SessionError};
pub use pipeline::{stream_completion, stream_to_typewriter};
pub use transport::{http_failure, BlockIter, Response, ScriptedComplete, ScriptedStream, Transport};
