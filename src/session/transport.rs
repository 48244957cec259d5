//! Transport seam: the network side as a black box.
//!
//! A transport turns a request into a response body. It may stream
//! opaque byte blocks, or hand back one complete structured response
//! when incremental delivery is unavailable; the pipeline handles both.

use super::config::{CompletionRequest, ModelConfig};
use super::error::{Result, SessionError};
use serde::Deserialize;
use std::collections::VecDeque;
use std::io;

/// Stream of opaque byte blocks ending with the iterator's end.
pub type BlockIter = Box<dyn Iterator<Item = io::Result<Vec<u8>>> + Send>;

/// Response body yielded by a transport.
pub enum Response {
    /// Incremental delivery: blocks with arbitrary boundaries.
    Stream(BlockIter),
    /// Degrade path: one complete structured response body.
    Complete(String),
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stream(_) => f.write_str("Response::Stream(..)"),
            Self::Complete(body) => write!(f, "Response::Complete({} bytes)", body.len()),
        }
    }
}

/// Delivers a request to the text service.
///
/// Implementations map non-success statuses to [`SessionError::Http`]
/// (see [`http_failure`]) and connection problems to
/// [`SessionError::Connection`].
pub trait Transport {
    /// Send the request and open the response body.
    fn send(&mut self, config: &ModelConfig, request: &CompletionRequest) -> Result<Response>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Map a non-success response to an error, preferring the service's
/// own `error.message` over the raw body.
pub fn http_failure(status: u16, body: &str) -> SessionError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty());

    let message = match detail {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_owned(),
        None => "request failed".to_owned(),
    };

    SessionError::Http { status, message }
}

/// Transport replaying canned byte blocks.
///
/// Used by tests and the offline demo to exercise the full pipeline
/// without a network.
#[derive(Debug, Default)]
pub struct ScriptedStream {
    blocks: VecDeque<Vec<u8>>,
}

impl ScriptedStream {
    /// Create a transport that yields the given blocks in order.
    pub fn new<I, B>(blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        Self {
            blocks: blocks.into_iter().map(Into::into).collect(),
        }
    }

    /// Split one stream body into fixed-size blocks.
    pub fn chunked(body: &str, block_len: usize) -> Self {
        let bytes = body.as_bytes();
        let len = block_len.max(1);
        Self::new(bytes.chunks(len).map(<[u8]>::to_vec))
    }
}

impl Transport for ScriptedStream {
    fn send(&mut self, _config: &ModelConfig, _request: &CompletionRequest) -> Result<Response> {
        let blocks: Vec<io::Result<Vec<u8>>> =
            std::mem::take(&mut self.blocks).into_iter().map(Ok).collect();
        Ok(Response::Stream(Box::new(blocks.into_iter())))
    }
}

/// Transport replaying one complete structured response.
#[derive(Debug)]
pub struct ScriptedComplete(pub String);

impl Transport for ScriptedComplete {
    fn send(&mut self, _config: &ModelConfig, _request: &CompletionRequest) -> Result<Response> {
        Ok(Response::Complete(self.0.clone()))
    }
}
