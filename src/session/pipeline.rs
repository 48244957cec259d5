//! Generation pipeline: transport → decoder → typewriter.
//!
//! The pipeline pulls blocks from the transport, lets the decoder carve
//! frames out of them, and forwards each content fragment the moment it
//! is recognized. Content already revealed stays put when the stream
//! fails mid-way; the caller only gets one error to present.

use super::error::{Result, SessionError};
use super::transport::{Response, Transport};
use crate::stream::{Completion, StreamDecoder};
use crate::typewriter::TypewriterActor;
use log::{debug, warn};

/// Drive one generation, forwarding each fragment to the callback.
///
/// The callback fires synchronously, in stream order. Returns the full
/// accumulated content and the last observed completion reason.
pub fn stream_completion<T, F>(
    transport: &mut T,
    config: &super::config::ModelConfig,
    request: &super::config::CompletionRequest,
    mut on_delta: F,
) -> Result<Completion>
where
    T: Transport,
    F: FnMut(&str),
{
    debug!("requesting completion model={}", request.model);
    let response = transport.send(config, request)?;

    let mut decoder = StreamDecoder::new();
    let completion = match response {
        Response::Stream(blocks) => {
            for block in blocks {
                decoder.feed(&block?, &mut on_delta);
                if decoder.is_terminated() {
                    break;
                }
            }
            decoder.finish(&mut on_delta)
        }
        Response::Complete(body) => {
            debug!("transport cannot stream, absorbing complete response");
            decoder.absorb_complete(&body, &mut on_delta)
        }
    };

    if completion.text.trim().is_empty() {
        warn!("stream completed without content");
        return Err(SessionError::EmptyCompletion);
    }
    Ok(completion)
}

/// Drive one generation into a typewriter.
///
/// The typewriter's input is closed and its completion awaited whether
/// the stream succeeds or fails, so everything already queued finishes
/// revealing and a pending wait is never left unresolved.
pub fn stream_to_typewriter<T: Transport>(
    transport: &mut T,
    config: &super::config::ModelConfig,
    request: &super::config::CompletionRequest,
    typewriter: &TypewriterActor,
) -> Result<Completion> {
    let result = stream_completion(transport, config, request, |delta| typewriter.push(delta));
    typewriter.finish();
    typewriter.wait();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::config::{ChatMessage, CompletionRequest, ModelConfig};
    use crate::session::transport::{ScriptedComplete, ScriptedStream};
    use crate::typewriter::TypewriterConfig;
    use std::time::Duration;

    fn config() -> ModelConfig {
        serde_json::from_str(
            r#"{"base_url":"https://api.example.test/v1/chat/completions",
                "api_key":"k","model":"story-1"}"#,
        )
        .unwrap()
    }

    fn request(cfg: &ModelConfig) -> CompletionRequest {
        CompletionRequest::streaming(cfg, vec![ChatMessage::user("tell me a life")])
    }

    fn sse_body() -> String {
        concat!(
            "data: {\"choices\":[{\"delta\":{\"content\":\"A\"}}]}\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"B\"}}]}\n",
            "data: {\"choices\":[{\"delta\":{},\"finish_reason\":\"stop\"}]}\n",
            "data: [DONE]\n",
        )
        .to_owned()
    }

    #[test]
    fn test_streams_fragments_in_order() {
        let cfg = config();
        let mut transport = ScriptedStream::chunked(&sse_body(), 7);
        let mut seen = Vec::new();
        let completion =
            stream_completion(&mut transport, &cfg, &request(&cfg), |d| seen.push(d.to_owned()))
                .unwrap();
        assert_eq!(seen, vec!["A", "B"]);
        assert_eq!(completion.text, "AB");
        assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_empty_stream_is_a_distinct_failure() {
        let cfg = config();
        let mut transport = ScriptedStream::new(["data: [DONE]\n".as_bytes().to_vec()]);
        let err = stream_completion(&mut transport, &cfg, &request(&cfg), |_| {}).unwrap_err();
        assert!(matches!(err, SessionError::EmptyCompletion));
    }

    #[test]
    fn test_degrade_path_synthesizes_one_event() {
        let cfg = config();
        let body = r#"{"choices":[{"message":{"content":"whole"},"finish_reason":"stop"}]}"#;
        let mut transport = ScriptedComplete(body.to_owned());
        let mut seen = Vec::new();
        let completion =
            stream_completion(&mut transport, &cfg, &request(&cfg), |d| seen.push(d.to_owned()))
                .unwrap();
        assert_eq!(seen, vec!["whole"]);
        assert_eq!(completion.text, "whole");
    }

    #[test]
    fn test_revealed_content_survives_a_mid_stream_failure() {
        struct FailingAfterOne;
        impl Transport for FailingAfterOne {
            fn send(
                &mut self,
                _config: &ModelConfig,
                _request: &CompletionRequest,
            ) -> crate::session::error::Result<Response> {
                let blocks: Vec<std::io::Result<Vec<u8>>> = vec![
                    Ok(b"data: {\"choices\":[{\"delta\":{\"content\":\"early\"}}]}\n".to_vec()),
                    Err(std::io::Error::new(
                        std::io::ErrorKind::ConnectionReset,
                        "reset",
                    )),
                ];
                Ok(Response::Stream(Box::new(blocks.into_iter())))
            }
        }

        let cfg = config();
        let mut seen = String::new();
        let err = stream_completion(&mut FailingAfterOne, &cfg, &request(&cfg), |d| {
            seen.push_str(d);
        })
        .unwrap_err();
        assert!(matches!(err, SessionError::Connection(_)));
        assert_eq!(seen, "early");
    }

    #[test]
    fn test_typewriter_pipeline_reveals_everything() {
        let cfg = config();
        let mut transport = ScriptedStream::chunked(&sse_body(), 5);
        let (tx, rx) = crossbeam_channel::unbounded::<String>();

        struct ChannelSink(crossbeam_channel::Sender<String>);
        impl crate::typewriter::DisplaySink for ChannelSink {
            fn append(&mut self, text: &str) {
                let _ = self.0.send(text.to_owned());
            }
        }

        let actor = TypewriterActor::spawn(
            ChannelSink(tx),
            TypewriterConfig {
                min_delay: Duration::from_millis(1),
                max_delay: Duration::from_millis(2),
                ..TypewriterConfig::default()
            },
        );
        let completion = stream_to_typewriter(&mut transport, &cfg, &request(&cfg), &actor).unwrap();
        assert_eq!(completion.text, "AB");

        let mut shown = String::new();
        while let Ok(run) = rx.try_recv() {
            shown.push_str(&run);
        }
        assert_eq!(shown, "AB");
        actor.join();
    }
}
