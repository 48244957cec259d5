//! # Lifeloom
//!
//! A paced story-streaming engine with seeded pixel portraits.
//!
//! Lifeloom is the mechanical core of a generative-chat front-end: it
//! consumes a token-delta wire protocol from a text service, reveals
//! the text at a typewriter cadence decoupled from network arrival, and
//! draws a reproducible 32×32 pixel portrait from a configuration
//! fingerprint.
//!
//! ## Core Concepts
//!
//! - **Chunk-agnostic decoding**: The stream decoder carries incomplete
//!   lines across block boundaries, so content is identical no matter
//!   how the transport splits bytes
//! - **Paced reveal**: An unbounded render queue drained in 1–2 cluster
//!   runs with fresh uniform jitter per step
//! - **Seeded portraits**: One owned 32-bit generator state per draw;
//!   same seed, byte-identical raster
//! - **Per-generation isolation**: Decoder, typewriter, and generator
//!   are fresh instances per session with no shared mutable state
//!
//! ## Example
//!
//! ```rust,ignore
//! use lifeloom::{portray, SelectionFingerprint, TypewriterActor, TypewriterConfig};
//!
//! let fingerprint = SelectionFingerprint::new(["female", "1978-1988", "1984", "coastal"]);
//! let raster = portray(&fingerprint);
//!
//! let typewriter = TypewriterActor::spawn(String::new(), TypewriterConfig::default());
//! typewriter.push("Hello");
//! typewriter.finish();
//! typewriter.wait();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod avatar;
pub mod session;
pub mod stream;
pub mod terminal;
pub mod typewriter;

// Re-exports for convenience
pub use avatar::{
    portray, AvatarComposer, PortraitRng, Raster, Rgb, SeedMixer, SelectionFingerprint,
    PORTRAIT_SIZE,
};
pub use session::{
    stream_completion, stream_to_typewriter, ChatMessage, CompletionRequest, ModelConfig,
    ScriptedStream, SessionError, Transport,
};
pub use stream::{Completion, StreamDecoder, StreamFrame};
pub use terminal::{render_raster, TerminalSink};
pub use typewriter::{DisplaySink, Typewriter, TypewriterActor, TypewriterConfig, TypewriterState};
