//! Typewriter module: Paced reveal of streamed text.
//!
//! Incoming deltas land in an unbounded render queue; a pacing loop pops
//! short runs and appends them to a display sink at a jittered cadence,
//! so the on-screen rhythm stays even no matter how bursty the network
//! side is.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   push(delta)   ┌──────────────────┐   append(run)  ┌─────────────┐
//! │ StreamDecoder│ ──────────────▶ │ Typewriter queue │ ─────────────▶ │ DisplaySink │
//! └──────────────┘                 │  (pump + delay)  │                └─────────────┘
//!                                  └──────────────────┘
//! ```
//!
//! [`Typewriter`] is the pure state machine: every pump step returns the
//! freshly drawn delay instead of sleeping, so tests drive it with a
//! seeded generator and zero real time. [`TypewriterActor`] puts the
//! machine on a dedicated thread with a real timeline, the same shape as
//! a ticker actor.

mod actor;
mod scheduler;

pub use actor::TypewriterActor;
pub use scheduler::{Pump, Typewriter, TypewriterConfig, TypewriterState};

/// A sink accepting appended text.
///
/// Each `append` call receives one indivisible revealed run.
pub trait DisplaySink {
    /// Append text after whatever was appended before.
    fn append(&mut self, text: &str);
}

/// Accumulating sink, mainly for tests and captures.
impl DisplaySink for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }
}
