//! Terminal module: Concrete display surfaces.
//!
//! This module contains:
//! - [`TerminalSink`]: A [`DisplaySink`](crate::typewriter::DisplaySink)
//!   writing revealed runs straight to a terminal with width-aware wrap
//! - [`render_raster`]: Truecolor half-block preview of a portrait

mod preview;
mod sink;

pub use preview::render_raster;
pub use sink::TerminalSink;
