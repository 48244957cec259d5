//! Avatar module: Seeded procedural pixel portraits.
//!
//! This module contains:
//! - [`SelectionFingerprint`]: Ordered configuration attributes that bias the style family
//! - [`SeedMixer`]: Hash + entropy + clock mixed into one 32-bit seed
//! - [`PortraitRng`]: The deterministic generator behind every draw
//! - [`AvatarComposer`]: Ordered drawing passes over a [`Raster`]
//! - [`palette`]: Fixed color lists per semantic role
//!
//! # Reproducibility
//!
//! The composer's output is a pure function of its seed: two compositions
//! from the same seed are byte-identical, while the mixed-in entropy and
//! clock terms keep repeat generations from the same fingerprint distinct.

mod composer;
pub mod palette;
mod raster;
mod rng;
mod seed;

pub use composer::{portray, AccessoryStyle, AvatarComposer, AvatarSpec, EyeStyle, HairStyle, MouthStyle};
pub use raster::{Raster, Rgb, PORTRAIT_SIZE};
pub use rng::PortraitRng;
pub use seed::{SeedMixer, SelectionFingerprint};
