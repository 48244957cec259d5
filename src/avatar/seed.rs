//! Seed derivation: fingerprint hashing and entropy mixing.
//!
//! The seed biases the portrait's style family toward the chosen
//! configuration while the entropy and clock terms keep two generations
//! from an identical configuration visually distinct.

use rand::rngs::OsRng;
use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Signature used when no attribute has been selected yet.
const PLACEHOLDER_SIGNATURE: &str = "default";

/// An ordered tuple of selected configuration attribute values.
///
/// Ordering is significant: the same values in a different order hash
/// differently. The fingerprint is expected to be fully populated before
/// a generation starts and is immutable once submitted to one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionFingerprint {
    attributes: Vec<String>,
}

impl SelectionFingerprint {
    /// Create a fingerprint from ordered attribute values.
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// The placeholder fingerprint with no selections.
    pub const fn empty() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Append one attribute value, preserving order.
    pub fn push(&mut self, value: impl Into<String>) {
        self.attributes.push(value.into());
    }

    /// Selected attribute values in order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Whether every attribute slot carries a non-empty value.
    pub fn is_complete(&self) -> bool {
        !self.attributes.is_empty() && self.attributes.iter().all(|a| !a.is_empty())
    }

    /// Whether any attribute has been selected at all.
    ///
    /// Drives the foreground speckle density of the composed portrait.
    pub fn is_populated(&self) -> bool {
        self.attributes.iter().any(|a| !a.is_empty())
    }

    /// The order-sensitive signature string the hash is computed over.
    pub fn signature(&self) -> String {
        self.attributes.join("|")
    }

    /// Stable 32-bit FNV-1a hash of the signature.
    ///
    /// An unpopulated fingerprint hashes the placeholder signature so the
    /// default case still lands in a stable style family.
    pub fn hash32(&self) -> u32 {
        let signature = self.signature();
        let source = if signature.is_empty() {
            PLACEHOLDER_SIGNATURE
        } else {
            &signature
        };

        let mut hash: u32 = 2_166_136_261;
        for byte in source.bytes() {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(16_777_619);
        }
        hash
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionFingerprint {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Combines a fingerprint hash, an entropy word, and the wall clock into
/// one 32-bit seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedMixer;

impl SeedMixer {
    /// Derive a fresh seed for one generation.
    pub fn mix(self, fingerprint: &SelectionFingerprint) -> u32 {
        Self::combine(fingerprint.hash32(), entropy_word(), clock_word())
    }

    /// Pure combination step, exposed so tests can hold the entropy and
    /// clock terms constant.
    ///
    /// A zero result is coerced to 1; the generator treats zero state as
    /// degenerate.
    #[inline]
    pub const fn combine(hash: u32, entropy: u32, timestamp: u32) -> u32 {
        let seed = hash ^ entropy ^ timestamp;
        if seed == 0 {
            1
        } else {
            seed
        }
    }
}

/// 32 bits from the OS entropy source, falling back to the thread-local
/// generator when the OS source is unavailable.
fn entropy_word() -> u32 {
    let mut bytes = [0u8; 4];
    if OsRng.try_fill_bytes(&mut bytes).is_ok() {
        u32::from_le_bytes(bytes)
    } else {
        rand::thread_rng().next_u32()
    }
}

/// Current Unix time in milliseconds, truncated to 32 bits.
#[allow(clippy::cast_possible_truncation)]
fn clock_word() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_order_sensitive() {
        let ab = SelectionFingerprint::new(["a", "b"]);
        let ba = SelectionFingerprint::new(["b", "a"]);
        assert_ne!(ab.hash32(), ba.hash32());
    }

    #[test]
    fn test_hash_is_deterministic() {
        let fp = SelectionFingerprint::new(["male", "1978-1988", "1984", "coastal", "adaptive"]);
        assert_eq!(fp.hash32(), fp.clone().hash32());
    }

    #[test]
    fn test_empty_fingerprint_uses_placeholder() {
        let empty = SelectionFingerprint::empty();
        let blank = SelectionFingerprint::new(["", "", ""]);
        // Both carry an empty signature and land in the same family.
        assert_eq!(empty.hash32(), blank.hash32());
        assert!(!empty.is_populated());
        assert!(!blank.is_populated());
    }

    #[test]
    fn test_completeness_requires_every_slot() {
        let mut fp = SelectionFingerprint::new(["male", ""]);
        assert!(fp.is_populated());
        assert!(!fp.is_complete());
        fp = SelectionFingerprint::new(["male", "rural"]);
        assert!(fp.is_complete());
    }

    #[test]
    fn test_combine_is_xor_with_zero_guard() {
        assert_eq!(SeedMixer::combine(0xAAAA_0000, 0x0000_BBBB, 0), 0xAAAA_BBBB);
        assert_eq!(SeedMixer::combine(0x1234_5678, 0x1234_5678, 0), 1);
    }

    #[test]
    fn test_mix_produces_nonzero_seed() {
        let fp = SelectionFingerprint::new(["x"]);
        assert_ne!(SeedMixer.mix(&fp), 0);
    }
}
