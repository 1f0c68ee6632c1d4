//! Content-derived trend identity.

use sha2::{Digest, Sha256};

/// SHA-256 fingerprint of a trend's identifying fields.
///
/// Gives each trend a stable id and a reproducible source of filler numbers
/// for fields the upstream omits, so the same trend always renders the same.
pub(crate) struct TrendFingerprint([u8; 32]);

impl TrendFingerprint {
    pub(crate) fn new(name: &str, category: &str, region: &str) -> Self {
        let mut hasher = Sha256::new();
        for part in [name, category, region] {
            hasher.update(part.as_bytes());
            hasher.update([0x1f]);
        }
        Self(hasher.finalize().into())
    }

    /// First 8 digest bytes as 16 lowercase hex characters.
    pub(crate) fn id(&self) -> String {
        use std::fmt::Write;
        self.0[..8].iter().fold(String::with_capacity(16), |mut s, b| {
            let _ = write!(s, "{b:02x}");
            s
        })
    }

    /// A value in `0..bound` read from digest `slot` (0..=11).
    pub(crate) fn derive(&self, slot: usize, bound: u16) -> u16 {
        let i = 8 + 2 * slot.min(11);
        u16::from_be_bytes([self.0[i], self.0[i + 1]]) % bound.max(1)
    }
}
