//! Offline-bloat detection
//!
//! A cache filled while the network is down contains placeholder fallbacks
//! instead of real artifacts. This check decides whether a set of cached
//! entries carries enough synthetic copies to warrant clearing the cache
//! and rebuilding it.

use tracing::debug;

/// Whether too large a fraction of `entries` are placeholder copies.
///
/// An entry counts as synthetic when its bytes start with `placeholder`.
/// The set is bloated when the synthetic fraction strictly exceeds
/// `tolerance`; an empty set is never bloated.
pub fn is_bloated(entries: &[Vec<u8>], placeholder: &[u8], tolerance: f32) -> bool {
    if entries.is_empty() {
        return false;
    }

    let synthetic = entries
        .iter()
        .filter(|entry| entry.starts_with(placeholder))
        .count();

    // Floating-point ratio: 3 synthetic out of 10 must read as 0.3, not 0.
    let ratio = synthetic as f32 / entries.len() as f32;
    debug!(
        synthetic,
        total = entries.len(),
        ratio,
        "Checked cached entries for offline bloat"
    );

    ratio > tolerance
}
