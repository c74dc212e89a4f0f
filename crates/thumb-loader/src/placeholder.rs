//! Built-in fallback image
//!
//! A fixed 16x16 light-gray PNG substituted whenever a fetch fails, so a
//! load pass always yields a usable artifact per URL. Cached copies of this
//! marker are also how an offline-built cache is recognized later: entries
//! whose bytes start with it are synthetic rather than fetched.

/// Fallback thumbnail: a 16x16 grayscale PNG, every pixel 0xAA.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, // PNG signature
    0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52, // IHDR, 13 bytes
    0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x10, // 16 x 16
    0x08, 0x00, 0x00, 0x00, 0x00, 0x3a, 0x98, 0xa0, // 8-bit grayscale
    0xbd, 0x00, 0x00, 0x00, 0x0f, 0x49, 0x44, 0x41, // IDAT, 15 bytes
    0x54, 0x78, 0xda, 0x63, 0x58, 0x85, 0x06, 0x18,
    0x46, 0xb6, 0x00, 0x00, 0x56, 0x56, 0xaa, 0x01,
    0x1d, 0x65, 0x99, 0x8f, 0x00, 0x00, 0x00, 0x00,
    0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82, // IEND
];
