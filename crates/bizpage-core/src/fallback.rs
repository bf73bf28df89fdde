//! Deterministic fallback hero images.
//!
//! A record without a usable image URL gets one from [`FALLBACK_IMAGES`],
//! chosen by a string hash of the site key so the same site always shows the
//! same picture across reloads.

/// Shortest string accepted as an image URL (`http://a.b`).
pub const MIN_IMAGE_URL_LEN: usize = 10;

/// Fixed pool of fallback hero images.
pub const FALLBACK_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1526772662000-3f88f10405ff?q=80&w=1800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=1800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1470770841072-f978cf4d019e?q=80&w=1800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1449844908441-8829872d2607?q=80&w=1800&auto=format&fit=crop",
];

/// `hash = hash * 31 + unit (mod 2^32)` over the UTF-16 code units of `seed`.
#[must_use]
pub fn seed_hash(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Pick the fallback image for `seed`. Always one of [`FALLBACK_IMAGES`].
#[must_use]
pub fn pick_fallback(seed: &str) -> &'static str {
    // u32 -> usize is lossless on every supported target.
    let idx = seed_hash(seed) as usize % FALLBACK_IMAGES.len();
    FALLBACK_IMAGES[idx]
}

/// Whether `url` is long enough to be worth rendering as an image source.
#[must_use]
pub fn is_plausible_url(url: &str) -> bool {
    url.trim().chars().count() >= MIN_IMAGE_URL_LEN
}
