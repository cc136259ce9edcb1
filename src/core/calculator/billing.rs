//! Billing arithmetic: everything is billed in 15-minute blocks.

/// One billing block, in seconds.
pub const BLOCK_SECONDS: u64 = 900;

/// Round elapsed seconds up to the next full block.
///
/// Zero, negative and NaN inputs bill nothing; any positive amount bills
/// at least one block.
pub fn round_to_block(raw_seconds: f64) -> u64 {
    if raw_seconds.is_nan() || raw_seconds <= 0.0 {
        return 0;
    }
    // `as` saturates for huge floats; keep the product in range too
    let blocks = (raw_seconds / BLOCK_SECONDS as f64).ceil() as u64;
    blocks.saturating_mul(BLOCK_SECONDS)
}

/// `(hours, minutes)`, truncating leftover seconds.
pub fn split_hm(seconds: u64) -> (u64, u64) {
    let minutes = seconds / 60;
    (minutes / 60, minutes % 60)
}

pub fn whole_minutes(seconds: u64) -> u64 {
    seconds / 60
}
