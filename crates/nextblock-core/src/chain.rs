//! Fixed chain parameters and the cyclic arithmetic shared by every deriver.
//!
//! All positions within a cycle are Euclidean remainders, so they lie in
//! `[0, length)` for every height, negative heights included. Catalog
//! indices derived from them are therefore always in range.

use nextblock_types::Height;

/// Height of the genesis block.
pub const GENESIS_BLOCK_HEIGHT: Height = Height::GENESIS;

/// Genesis block timestamp (2009-01-03T18:15:05Z) in unix milliseconds.
pub const GENESIS_BLOCK_TIMESTAMP_MS: i64 = 1_231_006_505_000;

/// Target spacing between blocks, in minutes.
pub const BLOCK_INTERVAL_MINUTES: i64 = 10;

/// Target spacing between blocks, in milliseconds.
pub const BLOCK_INTERVAL_MS: i64 = BLOCK_INTERVAL_MINUTES * 60 * 1000;

/// Blocks between subsidy halvings.
pub const HALVING_BLOCK: i64 = 210_000;

/// Blocks between difficulty adjustments.
pub const DIFFICULTY_ADJUSTMENT_BLOCK: i64 = 2016;

/// Consensus limit on block weight, in weight units.
pub const MAX_BLOCK_WEIGHT: u64 = 4_000_000;

/// Position of `height` within a cycle of `length` blocks.
///
/// `length` is always one of the positive constants above or in the
/// deriver modules.
pub(crate) const fn position(height: Height, length: i64) -> i64 {
    height.value().rem_euclid(length)
}

/// Convert a non-negative position quotient into a catalog index.
///
/// Quotients of Euclidean positions are never negative; the fallback is
/// never taken.
pub(crate) fn catalog_index(quotient: i64) -> usize {
    usize::try_from(quotient).unwrap_or(0)
}
