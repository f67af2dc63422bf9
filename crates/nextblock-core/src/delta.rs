//! The base height wrapper.
//!
//! [`Delta`] holds one block height and provides the arithmetic every other
//! deriver builds on: signed differences between heights, estimation of a
//! height from a calendar date, and the composite date encoder.
//!
//! The composite date has the shape
//! `{era}_{halving}_{season}_{moon}_{position}`, e.g. `AG_4_2_3_2016`:
//! underscores keep it usable as a hashtag, season and moon are 1-based,
//! and the lunar position is zero-padded to at least 4 digits.

use chrono::{DateTime, Utc};
use nextblock_types::{Era, Height, InvalidHeight};

use crate::chain::{
    BLOCK_INTERVAL_MS, GENESIS_BLOCK_HEIGHT, GENESIS_BLOCK_TIMESTAMP_MS, HALVING_BLOCK,
};

/// An immutable block height with difference and date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    height: Height,
}

impl Delta {
    /// Wrap a height, defaulting to the genesis height when omitted.
    pub const fn new(height: Option<Height>) -> Self {
        match height {
            Some(height) => Self { height },
            None => Self {
                height: GENESIS_BLOCK_HEIGHT,
            },
        }
    }

    /// Wrap a height.
    pub const fn at(height: Height) -> Self {
        Self { height }
    }

    /// Return the stored height.
    pub const fn height(&self) -> Height {
        self.height
    }

    /// Estimate the height reached at `date`, assuming one block every
    /// 10 minutes since the genesis block.
    ///
    /// No bounds checking is applied: dates before genesis yield negative
    /// heights.
    pub fn height_from_date(date: DateTime<Utc>) -> Height {
        let elapsed_ms = date
            .timestamp_millis()
            .saturating_sub(GENESIS_BLOCK_TIMESTAMP_MS);
        Height::new(elapsed_ms.div_euclid(BLOCK_INTERVAL_MS))
    }

    /// Signed number of blocks from `other` to this height.
    ///
    /// Positive when this height is ahead of `other`. `other` may be a raw
    /// `i64`, a [`Height`], or another [`Delta`]. Saturates at the `i64`
    /// range.
    pub fn delta(&self, other: impl Into<Self>) -> i64 {
        self.height
            .value()
            .saturating_sub(other.into().height.value())
    }

    /// Number of completed halving epochs, floored (negative before genesis).
    pub const fn halving_epoch(&self) -> i64 {
        self.height.value().div_euclid(HALVING_BLOCK)
    }

    /// Which side of genesis this height lies on.
    pub const fn era(&self) -> Era {
        if self.height.is_after_genesis() {
            Era::AfterGenesis
        } else {
            Era::BeforeGenesis
        }
    }

    /// Encode a composite date from 0-based season and cycle indices and a
    /// position within the lunar cycle.
    pub fn format_composite_date(
        &self,
        season_index: usize,
        cycle_index: usize,
        position_in_cycle: i64,
    ) -> String {
        format!(
            "{}_{}_{}_{}_{position_in_cycle:04}",
            self.era().code(),
            self.halving_epoch(),
            season_index.saturating_add(1),
            cycle_index.saturating_add(1),
        )
    }
}

impl Default for Delta {
    fn default() -> Self {
        Self::new(None)
    }
}

impl From<Height> for Delta {
    fn from(height: Height) -> Self {
        Self::at(height)
    }
}

impl From<i64> for Delta {
    fn from(height: i64) -> Self {
        Self::at(Height::new(height))
    }
}

impl TryFrom<f64> for Delta {
    type Error = InvalidHeight;

    fn try_from(height: f64) -> Result<Self, Self::Error> {
        Height::try_from(height).map(Self::at)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const fn delta(height: i64) -> Delta {
        Delta::at(Height::new(height))
    }

    #[test]
    fn stores_height() {
        assert_eq!(delta(100_000).height(), Height::new(100_000));
    }

    #[test]
    fn defaults_to_genesis() {
        assert_eq!(Delta::new(None).height(), Height::GENESIS);
        assert_eq!(Delta::default().height(), Height::GENESIS);
    }

    #[test]
    fn rejects_fractional_heights() {
        assert!(Delta::try_from(1.5).is_err());
        assert_eq!(Delta::try_from(7.0).unwrap().height(), Height::new(7));
    }

    #[test]
    fn delta_against_raw_heights() {
        let d = delta(100_000);
        assert_eq!(d.delta(100_000), 0);
        assert_eq!(d.delta(100_001), -1);
        assert_eq!(d.delta(99_999), 1);
    }

    #[test]
    fn delta_against_other_deltas() {
        let genesis = Delta::default();
        assert_eq!(genesis.delta(delta(100_000)), -100_000);
        assert_eq!(genesis.delta(100_000), -100_000);
        assert_eq!(genesis.delta(Height::new(5)), -5);
    }

    #[test]
    fn delta_saturates() {
        assert_eq!(delta(i64::MIN).delta(1), i64::MIN);
        assert_eq!(delta(i64::MAX).delta(-1), i64::MAX);
    }

    #[test]
    fn height_from_date() {
        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Delta::height_from_date(date), Height::new(841_138));
    }

    #[test]
    fn height_from_date_at_and_before_genesis() {
        let genesis = Utc.with_ymd_and_hms(2009, 1, 3, 18, 15, 5).unwrap();
        assert_eq!(Delta::height_from_date(genesis), Height::GENESIS);

        let one_minute_before = Utc.with_ymd_and_hms(2009, 1, 3, 18, 14, 5).unwrap();
        assert_eq!(Delta::height_from_date(one_minute_before), Height::new(-1));
    }

    #[test]
    fn halving_epochs_floor() {
        assert_eq!(delta(0).halving_epoch(), 0);
        assert_eq!(delta(209_999).halving_epoch(), 0);
        assert_eq!(delta(210_000).halving_epoch(), 1);
        assert_eq!(delta(901_152).halving_epoch(), 4);
        assert_eq!(delta(-1).halving_epoch(), -1);
    }

    #[test]
    fn composite_date_after_one_halving() {
        assert_eq!(delta(210_000).format_composite_date(0, 1, 100), "AG_1_1_2_0100");
    }

    #[test]
    fn composite_date_at_genesis() {
        assert_eq!(delta(0).format_composite_date(0, 0, 0), "AG_0_1_1_0000");
    }

    #[test]
    fn composite_date_after_three_halvings() {
        assert_eq!(delta(630_000).format_composite_date(2, 3, 500), "AG_3_3_4_0500");
    }

    #[test]
    fn composite_date_pads_but_never_truncates() {
        assert_eq!(delta(100_000).format_composite_date(0, 0, 5), "AG_0_1_1_0005");
        assert_eq!(delta(210_000).format_composite_date(0, 1, 4032), "AG_1_1_2_4032");
        assert_eq!(delta(210_000).format_composite_date(0, 1, 123_456), "AG_1_1_2_123456");
    }

    #[test]
    fn composite_date_before_genesis() {
        assert_eq!(delta(-1).format_composite_date(3, 12, 4031), "BG_-1_4_13_4031");
    }

    #[test]
    fn era_changes_at_genesis() {
        assert_eq!(delta(0).era(), Era::AfterGenesis);
        assert_eq!(delta(-1).era(), Era::BeforeGenesis);
    }
}
