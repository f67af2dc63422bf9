//! Solar season derivation.
//!
//! A solar cycle is one halving epoch (210000 blocks), split into four
//! seasons of 52500 blocks starting with spring.

use nextblock_types::{Height, SolarObservations, SolarSeason};

use crate::chain::{HALVING_BLOCK, catalog_index, position};
use crate::delta::Delta;

/// Blocks in one solar cycle.
pub const BLOCKS_IN_SOLAR_CYCLE: i64 = HALVING_BLOCK;

/// Blocks in one solar season.
pub const BLOCKS_IN_SOLAR_SEASON: i64 = BLOCKS_IN_SOLAR_CYCLE / 4;

/// Seasons in one solar cycle.
const SEASONS_PER_CYCLE: i64 = 4;

/// Solar readings for a single block height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solar {
    height: Height,
}

impl Solar {
    /// Create a solar deriver, defaulting to the genesis height when omitted.
    pub const fn new(height: Option<Height>) -> Self {
        Self::at(Delta::new(height).height())
    }

    /// Create a solar deriver for a known height.
    pub const fn at(height: Height) -> Self {
        Self { height }
    }

    /// Return the block height.
    pub const fn height(&self) -> Height {
        self.height
    }

    /// Position within the solar cycle (0-209999).
    pub const fn position_in_cycle(&self) -> i64 {
        position(self.height, BLOCKS_IN_SOLAR_CYCLE)
    }

    /// 0-based index of the current season.
    pub fn season_index(&self) -> usize {
        catalog_index(
            self.position_in_cycle()
                .saturating_mul(SEASONS_PER_CYCLE)
                .div_euclid(BLOCKS_IN_SOLAR_CYCLE),
        )
    }

    /// Index of the season after the current one, wrapping to 0.
    pub fn next_season_index(&self) -> usize {
        self.season_index().saturating_add(1).wrapping_rem(SolarSeason::COUNT)
    }

    /// Current season.
    pub fn season(&self) -> SolarSeason {
        SolarSeason::from_index(self.season_index())
    }

    /// Season after the current one.
    pub fn next_season(&self) -> SolarSeason {
        SolarSeason::from_index(self.next_season_index())
    }

    /// Blocks until the next season begins (1-52500).
    pub const fn blocks_until_next_season(&self) -> i64 {
        BLOCKS_IN_SOLAR_SEASON.saturating_sub(self.season_position())
    }

    /// Blocks until the next halving (1-210000).
    pub const fn blocks_until_next_cycle(&self) -> i64 {
        BLOCKS_IN_SOLAR_CYCLE.saturating_sub(self.position_in_cycle())
    }

    /// Height within the current season window.
    pub const fn season_block_height(&self) -> i64 {
        position(self.height, BLOCKS_IN_SOLAR_SEASON)
    }

    /// Height within the current halving epoch.
    pub const fn cycle_block_height(&self) -> i64 {
        position(self.height, BLOCKS_IN_SOLAR_CYCLE)
    }

    /// Position within the current season, measured from the cycle.
    pub const fn season_position(&self) -> i64 {
        self.position_in_cycle().rem_euclid(BLOCKS_IN_SOLAR_SEASON)
    }

    /// Snapshot of every solar reading.
    pub fn observe(&self) -> SolarObservations {
        SolarObservations {
            current_season: self.season().into(),
            next_season: self.next_season().into(),
            blocks_until_next_season: self.blocks_until_next_season(),
            blocks_until_next_cycle: self.blocks_until_next_cycle(),
            season_block_height: self.season_block_height(),
            cycle_block_height: self.cycle_block_height(),
        }
    }
}

impl Default for Solar {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn solar(height: i64) -> Solar {
        Solar::at(Height::new(height))
    }

    #[test]
    fn defaults_to_genesis() {
        assert_eq!(Solar::new(None).height(), Height::GENESIS);
        assert_eq!(Solar::default().season(), SolarSeason::Spring);
    }

    #[test]
    fn genesis_is_spring() {
        let genesis = solar(0);
        assert_eq!(genesis.season_index(), 0);
        assert_eq!(genesis.season(), SolarSeason::Spring);
        assert_eq!(genesis.next_season(), SolarSeason::Summer);
        assert_eq!(genesis.blocks_until_next_season(), 52_500);
        assert_eq!(genesis.blocks_until_next_cycle(), 210_000);
        assert_eq!(genesis.season_block_height(), 0);
        assert_eq!(genesis.cycle_block_height(), 0);
        assert_eq!(genesis.season_position(), 0);
        assert_eq!(genesis.position_in_cycle(), 0);
    }

    #[test]
    fn season_boundaries() {
        assert_eq!(solar(52_500).season(), SolarSeason::Summer);
        assert_eq!(solar(52_500).next_season(), SolarSeason::Autumn);
        assert_eq!(solar(52_500).season_block_height(), 0);
        assert_eq!(solar(52_500).season_position(), 0);
        assert_eq!(solar(105_000).season(), SolarSeason::Autumn);
        assert_eq!(solar(105_000).next_season(), SolarSeason::Winter);
        assert_eq!(solar(105_000).season_position(), 0);
        assert_eq!(solar(210_000).cycle_block_height(), 0);
    }

    #[test]
    fn winter_wraps_to_spring() {
        let winter = solar(209_999);
        assert_eq!(winter.season_index(), 3);
        assert_eq!(winter.next_season_index(), 0);
        assert_eq!(winter.next_season(), SolarSeason::Spring);
        assert_eq!(winter.blocks_until_next_season(), 1);
        assert_eq!(winter.blocks_until_next_cycle(), 1);
    }

    #[test]
    fn position_in_fourth_epoch() {
        let solar = solar(901_152);
        assert_eq!(solar.position_in_cycle(), 61_152);
        assert_eq!(solar.season_index(), 1);
        assert_eq!(solar.season(), SolarSeason::Summer);
        assert_eq!(solar.season_position(), 8652);
    }

    #[test]
    fn observe_collects_readings() {
        let obs = solar(901_152).observe();
        assert_eq!(obs.current_season.id, SolarSeason::Summer);
        assert_eq!(obs.next_season.id, SolarSeason::Autumn);
        assert_eq!(obs.next_season.suffix, "Equinox");
        assert_eq!(obs.cycle_block_height, 61_152);
        assert_eq!(obs.blocks_until_next_cycle, 148_848);
    }
}
