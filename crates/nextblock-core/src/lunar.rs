//! Lunar phase and cycle derivation.
//!
//! A lunar cycle spans two difficulty periods (4032 blocks) and is split
//! into 8 phases of 504 blocks, starting at full moon. Thirteen cycles form
//! a lunar year of 52416 blocks.

use nextblock_types::{Height, InvalidHeight, LunarCycle, LunarObservations, LunarPhase};

use crate::chain::{DIFFICULTY_ADJUSTMENT_BLOCK, catalog_index, position};
use crate::error::ObservationError;

/// Blocks in one lunar phase.
pub const BLOCKS_IN_LUNAR_PHASE: i64 = DIFFICULTY_ADJUSTMENT_BLOCK / 4;

/// Blocks in one lunar cycle.
pub const BLOCKS_IN_LUNAR_CYCLE: i64 = DIFFICULTY_ADJUSTMENT_BLOCK * 2;

/// Lunar cycles in one lunar year.
pub const LUNAR_CYCLES_PER_YEAR: i64 = 13;

/// Blocks in one lunar year.
pub const BLOCKS_IN_LUNAR_YEAR: i64 = BLOCKS_IN_LUNAR_CYCLE * LUNAR_CYCLES_PER_YEAR;

/// Phases in one lunar cycle.
const PHASES_PER_CYCLE: i64 = 8;

/// Lunar readings for a single block height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lunar {
    height: Height,
}

impl Lunar {
    /// Create a lunar deriver. Unlike [`Delta`](crate::Delta), an explicit
    /// height is required.
    ///
    /// # Errors
    ///
    /// Returns [`ObservationError::InvalidHeight`] if `height` is `None`.
    pub fn new(height: Option<Height>) -> Result<Self, ObservationError> {
        height
            .map(Self::at)
            .ok_or_else(|| InvalidHeight::missing().into())
    }

    /// Create a lunar deriver for a known height.
    pub const fn at(height: Height) -> Self {
        Self { height }
    }

    /// Return the block height.
    pub const fn height(&self) -> Height {
        self.height
    }

    /// Position within the lunar year (0-52415).
    pub const fn position_in_year(&self) -> i64 {
        position(self.height, BLOCKS_IN_LUNAR_YEAR)
    }

    /// Position within the lunar cycle (0-4031).
    pub const fn position_in_cycle(&self) -> i64 {
        position(self.height, BLOCKS_IN_LUNAR_CYCLE)
    }

    /// Position within the current phase window (0-503).
    pub const fn position_in_phase(&self) -> i64 {
        position(self.height, BLOCKS_IN_LUNAR_PHASE)
    }

    // --- Phases ---

    /// 0-based index of the current phase.
    pub fn phase_index(&self) -> usize {
        catalog_index(
            self.position_in_cycle()
                .saturating_mul(PHASES_PER_CYCLE)
                .div_euclid(BLOCKS_IN_LUNAR_CYCLE),
        )
    }

    /// Index of the phase after the current one, wrapping to 0.
    pub fn next_phase_index(&self) -> usize {
        self.phase_index().saturating_add(1).wrapping_rem(LunarPhase::COUNT)
    }

    /// Blocks until the next phase begins (1-504).
    pub const fn blocks_until_next_phase(&self) -> i64 {
        BLOCKS_IN_LUNAR_PHASE.saturating_sub(self.position_in_cycle().rem_euclid(BLOCKS_IN_LUNAR_PHASE))
    }

    /// Height within the current phase window.
    pub const fn phase_block_height(&self) -> i64 {
        self.position_in_phase()
    }

    /// Current phase.
    pub fn phase(&self) -> LunarPhase {
        LunarPhase::from_index(self.phase_index())
    }

    /// Phase after the current one.
    pub fn next_phase(&self) -> LunarPhase {
        LunarPhase::from_index(self.next_phase_index())
    }

    // --- Cycles ---

    /// 0-based index of the current cycle within the lunar year.
    pub fn cycle_index(&self) -> usize {
        catalog_index(self.position_in_year().div_euclid(BLOCKS_IN_LUNAR_CYCLE))
    }

    /// Index of the cycle after the current one, wrapping to 0.
    pub fn next_cycle_index(&self) -> usize {
        self.cycle_index().saturating_add(1).wrapping_rem(LunarCycle::COUNT)
    }

    /// Blocks until the next cycle begins (1-4032).
    pub const fn blocks_until_next_cycle(&self) -> i64 {
        BLOCKS_IN_LUNAR_CYCLE.saturating_sub(self.position_in_cycle())
    }

    /// Height within the current cycle.
    pub const fn cycle_block_height(&self) -> i64 {
        self.position_in_cycle()
    }

    /// Current cycle.
    pub fn cycle(&self) -> LunarCycle {
        LunarCycle::from_index(self.cycle_index())
    }

    /// Cycle after the current one.
    pub fn next_cycle(&self) -> LunarCycle {
        LunarCycle::from_index(self.next_cycle_index())
    }

    /// Snapshot of every lunar reading.
    pub fn observe(&self) -> LunarObservations {
        LunarObservations {
            current_phase: self.phase().into(),
            next_phase: self.next_phase().into(),
            current_cycle: self.cycle().into(),
            next_cycle: self.next_cycle().into(),
            blocks_until_next_phase: self.blocks_until_next_phase(),
            blocks_until_next_cycle: self.blocks_until_next_cycle(),
            phase_block_height: self.phase_block_height(),
            cycle_block_height: self.cycle_block_height(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    const HEIGHT: i64 = 901_632;

    const fn lunar(height: i64) -> Lunar {
        Lunar::at(Height::new(height))
    }

    #[test]
    fn constants_are_consistent() {
        assert_eq!(BLOCKS_IN_LUNAR_PHASE, 504);
        assert_eq!(BLOCKS_IN_LUNAR_CYCLE, 4032);
        assert_eq!(BLOCKS_IN_LUNAR_YEAR, 52_416);
        assert_eq!(
            BLOCKS_IN_LUNAR_PHASE * i64::try_from(LunarPhase::COUNT).unwrap(),
            BLOCKS_IN_LUNAR_CYCLE
        );
        assert_eq!(LUNAR_CYCLES_PER_YEAR, i64::try_from(LunarCycle::COUNT).unwrap());
    }

    #[test]
    fn requires_a_height() {
        assert!(matches!(
            Lunar::new(None),
            Err(ObservationError::InvalidHeight(_))
        ));
    }

    #[test]
    fn stores_height() {
        let lunar = Lunar::new(Some(Height::new(HEIGHT))).unwrap();
        assert_eq!(lunar.height(), Height::new(HEIGHT));
    }

    #[test]
    fn phase_readings() {
        let lunar = lunar(HEIGHT);
        assert_eq!(lunar.phase_index(), 4);
        assert_eq!(lunar.next_phase_index(), 5);
        assert_eq!(lunar.phase_block_height(), HEIGHT % 504);
        assert_eq!(lunar.blocks_until_next_phase(), 24);
        assert_eq!(lunar.phase(), LunarPhase::New);
        assert_eq!(lunar.next_phase(), LunarPhase::WaxingCrescent);
    }

    #[test]
    fn cycle_readings() {
        let lunar = lunar(HEIGHT);
        assert_eq!(lunar.cycle_index(), 2);
        assert_eq!(lunar.next_cycle_index(), 3);
        assert_eq!(lunar.blocks_until_next_cycle(), 1536);
        assert_eq!(lunar.cycle_block_height(), 2496);
        assert_eq!(lunar.cycle(), LunarCycle::Friend);
        assert_eq!(lunar.next_cycle(), LunarCycle::Whale);
        assert_eq!(lunar.cycle().name(), "Friend Moon");
    }

    #[test]
    fn phase_wraps_after_waxing_gibbous() {
        let last = lunar(BLOCKS_IN_LUNAR_CYCLE - 1);
        assert_eq!(last.phase_index(), 7);
        assert_eq!(last.next_phase_index(), 0);
        assert_eq!(last.next_phase(), LunarPhase::Full);
        assert_eq!(last.blocks_until_next_phase(), 1);
    }

    #[test]
    fn cycle_wraps_after_satoshis_moon() {
        let last = lunar(BLOCKS_IN_LUNAR_YEAR - 1);
        assert_eq!(last.cycle_index(), 12);
        assert_eq!(last.cycle(), LunarCycle::Satoshi);
        assert_eq!(last.next_cycle_index(), 0);
        assert_eq!(last.next_cycle(), LunarCycle::Orange);
    }

    #[test]
    fn genesis_is_full_orange_moon() {
        let genesis = lunar(0);
        assert_eq!(genesis.phase(), LunarPhase::Full);
        assert_eq!(genesis.cycle(), LunarCycle::Orange);
        assert_eq!(genesis.blocks_until_next_phase(), 504);
        assert_eq!(genesis.blocks_until_next_cycle(), 4032);
    }

    #[test]
    fn negative_heights_stay_in_range() {
        let before = lunar(-1);
        assert_eq!(before.position_in_cycle(), 4031);
        assert_eq!(before.phase(), LunarPhase::WaxingGibbous);
        assert_eq!(before.cycle(), LunarCycle::Satoshi);
    }

    #[test]
    fn observe_collects_readings() {
        let obs = lunar(HEIGHT).observe();
        assert_eq!(obs.current_phase.id, LunarPhase::New);
        assert_eq!(obs.current_phase.emoji, "🌑");
        assert_eq!(obs.current_cycle.name, "Friend Moon");
        assert_eq!(obs.next_cycle.id, LunarCycle::Whale);
        assert_eq!(obs.next_cycle.emoji, "🐳");
        assert_eq!(obs.blocks_until_next_phase, 24);
        assert_eq!(obs.cycle_block_height, 2496);
    }

    #[test]
    fn readings_are_idempotent() {
        let lunar = lunar(HEIGHT);
        assert_eq!(lunar.observe(), lunar.observe());
    }
}
