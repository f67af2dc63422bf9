//! Tidal derivation.
//!
//! Tide height follows a triangle wave with a period of 72 blocks: it starts
//! at +18 on every multiple of 72, falls by one block per block to -18 at
//! position 36, then climbs back. Each run from one extremum to the next is
//! a tidal event of 36 blocks, so a lunar cycle of 4032 blocks holds 112
//! events (56 high tides and 56 low tides).
//!
//! ```text
//! +18 *                                   *
//!       *                               *
//!   0     * . . . . . . . . . . . . . *
//!           *                       *
//! -18          * * * (slack low) *
//!     0        32      36      40       72
//! ```
//!
//! Spring and neap tides are read off the lunar phase at the same height.

use core::fmt::Write as _;

use nextblock_types::{
    Height, InvalidHeight, TidalCycleInfo, TidalObservations, TidalState, TidePhase, TideType,
};

use crate::chain::position;
use crate::error::ObservationError;
use crate::lunar::{BLOCKS_IN_LUNAR_CYCLE, Lunar};

/// Blocks in one full high-low-high tidal cycle.
pub const TIDAL_CYCLE_BLOCKS: i64 = 72;

/// Blocks from one extremum to the next.
pub const BLOCKS_PER_TIDAL_EVENT: i64 = TIDAL_CYCLE_BLOCKS / 2;

/// Tidal events (extremum-to-extremum runs) in one lunar cycle.
pub const TIDAL_EVENTS_PER_CYCLE: i64 = BLOCKS_IN_LUNAR_CYCLE / BLOCKS_PER_TIDAL_EVENT;

/// Complete high-low pairs in one lunar cycle.
pub const COMPLETE_TIDAL_CYCLES: i64 = TIDAL_EVENTS_PER_CYCLE / 2;

/// Peak tide height, in blocks.
pub const MAX_HIGH_TIDE: i64 = 18;

/// Trough tide height, in blocks.
pub const MAX_LOW_TIDE: i64 = -MAX_HIGH_TIDE;

/// Blocks either side of an extremum that count as slack water.
pub const SLACK_WATER_WINDOW: i64 = 4;

/// Heights one block off an extremum get their own banner.
const SLACK_HIGH_TIDE: i64 = MAX_HIGH_TIDE - 1;
const SLACK_LOW_TIDE: i64 = MAX_LOW_TIDE + 1;

/// Tidal readings for a single block height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tidal {
    height: Height,
    lunar: Lunar,
}

impl Tidal {
    /// Create a tidal deriver. An explicit height is required.
    ///
    /// # Errors
    ///
    /// Returns [`ObservationError::InvalidHeight`] if `height` is `None`.
    pub fn new(height: Option<Height>) -> Result<Self, ObservationError> {
        height
            .map(Self::at)
            .ok_or_else(|| InvalidHeight::missing().into())
    }

    /// Create a tidal deriver for a known height.
    pub const fn at(height: Height) -> Self {
        Self {
            height,
            lunar: Lunar::at(height),
        }
    }

    /// Return the block height.
    pub const fn height(&self) -> Height {
        self.height
    }

    /// The lunar deriver used for spring/neap alignment.
    pub const fn lunar(&self) -> &Lunar {
        &self.lunar
    }

    /// Position within the 72-block tidal cycle.
    pub const fn position_in_cycle(&self) -> i64 {
        position(self.height, TIDAL_CYCLE_BLOCKS)
    }

    /// Signed tide height in blocks, from -18 to +18.
    pub const fn tide_height(&self) -> i64 {
        let position = self.position_in_cycle();
        if position <= BLOCKS_PER_TIDAL_EVENT {
            MAX_HIGH_TIDE.saturating_sub(position)
        } else {
            MAX_LOW_TIDE.saturating_add(position.saturating_sub(BLOCKS_PER_TIDAL_EVENT))
        }
    }

    /// High at or above the mean line, low below it.
    pub const fn tide_type(&self) -> TideType {
        if self.tide_height() >= 0 {
            TideType::High
        } else {
            TideType::Low
        }
    }

    /// Rising, falling, or slack around an extremum.
    pub const fn tide_phase(&self) -> TidePhase {
        let position = self.position_in_cycle();
        let from_peak = if position <= BLOCKS_PER_TIDAL_EVENT {
            position
        } else {
            TIDAL_CYCLE_BLOCKS.saturating_sub(position)
        };
        let from_trough = position.saturating_sub(BLOCKS_PER_TIDAL_EVENT).saturating_abs();

        if from_peak <= SLACK_WATER_WINDOW {
            TidePhase::SlackHigh
        } else if from_trough <= SLACK_WATER_WINDOW {
            TidePhase::SlackLow
        } else if position < BLOCKS_PER_TIDAL_EVENT {
            TidePhase::Falling
        } else {
            TidePhase::Rising
        }
    }

    // --- Events ---

    const fn position_in_lunar_cycle(&self) -> i64 {
        position(self.height, BLOCKS_IN_LUNAR_CYCLE)
    }

    /// Which tidal event of the current lunar cycle (0-111).
    pub const fn event_number(&self) -> i64 {
        self.position_in_lunar_cycle().div_euclid(BLOCKS_PER_TIDAL_EVENT)
    }

    /// Which complete high-low pair of the current lunar cycle (0-55).
    pub const fn cycle_number(&self) -> i64 {
        self.event_number().div_euclid(2)
    }

    /// Blocks since the most recent extremum (0-35).
    pub const fn blocks_into_event(&self) -> i64 {
        self.position_in_lunar_cycle().rem_euclid(BLOCKS_PER_TIDAL_EVENT)
    }

    /// Blocks until the next extremum strictly ahead (1-36).
    pub const fn blocks_until_next_tide(&self) -> i64 {
        BLOCKS_PER_TIDAL_EVENT.saturating_sub(self.blocks_into_event())
    }

    /// Absolute height of the next extremum, clamped to `i64::MAX`.
    pub const fn next_tide_block(&self) -> i64 {
        self.height.value().saturating_add(self.blocks_until_next_tide())
    }

    /// Absolute height of the previous extremum, strictly behind, clamped
    /// to `i64::MIN`.
    pub const fn previous_tide_block(&self) -> i64 {
        let into_event = self.blocks_into_event();
        if into_event == 0 {
            self.height.value().saturating_sub(BLOCKS_PER_TIDAL_EVENT)
        } else {
            self.height.value().saturating_sub(into_event)
        }
    }

    // --- Lunar alignment ---

    /// The moon is new or full.
    pub fn is_spring_tide(&self) -> bool {
        self.lunar.phase().is_syzygy()
    }

    /// The moon is at first or last quarter.
    pub fn is_neap_tide(&self) -> bool {
        self.lunar.phase().is_quarter()
    }

    // --- Aggregates ---

    /// Complete tidal state for this height.
    pub fn tidal_state(&self) -> TidalState {
        TidalState {
            event_number: self.event_number(),
            cycle_number: self.cycle_number(),
            blocks_into_event: self.blocks_into_event(),
            blocks_until_next: self.blocks_until_next_tide(),
            tide_type: self.tide_type(),
            tide_phase: self.tide_phase(),
            height: self.tide_height(),
            next_tide_block: self.next_tide_block(),
            previous_tide_block: self.previous_tide_block(),
            is_spring_tide: self.is_spring_tide(),
            is_neap_tide: self.is_neap_tide(),
        }
    }

    /// Bounds and event counts of the enclosing lunar cycle.
    ///
    /// Bounds clamp to the `i64` range. Within 4032 blocks of either end the
    /// window is no longer cycle-aligned, but it still contains the height.
    pub const fn tidal_cycle_info(&self) -> TidalCycleInfo {
        let start_block = self
            .height
            .value()
            .saturating_sub(self.position_in_lunar_cycle());
        TidalCycleInfo {
            start_block,
            end_block: start_block.saturating_add(BLOCKS_IN_LUNAR_CYCLE - 1),
            total_events: TIDAL_EVENTS_PER_CYCLE,
            high_tides: COMPLETE_TIDAL_CYCLES,
            low_tides: COMPLETE_TIDAL_CYCLES,
        }
    }

    // --- Rendering ---

    /// Emoji for the current tide type and phase.
    pub const fn emoji(&self) -> &'static str {
        match (self.tide_type(), self.tide_phase()) {
            (TideType::High, phase) if phase.is_slack() => "🌊",
            (TideType::Low, phase) if phase.is_slack() => "🏖️",
            (TideType::High, TidePhase::Falling) => "🌊⬇️",
            (TideType::Low, TidePhase::Falling) => "🏖️⬇️",
            (TideType::High, _) => "🌊⬆️",
            (TideType::Low, _) => "🏖️⬆️",
        }
    }

    /// Human-readable description, e.g. `"low tide at ebb (neap tide)"`.
    pub fn description(&self) -> String {
        let mut description = format!(
            "{} tide {}",
            self.tide_type().label(),
            self.tide_phase().describe()
        );
        if self.is_spring_tide() {
            description.push_str(" (spring tide)");
        } else if self.is_neap_tide() {
            description.push_str(" (neap tide)");
        }
        description
    }

    /// Display banner for the current tide.
    ///
    /// Extremes and the heights one block off them get fixed banners; every
    /// other height renders emoji, description and signed height.
    ///
    /// # Errors
    ///
    /// Returns [`ObservationError::Render`] if formatting fails.
    pub fn display(&self) -> Result<String, ObservationError> {
        let height = self.tide_height();
        let mut out = String::new();
        match height {
            MAX_HIGH_TIDE => write!(out, "🌊 High Tide (+{MAX_HIGH_TIDE})"),
            MAX_LOW_TIDE => write!(out, "🏖️ Low Tide ({MAX_LOW_TIDE})"),
            SLACK_HIGH_TIDE => write!(out, "🌊 Slack Tide (+{SLACK_HIGH_TIDE})"),
            SLACK_LOW_TIDE => write!(out, "🏖️ Slack Tide ({SLACK_LOW_TIDE})"),
            _ => write_standard_banner(&mut out, self.emoji(), &self.description(), height),
        }
        .map_err(|source| ObservationError::Render {
            what: "tide display",
            source,
        })?;
        Ok(out)
    }

    /// Snapshot of every tidal reading.
    ///
    /// # Errors
    ///
    /// Returns [`ObservationError::Render`] if the display banner fails.
    pub fn observe(&self) -> Result<TidalObservations, ObservationError> {
        Ok(TidalObservations {
            state: self.tidal_state(),
            description: self.description(),
            display: self.display()?,
        })
    }
}

/// `{emoji} Tide: {description} ({+height} blocks)`; zero carries no sign.
fn write_standard_banner(
    out: &mut String,
    emoji: &str,
    description: &str,
    height: i64,
) -> core::fmt::Result {
    write!(out, "{emoji} Tide: {description} (")?;
    if height > 0 {
        write!(out, "+")?;
    }
    write!(out, "{height} blocks)")
}
