//! Input record and observation snapshots.
//!
//! [`Block`] is the caller-supplied input. Everything else in this module is
//! a derived, read-only snapshot: it is recomputed from a [`Height`] on every
//! request and never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{LunarCycle, LunarPhase, SolarSeason, TidePhase, TideType};
use crate::height::Height;

/// A block as returned by a block explorer.
///
/// Only the fields the observatory reads are modeled; any other fields in an
/// explorer payload are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Block {
    /// Block hash.
    #[serde(default)]
    pub id: String,
    /// Block height.
    pub height: Height,
    /// Block header timestamp (unix seconds).
    #[serde(default)]
    pub timestamp: i64,
    /// Number of transactions in the block.
    #[serde(default)]
    pub tx_count: u64,
    /// Block weight in weight units.
    #[serde(default)]
    pub weight: u64,
}

impl Block {
    /// A block carrying only a height, with no weight or transactions.
    pub const fn at_height(height: Height) -> Self {
        Self {
            id: String::new(),
            height,
            timestamp: 0,
            tx_count: 0,
            weight: 0,
        }
    }
}

/// Complete tidal state for a block height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TidalState {
    /// Which tidal event of the current lunar cycle (0-111).
    pub event_number: i64,
    /// Which complete high-low pair of the current lunar cycle (0-55).
    pub cycle_number: i64,
    /// Blocks elapsed since the last extremum (0-35).
    pub blocks_into_event: i64,
    /// Blocks remaining until the next extremum (1-36).
    pub blocks_until_next: i64,
    /// High or low water.
    pub tide_type: TideType,
    /// Rising, falling, or slack.
    pub tide_phase: TidePhase,
    /// Signed tide height in blocks (-18 to +18).
    pub height: i64,
    /// Absolute block height of the next extremum.
    pub next_tide_block: i64,
    /// Absolute block height of the previous extremum.
    pub previous_tide_block: i64,
    /// The moon is new or full.
    pub is_spring_tide: bool,
    /// The moon is at first or last quarter.
    pub is_neap_tide: bool,
}

/// Summary of the tidal events within one lunar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TidalCycleInfo {
    /// First block of the lunar cycle.
    pub start_block: i64,
    /// Last block of the lunar cycle.
    pub end_block: i64,
    /// Number of tidal events in the cycle.
    pub total_events: i64,
    /// Number of high tides in the cycle.
    pub high_tides: i64,
    /// Number of low tides in the cycle.
    pub low_tides: i64,
}

// ---- Catalog entries ----

/// A lunar phase as rendered to consumers: the tag plus its display name
/// and emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LunarPhaseEntry {
    /// Catalog tag.
    pub id: LunarPhase,
    /// Display name, e.g. `"new"`.
    pub name: String,
    /// Moon emoji.
    pub emoji: String,
}

impl From<LunarPhase> for LunarPhaseEntry {
    fn from(phase: LunarPhase) -> Self {
        Self {
            id: phase,
            name: phase.name().to_owned(),
            emoji: phase.emoji().to_owned(),
        }
    }
}

/// A named lunar cycle with its display name and emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LunarCycleEntry {
    /// Catalog tag.
    pub id: LunarCycle,
    /// Display name, e.g. `"Friend Moon"`.
    pub name: String,
    /// Cycle emoji.
    pub emoji: String,
}

impl From<LunarCycle> for LunarCycleEntry {
    fn from(cycle: LunarCycle) -> Self {
        Self {
            id: cycle,
            name: cycle.name().to_owned(),
            emoji: cycle.emoji().to_owned(),
        }
    }
}

/// A solar season with its display name, emoji and opening marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SolarSeasonEntry {
    /// Catalog tag.
    pub id: SolarSeason,
    /// Display name, e.g. `"Summer"`.
    pub name: String,
    /// Season emoji.
    pub emoji: String,
    /// `"Equinox"` or `"Solstice"`.
    pub suffix: String,
}

impl From<SolarSeason> for SolarSeasonEntry {
    fn from(season: SolarSeason) -> Self {
        Self {
            id: season,
            name: season.name().to_owned(),
            emoji: season.emoji().to_owned(),
            suffix: season.suffix().to_owned(),
        }
    }
}

// ---- Observations ----

/// Lunar readings for a block height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LunarObservations {
    /// Current phase.
    pub current_phase: LunarPhaseEntry,
    /// Phase that follows the current one.
    pub next_phase: LunarPhaseEntry,
    /// Current named cycle.
    pub current_cycle: LunarCycleEntry,
    /// Cycle that follows the current one.
    pub next_cycle: LunarCycleEntry,
    /// Blocks until the phase changes.
    pub blocks_until_next_phase: i64,
    /// Blocks until the cycle changes.
    pub blocks_until_next_cycle: i64,
    /// Height within the current phase window.
    pub phase_block_height: i64,
    /// Height within the current cycle.
    pub cycle_block_height: i64,
}

/// Solar readings for a block height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SolarObservations {
    /// Current season.
    pub current_season: SolarSeasonEntry,
    /// Season that follows the current one.
    pub next_season: SolarSeasonEntry,
    /// Blocks until the season changes.
    pub blocks_until_next_season: i64,
    /// Blocks until the next halving.
    pub blocks_until_next_cycle: i64,
    /// Height within the current season.
    pub season_block_height: i64,
    /// Height within the current halving epoch.
    pub cycle_block_height: i64,
}

/// Tidal readings for a block height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TidalObservations {
    /// Full tidal state.
    pub state: TidalState,
    /// Human-readable description, e.g. `"high tide rising (spring tide)"`.
    pub description: String,
    /// Display banner with emoji and signed height.
    pub display: String,
}

/// Block-space readings derived from weight and transaction count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AtmosphereObservations {
    /// Block weight in weight units.
    pub weight: u64,
    /// Number of transactions.
    pub transaction_count: u64,
    /// Transactions per unit of weight utilization, 2 decimal places.
    /// `None` for an empty block.
    #[ts(as = "Option<String>")]
    pub conditions: Option<Decimal>,
}

/// Every reading for one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Observations {
    /// The observed height.
    pub height: Height,
    /// Composite date, e.g. `"AG_4_2_3_2016"`.
    pub formatted_date: String,
    /// Lunar readings.
    pub lunar: LunarObservations,
    /// Solar readings.
    pub solar: SolarObservations,
    /// Tidal readings.
    pub tidal: TidalObservations,
    /// Block-space readings, present when the block carried weight data.
    pub atmosphere: Option<AtmosphereObservations>,
}
