//! Enumeration types for the nextblock observatory.
//!
//! The lunar and solar catalogs are fixed, read-only tables indexed from 0.
//! Each catalog enum exposes its table as `ALL` and resolves computed
//! indices with `from_index`, which wraps modulo the catalog length so a
//! lookup can never fall outside the table.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Lunar phases
// ---------------------------------------------------------------------------

/// One of the 8 phases of a lunar cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum LunarPhase {
    /// Full moon; the cycle starts here.
    Full,
    /// Waning gibbous.
    WaningGibbous,
    /// Last quarter.
    LastQuarter,
    /// Waning crescent.
    WaningCrescent,
    /// New moon.
    New,
    /// Waxing crescent.
    WaxingCrescent,
    /// First quarter.
    FirstQuarter,
    /// Waxing gibbous.
    WaxingGibbous,
}

impl LunarPhase {
    /// Number of phases in one lunar cycle.
    pub const COUNT: usize = 8;

    /// All phases in cycle order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
    ];

    /// Resolve a 0-based phase index, wrapping modulo [`Self::COUNT`].
    pub const fn from_index(index: usize) -> Self {
        match index.wrapping_rem(Self::COUNT) {
            0 => Self::Full,
            1 => Self::WaningGibbous,
            2 => Self::LastQuarter,
            3 => Self::WaningCrescent,
            4 => Self::New,
            5 => Self::WaxingCrescent,
            6 => Self::FirstQuarter,
            // 7 is the only remaining case.
            _ => Self::WaxingGibbous,
        }
    }

    /// 0-based position of this phase in the cycle.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::WaningGibbous => "waning gibbous",
            Self::LastQuarter => "last quarter",
            Self::WaningCrescent => "waning crescent",
            Self::New => "new",
            Self::WaxingCrescent => "waxing crescent",
            Self::FirstQuarter => "first quarter",
            Self::WaxingGibbous => "waxing gibbous",
        }
    }

    /// Moon emoji for this phase.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Full => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
            Self::New => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
        }
    }

    /// New and full moons produce spring tides.
    pub const fn is_syzygy(self) -> bool {
        matches!(self, Self::New | Self::Full)
    }

    /// First and last quarters produce neap tides.
    pub const fn is_quarter(self) -> bool {
        matches!(self, Self::FirstQuarter | Self::LastQuarter)
    }
}

// ---------------------------------------------------------------------------
// Lunar cycles
// ---------------------------------------------------------------------------

/// One of the 13 named lunar cycles ("moons") of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum LunarCycle {
    /// Orange Moon.
    Orange,
    /// Bird Moon.
    Bird,
    /// Friend Moon.
    Friend,
    /// Whale Moon.
    Whale,
    /// Bull Moon.
    Bull,
    /// Bear Moon.
    Bear,
    /// Corn Moon.
    Corn,
    /// Lightning Moon.
    Lightning,
    /// Squirrel Moon.
    Squirrel,
    /// Wave Moon.
    Wave,
    /// Ice Moon.
    Ice,
    /// Diamond Moon.
    Diamond,
    /// Satoshi's Moon; closes the lunar year.
    Satoshi,
}

impl LunarCycle {
    /// Number of cycles in one lunar year.
    pub const COUNT: usize = 13;

    /// All cycles in year order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Orange,
        Self::Bird,
        Self::Friend,
        Self::Whale,
        Self::Bull,
        Self::Bear,
        Self::Corn,
        Self::Lightning,
        Self::Squirrel,
        Self::Wave,
        Self::Ice,
        Self::Diamond,
        Self::Satoshi,
    ];

    /// Resolve a 0-based cycle index, wrapping modulo [`Self::COUNT`].
    pub const fn from_index(index: usize) -> Self {
        match index.wrapping_rem(Self::COUNT) {
            0 => Self::Orange,
            1 => Self::Bird,
            2 => Self::Friend,
            3 => Self::Whale,
            4 => Self::Bull,
            5 => Self::Bear,
            6 => Self::Corn,
            7 => Self::Lightning,
            8 => Self::Squirrel,
            9 => Self::Wave,
            10 => Self::Ice,
            11 => Self::Diamond,
            _ => Self::Satoshi,
        }
    }

    /// 0-based position of this cycle in the lunar year.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, e.g. `"Friend Moon"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Orange => "Orange Moon",
            Self::Bird => "Bird Moon",
            Self::Friend => "Friend Moon",
            Self::Whale => "Whale Moon",
            Self::Bull => "Bull Moon",
            Self::Bear => "Bear Moon",
            Self::Corn => "Corn Moon",
            Self::Lightning => "Lightning Moon",
            Self::Squirrel => "Squirrel Moon",
            Self::Wave => "Wave Moon",
            Self::Ice => "Ice Moon",
            Self::Diamond => "Diamond Moon",
            Self::Satoshi => "Satoshi's Moon",
        }
    }

    /// Emoji for this cycle.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Orange => "🍊",
            Self::Bird => "🪶",
            Self::Friend => "🫂",
            Self::Whale => "🐳",
            Self::Bull => "🐂",
            Self::Bear => "🐻",
            Self::Corn => "🌽",
            Self::Lightning => "⚡",
            Self::Squirrel => "🥜",
            Self::Wave => "🌊",
            Self::Ice => "🧊",
            Self::Diamond => "💎",
            Self::Satoshi => "₿",
        }
    }
}

// ---------------------------------------------------------------------------
// Solar seasons
// ---------------------------------------------------------------------------

/// One of the 4 seasons of a solar cycle (one halving epoch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SolarSeason {
    /// First quarter of the halving epoch.
    Spring,
    /// Second quarter.
    Summer,
    /// Third quarter.
    Autumn,
    /// Final quarter, ending at the halving.
    Winter,
}

impl SolarSeason {
    /// Number of seasons in one solar cycle.
    pub const COUNT: usize = 4;

    /// All seasons in cycle order.
    pub const ALL: [Self; Self::COUNT] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Resolve a 0-based season index, wrapping modulo [`Self::COUNT`].
    pub const fn from_index(index: usize) -> Self {
        match index.wrapping_rem(Self::COUNT) {
            0 => Self::Spring,
            1 => Self::Summer,
            2 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// 0-based position of this season in the cycle.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    /// Emoji for this season.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Spring => "🌱",
            Self::Summer => "🌞",
            Self::Autumn => "🍂",
            Self::Winter => "❄️",
        }
    }

    /// The astronomical marker that opens the season.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Spring | Self::Autumn => "Equinox",
            Self::Summer | Self::Winter => "Solstice",
        }
    }
}

// ---------------------------------------------------------------------------
// Tides
// ---------------------------------------------------------------------------

/// Whether the water is above or below the mean line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TideType {
    /// Tide height at or above zero.
    High,
    /// Tide height below zero.
    Low,
}

impl TideType {
    /// Lowercase label, e.g. `"high"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

/// Movement of the water within a tidal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TidePhase {
    /// Climbing from the trough toward the peak.
    Rising,
    /// Dropping from the peak toward the trough.
    Falling,
    /// Slack water around the peak.
    SlackHigh,
    /// Slack water around the trough.
    SlackLow,
}

impl TidePhase {
    /// Phrase used in tide descriptions.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::SlackHigh => "at peak",
            Self::SlackLow => "at ebb",
        }
    }

    /// `true` for either slack-water phase.
    pub const fn is_slack(self) -> bool {
        matches!(self, Self::SlackHigh | Self::SlackLow)
    }
}

// ---------------------------------------------------------------------------
// Eras
// ---------------------------------------------------------------------------

/// Which side of the genesis block a height lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Era {
    /// Heights at or after genesis.
    #[serde(rename = "AG")]
    AfterGenesis,
    /// Negative heights.
    #[serde(rename = "BG")]
    BeforeGenesis,
}

impl Era {
    /// Two-letter code used in composite dates.
    pub const fn code(self) -> &'static str {
        match self {
            Self::AfterGenesis => "AG",
            Self::BeforeGenesis => "BG",
        }
    }
}
