//! Shared type definitions for the nextblock observatory.
//!
//! This crate is the single source of truth for the values exchanged across
//! the workspace. Types flow downstream to `TypeScript` via `ts-rs` for
//! front-end consumers of the JSON observations.
//!
//! # Modules
//!
//! - [`height`] -- The [`Height`] newtype and the [`InvalidHeight`] error
//! - [`enums`] -- Lunar, solar, tidal and era catalogs
//! - [`structs`] -- The input [`Block`] record, catalog entries and
//!   observation snapshots

pub mod enums;
pub mod height;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Era, LunarCycle, LunarPhase, SolarSeason, TidePhase, TideType};
pub use height::{Height, InvalidHeight};
pub use structs::{
    AtmosphereObservations, Block, LunarCycleEntry, LunarObservations, LunarPhaseEntry,
    Observations, SolarObservations, SolarSeasonEntry, TidalCycleInfo, TidalObservations,
    TidalState,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::height::Height::export_all();

        // Enums
        let _ = crate::enums::LunarPhase::export_all();
        let _ = crate::enums::LunarCycle::export_all();
        let _ = crate::enums::SolarSeason::export_all();
        let _ = crate::enums::TideType::export_all();
        let _ = crate::enums::TidePhase::export_all();
        let _ = crate::enums::Era::export_all();

        // Structs
        let _ = crate::structs::Block::export_all();
        let _ = crate::structs::TidalState::export_all();
        let _ = crate::structs::TidalCycleInfo::export_all();
        let _ = crate::structs::LunarPhaseEntry::export_all();
        let _ = crate::structs::LunarCycleEntry::export_all();
        let _ = crate::structs::SolarSeasonEntry::export_all();
        let _ = crate::structs::LunarObservations::export_all();
        let _ = crate::structs::SolarObservations::export_all();
        let _ = crate::structs::TidalObservations::export_all();
        let _ = crate::structs::AtmosphereObservations::export_all();
        let _ = crate::structs::Observations::export_all();
    }
}
