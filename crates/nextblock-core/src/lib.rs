//! Lunar, solar and tidal derivations from a block height.
//!
//! Every reading in this crate is a pure function of one block height. The
//! derivers are small `Copy` values that own their height; a [`Telescope`]
//! composes them and encodes the composite date.
//!
//! # Modules
//!
//! - [`chain`] -- Fixed chain parameters (genesis, halving, difficulty
//!   adjustment, block interval, weight limit).
//! - [`delta`] -- [`Delta`] height arithmetic, date estimation, and the
//!   composite date encoder.
//! - [`lunar`] -- Phases and named cycles of the 4032-block lunar cycle.
//! - [`solar`] -- Seasons of the 210000-block solar cycle.
//! - [`tidal`] -- The 72-block tidal wave and its events.
//! - [`atmosphere`] -- Block-space conditions from weight and transactions.
//! - [`telescope`] -- [`Telescope`], the composition root.
//! - [`error`] -- [`ObservationError`].

pub mod atmosphere;
pub mod chain;
pub mod delta;
pub mod error;
pub mod lunar;
pub mod solar;
pub mod telescope;
pub mod tidal;

pub use atmosphere::Atmosphere;
pub use delta::Delta;
pub use error::ObservationError;
pub use lunar::Lunar;
pub use solar::Solar;
pub use telescope::Telescope;
pub use tidal::Tidal;
