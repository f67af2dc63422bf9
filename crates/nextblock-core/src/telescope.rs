//! The composition root.
//!
//! A [`Telescope`] points every deriver at the same block and combines their
//! readings into the composite date and a full [`Observations`] snapshot.

use nextblock_types::{Block, Height, Observations};

use crate::atmosphere::Atmosphere;
use crate::delta::Delta;
use crate::error::ObservationError;
use crate::lunar::Lunar;
use crate::solar::Solar;
use crate::tidal::Tidal;

/// All derivers for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Telescope {
    delta: Delta,
    lunar: Lunar,
    solar: Solar,
    tidal: Tidal,
    atmosphere: Option<Atmosphere>,
}

impl Telescope {
    /// Point a telescope at a block. Atmosphere readings are taken when the
    /// block carries weight data.
    pub fn new(block: &Block) -> Self {
        let atmosphere = Atmosphere::from_block(block);
        tracing::debug!(
            height = block.height.value(),
            weight = block.weight,
            tx_count = block.tx_count,
            has_atmosphere = atmosphere.is_some(),
            "Assembling telescope"
        );
        Self {
            atmosphere,
            ..Self::at(block.height)
        }
    }

    /// Point a telescope at a bare height, without atmosphere readings.
    pub const fn at(height: Height) -> Self {
        Self {
            delta: Delta::at(height),
            lunar: Lunar::at(height),
            solar: Solar::at(height),
            tidal: Tidal::at(height),
            atmosphere: None,
        }
    }

    /// The observed height.
    pub const fn height(&self) -> Height {
        self.delta.height()
    }

    /// Base height arithmetic.
    pub const fn delta(&self) -> &Delta {
        &self.delta
    }

    /// Lunar readings.
    pub const fn lunar(&self) -> &Lunar {
        &self.lunar
    }

    /// Solar readings.
    pub const fn solar(&self) -> &Solar {
        &self.solar
    }

    /// Tidal readings.
    pub const fn tidal(&self) -> &Tidal {
        &self.tidal
    }

    /// Block-space readings, if the block carried weight data.
    pub const fn atmosphere(&self) -> Option<&Atmosphere> {
        self.atmosphere.as_ref()
    }

    /// The composite date string, e.g. `AG_4_2_3_2016`.
    pub fn formatted_date(&self) -> String {
        self.delta.format_composite_date(
            self.solar.season_index(),
            self.lunar.cycle_index(),
            self.lunar.position_in_cycle(),
        )
    }

    /// Every reading for this block.
    ///
    /// # Errors
    ///
    /// Returns [`ObservationError::Render`] if the tide display cannot be
    /// built.
    pub fn observe(&self) -> Result<Observations, ObservationError> {
        let observations = Observations {
            height: self.height(),
            formatted_date: self.formatted_date(),
            lunar: self.lunar.observe(),
            solar: self.solar.observe(),
            tidal: self.tidal.observe()?,
            atmosphere: self.atmosphere.as_ref().map(Atmosphere::observe),
        };
        tracing::debug!(
            height = observations.height.value(),
            formatted_date = %observations.formatted_date,
            "Observed block"
        );
        Ok(observations)
    }
}

impl From<Height> for Telescope {
    fn from(height: Height) -> Self {
        Self::at(height)
    }
}
