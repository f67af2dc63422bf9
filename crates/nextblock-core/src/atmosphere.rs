//! Block-space conditions.
//!
//! Conditions measure how many transactions a block would carry if it were
//! filled to the weight limit at its current density: transaction count
//! divided by weight utilization, rounded to 2 decimal places.

use nextblock_types::{AtmosphereObservations, Block};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::chain::MAX_BLOCK_WEIGHT;

/// Weight and transaction readings for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atmosphere {
    weight: u64,
    transaction_count: u64,
}

impl Atmosphere {
    /// Create from a block weight and transaction count.
    pub const fn new(weight: u64, transaction_count: u64) -> Self {
        Self {
            weight,
            transaction_count,
        }
    }

    /// Read weight and transaction count from a block.
    ///
    /// Returns `None` for a block that carries no weight data.
    pub const fn from_block(block: &Block) -> Option<Self> {
        if block.weight == 0 {
            None
        } else {
            Some(Self::new(block.weight, block.tx_count))
        }
    }

    /// Block weight in weight units.
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    /// Number of transactions.
    pub const fn transaction_count(&self) -> u64 {
        self.transaction_count
    }

    /// Fraction of the consensus weight limit used.
    pub fn utilization(&self) -> Decimal {
        Decimal::from(self.weight)
            .checked_div(Decimal::from(MAX_BLOCK_WEIGHT))
            .unwrap_or(Decimal::ZERO)
    }

    /// Transactions per unit of weight utilization, to 2 decimal places.
    ///
    /// `None` when the block has zero weight.
    pub fn conditions(&self) -> Option<Decimal> {
        if self.weight == 0 {
            return None;
        }
        let scaled = Decimal::from(self.transaction_count)
            .checked_mul(Decimal::from(MAX_BLOCK_WEIGHT))?;
        let conditions = scaled.checked_div(Decimal::from(self.weight))?;
        Some(conditions.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Snapshot of the block-space readings.
    pub fn observe(&self) -> AtmosphereObservations {
        AtmosphereObservations {
            weight: self.weight,
            transaction_count: self.transaction_count,
            conditions: self.conditions(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use nextblock_types::Height;

    use super::*;

    #[test]
    fn stores_readings() {
        let atmosphere = Atmosphere::new(2_800_000, 2800);
        assert_eq!(atmosphere.weight(), 2_800_000);
        assert_eq!(atmosphere.transaction_count(), 2800);
    }

    #[test]
    fn conditions_scale_to_full_block() {
        assert_eq!(
            Atmosphere::new(2_800_000, 2800).conditions(),
            Some(Decimal::new(4000, 0))
        );
        assert_eq!(
            Atmosphere::new(1_600_000, 1200).conditions(),
            Some(Decimal::new(3000, 0))
        );
        assert_eq!(
            Atmosphere::new(3_200_000, 800).conditions(),
            Some(Decimal::new(1000, 0))
        );
    }

    #[test]
    fn conditions_round_to_two_places() {
        // 1 * 4_000_000 / 3_000_000 = 1.3333...
        assert_eq!(
            Atmosphere::new(3_000_000, 1).conditions(),
            Some(Decimal::new(133, 2))
        );
        // 1 * 4_000_000 / 1_600_000 = 2.5 exactly
        assert_eq!(
            Atmosphere::new(1_600_000, 1).conditions(),
            Some(Decimal::new(250, 2))
        );
    }

    #[test]
    fn empty_block_has_no_conditions() {
        assert_eq!(Atmosphere::new(0, 0).conditions(), None);
        assert_eq!(Atmosphere::new(0, 0).utilization(), Decimal::ZERO);
    }

    #[test]
    fn utilization_is_fraction_of_limit() {
        assert_eq!(
            Atmosphere::new(2_000_000, 10).utilization(),
            Decimal::new(5, 1)
        );
        assert_eq!(
            Atmosphere::new(MAX_BLOCK_WEIGHT, 10).utilization(),
            Decimal::ONE
        );
    }

    #[test]
    fn from_block_needs_weight() {
        let mut block = Block::at_height(Height::new(1));
        assert!(Atmosphere::from_block(&block).is_none());

        block.weight = 3_997_853;
        block.tx_count = 2330;
        let atmosphere = Atmosphere::from_block(&block).unwrap();
        assert_eq!(atmosphere.weight(), 3_997_853);
        assert_eq!(atmosphere.transaction_count(), 2330);
    }

    #[test]
    fn observe_serializes_conditions_as_string() {
        let obs = Atmosphere::new(2_800_000, 2800).observe();
        let json = serde_json::to_value(obs).unwrap();
        assert_eq!(json["conditions"], "4000");
        assert_eq!(json["weight"], 2_800_000);
    }
}
