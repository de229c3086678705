use odra::casper_types::U256;

use crate::math::health::is_liquidatable;

/// Aggregate view of one user's position.
#[odra::odra_type]
pub struct AccountInformation {
    pub total_dsc_minted: U256,
    pub collateral_value_in_usd: U256,
}

/// Where a position sits relative to the liquidation line.
#[odra::odra_type]
#[derive(Copy)]
pub enum PositionStatus {
    /// No debt; can never be liquidated
    NoDebt,
    /// Health factor at or above the minimum
    Healthy,
    /// Health factor below the minimum; open to liquidation
    Unhealthy,
}

impl PositionStatus {
    pub fn classify(debt: U256, health_factor: U256) -> Self {
        if debt.is_zero() {
            PositionStatus::NoDebt
        } else if is_liquidatable(health_factor) {
            PositionStatus::Unhealthy
        } else {
            PositionStatus::Healthy
        }
    }
}

/// Risk constants the engine runs with.
#[odra::odra_type]
pub struct RiskParameters {
    pub precision: U256,
    pub additional_feed_precision: U256,
    pub feed_decimals: u8,
    pub liquidation_threshold: u64,
    pub liquidation_bonus: u64,
    pub liquidation_precision: u64,
    pub min_health_factor: U256,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::common::precision;

    #[test]
    fn classify_follows_health_factor() {
        let one = precision();
        assert_eq!(PositionStatus::classify(U256::zero(), U256::MAX), PositionStatus::NoDebt);
        assert_eq!(PositionStatus::classify(one, one), PositionStatus::Healthy);
        assert_eq!(PositionStatus::classify(one, one - U256::one()), PositionStatus::Unhealthy);
    }
}
