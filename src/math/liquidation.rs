//! Collateral seized by a liquidation.

use odra::casper_types::U256;

use crate::error::EngineError;
use crate::math::common::{TryAdd, TryDiv, TryMul, LIQUIDATION_BONUS, LIQUIDATION_PRECISION};

/// Split of the collateral paid out to a liquidator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seizure {
    /// Collateral worth exactly the debt covered
    pub base: U256,
    /// Liquidator incentive on top of `base`
    pub bonus: U256,
    /// `base + bonus`
    pub total: U256,
}

/// Adds the liquidation bonus to `base` collateral.
pub fn seizure(base: U256) -> Result<Seizure, EngineError> {
    let bonus = base
        .try_mul(LIQUIDATION_BONUS)?
        .try_div(LIQUIDATION_PRECISION)?;
    Ok(Seizure {
        base,
        bonus,
        total: base.try_add(bonus)?,
    })
}
