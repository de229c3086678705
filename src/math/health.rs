//! Health factor of a position: effective collateral over debt, scaled by 1e18.

use odra::casper_types::U256;

use crate::error::EngineError;
use crate::math::common::{
    min_health_factor, precision, TryDiv, TryMul, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD,
};

/// Health factor for `debt` backed by `collateral_usd`.
///
/// A debt-free position reports `U256::MAX`; it can never be liquidated.
pub fn health_factor(debt: U256, collateral_usd: U256) -> Result<U256, EngineError> {
    if debt.is_zero() {
        return Ok(U256::MAX);
    }
    let adjusted = collateral_usd
        .try_mul(LIQUIDATION_THRESHOLD)?
        .try_div(LIQUIDATION_PRECISION)?;
    adjusted.try_mul(precision())?.try_div(debt)
}

/// Rejects a factor below `MIN_HEALTH_FACTOR`.
pub fn check_health_factor(factor: U256) -> Result<(), EngineError> {
    if factor < min_health_factor() {
        return Err(EngineError::BreaksHealthFactor);
    }
    Ok(())
}

/// True when the factor allows liquidation.
pub fn is_liquidatable(factor: U256) -> bool {
    factor < min_health_factor()
}
