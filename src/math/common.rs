//! Shared scaling constants and checked arithmetic over `U256`.
//!
//! All amounts are 18-decimal fixed point. Division always floors, so values
//! derived from collateral are never overcounted.

use odra::casper_types::U256;

use crate::error::EngineError;

/// Internal fixed-point scale (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;
/// Lifts an 8-decimal oracle answer to internal precision (1e10)
pub const ADDITIONAL_FEED_PRECISION: u128 = 10_000_000_000;
/// Decimals of every price feed the engine accepts
pub const FEED_DECIMALS: u8 = 8;
/// Share of collateral value, in percent, that backs debt
pub const LIQUIDATION_THRESHOLD: u64 = 50;
/// Extra collateral, in percent, paid to the liquidator
pub const LIQUIDATION_BONUS: u64 = 10;
/// Denominator for threshold and bonus
pub const LIQUIDATION_PRECISION: u64 = 100;
/// Positions at or above this factor are safe
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;

/// `PRECISION` as `U256`
pub fn precision() -> U256 {
    U256::from(PRECISION)
}

/// `ADDITIONAL_FEED_PRECISION` as `U256`
pub fn additional_feed_precision() -> U256 {
    U256::from(ADDITIONAL_FEED_PRECISION)
}

/// `MIN_HEALTH_FACTOR` as `U256`
pub fn min_health_factor() -> U256 {
    U256::from(MIN_HEALTH_FACTOR)
}

/// Try to subtract, return an error on underflow
pub trait TrySub: Sized {
    /// Subtract
    fn try_sub(self, rhs: Self) -> Result<Self, EngineError>;
}

/// Try to add, return an error on overflow
pub trait TryAdd: Sized {
    /// Add
    fn try_add(self, rhs: Self) -> Result<Self, EngineError>;
}

/// Try to divide, return an error on divide by zero
pub trait TryDiv<RHS>: Sized {
    /// Divide
    fn try_div(self, rhs: RHS) -> Result<Self, EngineError>;
}

/// Try to multiply, return an error on overflow
pub trait TryMul<RHS>: Sized {
    /// Multiply
    fn try_mul(self, rhs: RHS) -> Result<Self, EngineError>;
}

impl TryAdd for U256 {
    fn try_add(self, rhs: Self) -> Result<Self, EngineError> {
        self.checked_add(rhs).ok_or(EngineError::MathOverflow)
    }
}

impl TrySub for U256 {
    fn try_sub(self, rhs: Self) -> Result<Self, EngineError> {
        self.checked_sub(rhs).ok_or(EngineError::MathOverflow)
    }
}

impl TryMul<U256> for U256 {
    fn try_mul(self, rhs: U256) -> Result<Self, EngineError> {
        self.checked_mul(rhs).ok_or(EngineError::MathOverflow)
    }
}

impl TryMul<u64> for U256 {
    fn try_mul(self, rhs: u64) -> Result<Self, EngineError> {
        self.try_mul(U256::from(rhs))
    }
}

impl TryDiv<U256> for U256 {
    fn try_div(self, rhs: U256) -> Result<Self, EngineError> {
        self.checked_div(rhs).ok_or(EngineError::MathOverflow)
    }
}

impl TryDiv<u64> for U256 {
    fn try_div(self, rhs: u64) -> Result<Self, EngineError> {
        self.try_div(U256::from(rhs))
    }
}
