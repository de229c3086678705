//! Collateral amount <-> USD conversions.

use odra::casper_types::U256;

use crate::error::EngineError;
use crate::math::common::{additional_feed_precision, precision, TryDiv, TryMul};

/// Converts a signed oracle answer into a usable price.
///
/// Zero and negative answers are rejected outright.
pub fn positive_price(answer: i64) -> Result<U256, EngineError> {
    if answer <= 0 {
        return Err(EngineError::InvalidPrice);
    }
    Ok(U256::from(answer as u64))
}

/// USD value (18 decimals) of `amount` tokens at an 8-decimal `price`.
///
/// `amount * price * ADDITIONAL_FEED_PRECISION / PRECISION`, floored.
pub fn usd_value(price: U256, amount: U256) -> Result<U256, EngineError> {
    amount
        .try_mul(price)?
        .try_mul(additional_feed_precision())?
        .try_div(precision())
}

/// Token amount worth `usd_amount` at an 8-decimal `price`, floored.
pub fn token_amount_from_usd(price: U256, usd_amount: U256) -> Result<U256, EngineError> {
    let scaled_price = price.try_mul(additional_feed_precision())?;
    usd_amount.try_mul(precision())?.try_div(scaled_price)
}
