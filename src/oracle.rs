//! Price oracle adapter.
//!
//! Feeds follow the aggregator round layout: a signed 8-decimal answer plus
//! round bookkeeping. Every read is checked for staleness before the answer
//! is turned into a price.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::error::EngineError;
use crate::math::valuation::positive_price;

/// Maximum age of a round, in block-time milliseconds (3 hours)
pub const TIMEOUT: u64 = 3 * 60 * 60 * 1000;

/// One round as reported by a price feed.
#[odra::odra_type]
#[derive(Default)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i64,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// A checked price for one collateral asset.
#[odra::odra_type]
pub struct PriceQuote {
    pub asset: Address,
    pub price: U256,
    pub decimals: u8,
}

/// Validates `round` at block time `now` and returns its price.
pub fn checked_price(round: &RoundData, now: u64) -> Result<U256, EngineError> {
    if round.answered_in_round < round.round_id {
        return Err(EngineError::StalePrice);
    }
    if now.saturating_sub(round.updated_at) > TIMEOUT {
        return Err(EngineError::StalePrice);
    }
    positive_price(round.answer)
}
