//! Narrow views of the contracts the engine calls out to.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::oracle::RoundData;

/// Accepted collateral asset. `false` means the transfer did not happen.
#[odra::external_contract]
pub trait CollateralToken {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
}

/// The minted debt token. `mint` and `burn` must accept calls from the engine.
#[odra::external_contract]
pub trait DebtToken {
    fn mint(&mut self, to: Address, amount: U256) -> bool;
    fn burn(&mut self, amount: U256);
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
}

/// Price source for one collateral asset.
#[odra::external_contract]
pub trait PriceFeed {
    fn decimals(&self) -> u8;
    fn latest_round_data(&self) -> RoundData;
}
