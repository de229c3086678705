//! Test doubles for the contracts the engine talks to.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::error::TokenError;
use crate::oracle::RoundData;
use crate::token::balances::FungibleBalances;

/// Freely mintable collateral token.
///
/// Transfers can be switched to report failure so callers can exercise
/// their error path.
#[odra::module(errors = TokenError)]
pub struct MockCollateral {
    symbol: Var<String>,
    fail_transfers: Var<bool>,
    book: SubModule<FungibleBalances>,
}

#[odra::module]
impl MockCollateral {
    pub fn init(&mut self, symbol: String) {
        self.symbol.set(symbol);
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        18
    }

    /// Faucet. Anyone can mint to anyone.
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.book.mint(to, amount);
    }

    /// While set, `transfer` and `transfer_from` return `false`.
    pub fn set_fail_transfers(&mut self, fail: bool) {
        self.fail_transfers.set(fail);
    }

    pub fn total_supply(&self) -> U256 {
        self.book.total_supply()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.book.balance_of(owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.book.allowance(owner, spender)
    }

    pub fn approve(&mut self, spender: Address, value: U256) {
        let owner = self.env().caller();
        self.book.approve(owner, spender, value);
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        if self.fail_transfers.get_or_default() {
            return false;
        }
        let sender = self.env().caller();
        self.book.transfer(sender, recipient, amount)
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        if self.fail_transfers.get_or_default() {
            return false;
        }
        let spender = self.env().caller();
        self.book.transfer_from(spender, owner, recipient, amount)
    }
}

/// Aggregator-style price feed with a settable answer.
#[odra::module]
pub struct MockV3Aggregator {
    decimals: Var<u8>,
    round: Var<RoundData>,
}

#[odra::module]
impl MockV3Aggregator {
    pub fn init(&mut self, decimals: u8, initial_answer: i64) {
        self.decimals.set(decimals);
        self.write_round(1, initial_answer);
    }

    /// Publishes `answer` as a new round stamped with the current block time.
    pub fn update_answer(&mut self, answer: i64) {
        let next = self.latest_round_data().round_id + 1;
        self.write_round(next, answer);
    }

    /// Overwrites the whole round, stale or not.
    pub fn update_round_data(&mut self, round: RoundData) {
        self.round.set(round);
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Zeroed round before `init`.
    pub fn latest_round_data(&self) -> RoundData {
        self.round.get_or_default()
    }

    pub fn latest_answer(&self) -> i64 {
        self.latest_round_data().answer
    }

    fn write_round(&mut self, round_id: u64, answer: i64) {
        let now = self.env().get_block_time();
        self.round.set(RoundData {
            round_id,
            answer,
            started_at: now,
            updated_at: now,
            answered_in_round: round_id,
        });
    }
}

/// Debt token whose `mint` always reports failure.
#[odra::module(errors = TokenError)]
pub struct MockFailedMintDebtToken {
    book: SubModule<FungibleBalances>,
}

#[odra::module]
impl MockFailedMintDebtToken {
    /// Argument names match the `DebtToken` interface so engine calls decode.
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        log::debug!("mint refused: to={:?} amount={}", to, amount);
        false
    }

    /// Burns from the caller's own balance.
    pub fn burn(&mut self, amount: U256) {
        let owner = self.env().caller();
        if !self.book.burn(owner, amount) {
            self.env().revert(TokenError::BurnAmountExceedsBalance);
        }
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();
        self.book.transfer_from(spender, owner, recipient, amount)
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.book.balance_of(owner)
    }
}
