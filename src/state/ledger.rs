use odra::casper_types::U256;
use odra::prelude::*;

use crate::error::EngineError;
use crate::math::{TryAdd, TrySub};

/// Per-user, per-token collateral balances held in engine custody.
#[odra::module(events = [CollateralDeposited, CollateralRedeemed], errors = EngineError)]
pub struct CollateralLedger {
    balances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl CollateralLedger {
    /// Credits `amount` of `token` to `user`.
    pub fn record_deposit(&mut self, user: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::NeedsMoreThanZero);
        }
        let key = (user, token);
        let balance = self
            .balances
            .get_or_default(&key)
            .try_add(amount)
            .unwrap_or_revert(self);
        self.balances.set(&key, balance);

        log::debug!("collateral deposited: user={:?} token={:?} amount={}", user, token, amount);
        self.env().emit_event(CollateralDeposited {
            user,
            token,
            amount,
        });
    }

    /// Debits `amount` of `token` from `from`; the tokens are owed to `to`.
    pub fn record_withdrawal(&mut self, from: Address, to: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::NeedsMoreThanZero);
        }
        let key = (from, token);
        let balance = self
            .balances
            .get_or_default(&key)
            .try_sub(amount)
            .unwrap_or_revert_with(self, EngineError::InsufficientCollateral);
        self.balances.set(&key, balance);

        log::debug!(
            "collateral redeemed: from={:?} to={:?} token={:?} amount={}",
            from,
            to,
            token,
            amount
        );
        self.env().emit_event(CollateralRedeemed {
            redeemed_from: from,
            redeemed_to: to,
            token,
            amount,
        });
    }

    /// Zero for users that never deposited `token`.
    pub fn balance_of(&self, user: Address, token: Address) -> U256 {
        self.balances.get_or_default(&(user, token))
    }
}

#[odra::event]
pub struct CollateralDeposited {
    pub user: Address,
    pub token: Address,
    pub amount: U256,
}

#[odra::event]
pub struct CollateralRedeemed {
    pub redeemed_from: Address,
    pub redeemed_to: Address,
    pub token: Address,
    pub amount: U256,
}
