use odra::casper_types::U256;
use odra::prelude::*;

use crate::error::TokenError;

/// Balance and allowance book of a fungible token.
///
/// Transfers report insufficient balance or allowance by returning `false`
/// and leave state untouched.
#[odra::module(events = [Transfer, Approval], errors = TokenError)]
pub struct FungibleBalances {
    total_supply: Var<U256>,
    balances: Mapping<Address, U256>,
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl FungibleBalances {
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get_or_default(&owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get_or_default(&(owner, spender))
    }

    pub fn approve(&mut self, owner: Address, spender: Address, value: U256) {
        self.allowances.set(&(owner, spender), value);
        self.env().emit_event(Approval {
            owner,
            spender,
            value,
        });
    }

    pub fn transfer(&mut self, sender: Address, recipient: Address, amount: U256) -> bool {
        let sender_balance = self.balance_of(sender);
        if sender_balance < amount {
            return false;
        }
        self.balances.set(&sender, sender_balance - amount);
        let recipient_balance = self.balance_of(recipient);
        self.balances.set(&recipient, recipient_balance.saturating_add(amount));
        self.env().emit_event(Transfer {
            from: Some(sender),
            to: Some(recipient),
            amount,
        });
        true
    }

    /// Moves `amount` from `owner` to `recipient` on behalf of `spender`.
    pub fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: U256,
    ) -> bool {
        let allowed = self.allowance(owner, spender);
        if allowed < amount {
            return false;
        }
        if !self.transfer(owner, recipient, amount) {
            return false;
        }
        self.allowances.set(&(owner, spender), allowed - amount);
        true
    }

    pub fn mint(&mut self, to: Address, amount: U256) {
        let supply = match self.total_supply().checked_add(amount) {
            Some(supply) => supply,
            None => self.env().revert(TokenError::MathOverflow),
        };
        self.total_supply.set(supply);
        let balance = self.balance_of(to);
        self.balances.set(&to, balance + amount);
        self.env().emit_event(Transfer {
            from: None,
            to: Some(to),
            amount,
        });
    }

    pub fn burn(&mut self, from: Address, amount: U256) -> bool {
        let balance = self.balance_of(from);
        if balance < amount {
            return false;
        }
        self.balances.set(&from, balance - amount);
        self.total_supply.set(self.total_supply() - amount);
        self.env().emit_event(Transfer {
            from: Some(from),
            to: None,
            amount,
        });
        true
    }
}

#[odra::event]
pub struct Transfer {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub amount: U256,
}

#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
}
