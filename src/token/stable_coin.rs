//! Debt token minted against collateral.
//!
//! A plain fungible token whose supply only its owner can change. After
//! deployment ownership is handed to the engine, which then mints on
//! borrow and burns on repayment or liquidation.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::error::TokenError;
use crate::token::balances::FungibleBalances;

/// Decimals of the debt token
pub const DECIMALS: u8 = 18;

#[odra::module(events = [OwnershipTransferred], errors = TokenError)]
pub struct StableCoin {
    name: Var<String>,
    symbol: Var<String>,
    owner: Var<Address>,
    book: SubModule<FungibleBalances>,
}

#[odra::module]
impl StableCoin {
    /// The deployer becomes the owner.
    pub fn init(&mut self, name: String, symbol: String) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.owner.set(self.env().caller());
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        DECIMALS
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

    pub fn get_owner(&self) -> Option<Address> {
        self.owner.get()
    }

    pub fn approve(&mut self, spender: Address, value: U256) {
        let owner = self.env().caller();
        self.book.approve(owner, spender, value);
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.book.transfer(sender, recipient, amount)
    }

    /// Spends the caller's allowance. `false` on insufficient allowance or balance.
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();
        self.book.transfer_from(spender, owner, recipient, amount)
    }

    /// Owner only.
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.assert_owner();
        if amount.is_zero() {
            self.env().revert(TokenError::MustBeMoreThanZero);
        }
        self.book.mint(to, amount);
        true
    }

    /// Burns `amount` from the owner's own balance.
    pub fn burn(&mut self, amount: U256) {
        self.assert_owner();
        if amount.is_zero() {
            self.env().revert(TokenError::MustBeMoreThanZero);
        }
        let owner = self.env().caller();
        if !self.book.burn(owner, amount) {
            self.env().revert(TokenError::BurnAmountExceedsBalance);
        }
    }

    /// Hands mint and burn rights to `new_owner`.
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.assert_owner();
        let previous_owner = self.env().caller();
        self.owner.set(new_owner);
        self.env().emit_event(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }

    fn assert_owner(&self) {
        if self.owner.get() != Some(self.env().caller()) {
            self.env().revert(TokenError::NotOwner);
        }
    }
}

#[odra::event]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}
