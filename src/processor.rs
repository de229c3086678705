//! Collateral engine: positions, minting and liquidation.
//!
//! Users lock accepted collateral here and mint the debt token against it.
//! Every action that can weaken a position is followed by a health check,
//! and any failure reverts the whole call.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

use crate::error::EngineError;
use crate::interfaces::{CollateralTokenContractRef, DebtTokenContractRef, PriceFeedContractRef};
use crate::math::common::{
    additional_feed_precision, min_health_factor, precision, FEED_DECIMALS, LIQUIDATION_BONUS,
    LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD,
};
use crate::math::health::{check_health_factor, health_factor, is_liquidatable};
use crate::math::liquidation::seizure;
use crate::math::valuation::{token_amount_from_usd, usd_value};
use crate::math::{TryAdd, TrySub};
use crate::oracle::{checked_price, PriceQuote};
use crate::state::{
    AccountInformation, CollateralDeposited, CollateralLedger, CollateralRedeemed,
    CollateralRegistry, PositionStatus, RiskParameters,
};

#[odra::module(events = [CollateralDeposited, CollateralRedeemed], errors = EngineError)]
pub struct DscEngine {
    registry: SubModule<CollateralRegistry>,
    ledger: SubModule<CollateralLedger>,
    debt_minted: Mapping<Address, U256>,
    dsc: Var<Address>,
}

#[odra::module]
impl DscEngine {
    // ===========================================================================
    // CONSTRUCTOR
    // ===========================================================================

    /// `token_addresses[i]` is priced by `price_feed_addresses[i]`.
    pub fn init(
        &mut self,
        token_addresses: Vec<Address>,
        price_feed_addresses: Vec<Address>,
        dsc_address: Address,
    ) {
        self.registry.init(token_addresses, price_feed_addresses);
        self.dsc.set(dsc_address);
    }

    // ===========================================================================
    // POSITION OPERATIONS
    // ===========================================================================

    /// Deposits collateral and mints against it in one call.
    pub fn deposit_collateral_and_mint_dsc(
        &mut self,
        token_collateral_address: Address,
        amount_collateral: U256,
        amount_dsc_to_mint: U256,
    ) {
        self.deposit_collateral(token_collateral_address, amount_collateral);
        self.mint_dsc(amount_dsc_to_mint);
    }

    /// Moves `amount_collateral` of an accepted token from the caller into custody.
    pub fn deposit_collateral(&mut self, token_collateral_address: Address, amount_collateral: U256) {
        self.assert_more_than_zero(amount_collateral);
        self.assert_allowed_token(token_collateral_address);

        let caller = self.env().caller();
        let custody = self.env().self_address();
        self.ledger
            .record_deposit(caller, token_collateral_address, amount_collateral);

        let mut token = CollateralTokenContractRef::new(self.env(), token_collateral_address);
        if !token.transfer_from(caller, custody, amount_collateral) {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    /// Burns first so the redemption is checked against the reduced debt.
    pub fn redeem_collateral_for_dsc(
        &mut self,
        token_collateral_address: Address,
        amount_collateral: U256,
        amount_dsc_to_burn: U256,
    ) {
        self.burn_dsc(amount_dsc_to_burn);
        self.redeem_collateral(token_collateral_address, amount_collateral);
    }

    /// Returns collateral to the caller. Reverts if the caller's position ends
    /// below the minimum health factor.
    pub fn redeem_collateral(&mut self, token_collateral_address: Address, amount_collateral: U256) {
        self.assert_more_than_zero(amount_collateral);
        let caller = self.env().caller();
        self.redeem(token_collateral_address, amount_collateral, caller, caller);
        self.assert_healthy(caller);
    }

    /// Mints debt tokens to the caller against deposited collateral.
    pub fn mint_dsc(&mut self, amount_dsc_to_mint: U256) {
        self.assert_more_than_zero(amount_dsc_to_mint);
        let caller = self.env().caller();

        let debt = self.debt_of(caller).try_add(amount_dsc_to_mint).unwrap_or_revert(self);
        self.debt_minted.set(&caller, debt);

        let mut dsc = DebtTokenContractRef::new(self.env(), self.dsc_address());
        if !dsc.mint(caller, amount_dsc_to_mint) {
            self.env().revert(EngineError::MintFailed);
        }
        log::debug!("dsc minted: user={:?} amount={} debt={}", caller, amount_dsc_to_mint, debt);

        self.assert_healthy(caller);
    }

    /// Repayment only lowers debt, so no health check follows.
    pub fn burn_dsc(&mut self, amount: U256) {
        self.assert_more_than_zero(amount);
        let caller = self.env().caller();
        self.burn(amount, caller, caller);
    }

    // ===========================================================================
    // LIQUIDATION
    // ===========================================================================

    /// Repays `debt_to_cover` of `user`'s debt and takes the matching
    /// collateral plus the bonus.
    ///
    /// Open to anyone while `user` is below the minimum health factor. The
    /// liquidator's own position is not checked.
    pub fn liquidate(&mut self, collateral: Address, user: Address, debt_to_cover: U256) {
        self.assert_more_than_zero(debt_to_cover);
        self.assert_allowed_token(collateral);

        let starting_factor = self.get_health_factor(user);
        if !is_liquidatable(starting_factor) {
            self.env().revert(EngineError::HealthFactorOk);
        }

        let price = self.price_of(collateral);
        let base = token_amount_from_usd(price, debt_to_cover).unwrap_or_revert(self);
        let seized = seizure(base).unwrap_or_revert(self);
        let liquidator = self.env().caller();

        self.redeem(collateral, seized.total, user, liquidator);
        self.burn(debt_to_cover, user, liquidator);

        let ending_factor = self.get_health_factor(user);
        if ending_factor < starting_factor {
            log::warn!(
                "liquidation did not improve health factor: user={:?} start={} end={}",
                user,
                starting_factor,
                ending_factor
            );
            self.env().revert(EngineError::HealthFactorNotImproved);
        }
        log::debug!(
            "liquidated: user={:?} liquidator={:?} covered={} seized={} bonus={}",
            user,
            liquidator,
            debt_to_cover,
            seized.total,
            seized.bonus
        );
    }

    // ===========================================================================
    // VIEWS
    // ===========================================================================

    /// Health factor of `user` at current prices; `U256::MAX` without debt.
    pub fn get_health_factor(&self, user: Address) -> U256 {
        let info = self.get_account_information(user);
        self.calculate_health_factor(info.total_dsc_minted, info.collateral_value_in_usd)
    }

    /// Health factor for arbitrary debt and collateral value.
    pub fn calculate_health_factor(
        &self,
        total_dsc_minted: U256,
        collateral_value_in_usd: U256,
    ) -> U256 {
        health_factor(total_dsc_minted, collateral_value_in_usd).unwrap_or_revert(self)
    }

    pub fn get_account_information(&self, user: Address) -> AccountInformation {
        AccountInformation {
            total_dsc_minted: self.debt_of(user),
            collateral_value_in_usd: self.get_account_collateral_value(user),
        }
    }

    /// Sum over every accepted token. Tokens with no balance are skipped
    /// and their feed is not read.
    pub fn get_account_collateral_value(&self, user: Address) -> U256 {
        let mut total = U256::zero();
        for token in self.registry.tokens() {
            let amount = self.ledger.balance_of(user, token);
            if amount.is_zero() {
                continue;
            }
            let value = self.get_usd_value(token, amount);
            total = total.try_add(value).unwrap_or_revert(self);
        }
        total
    }

    /// USD value (18 decimals) of `amount` of `token`.
    pub fn get_usd_value(&self, token: Address, amount: U256) -> U256 {
        let price = self.price_of(token);
        usd_value(price, amount).unwrap_or_revert(self)
    }

    /// Amount of `token` worth `usd_amount_in_wei`, floored.
    pub fn get_token_amount_from_usd(&self, token: Address, usd_amount_in_wei: U256) -> U256 {
        let price = self.price_of(token);
        token_amount_from_usd(price, usd_amount_in_wei).unwrap_or_revert(self)
    }

    /// Checked price of `token` with its feed decimals.
    pub fn get_price_quote(&self, token: Address) -> PriceQuote {
        let feed = PriceFeedContractRef::new(self.env(), self.feed_of(token));
        PriceQuote {
            asset: token,
            price: self.price_of(token),
            decimals: feed.decimals(),
        }
    }

    pub fn get_collateral_balance_of_user(&self, user: Address, token: Address) -> U256 {
        self.ledger.balance_of(user, token)
    }

    pub fn get_collateral_tokens(&self) -> Vec<Address> {
        self.registry.tokens()
    }

    pub fn get_collateral_token_price_feed(&self, token: Address) -> Option<Address> {
        self.registry.price_feed_of(token)
    }

    pub fn get_dsc(&self) -> Address {
        self.dsc_address()
    }

    /// Where `user` stands relative to the liquidation line.
    pub fn get_position_status(&self, user: Address) -> PositionStatus {
        let debt = self.debt_of(user);
        if debt.is_zero() {
            return PositionStatus::NoDebt;
        }
        PositionStatus::classify(debt, self.get_health_factor(user))
    }

    pub fn get_risk_parameters(&self) -> RiskParameters {
        RiskParameters {
            precision: precision(),
            additional_feed_precision: additional_feed_precision(),
            feed_decimals: FEED_DECIMALS,
            liquidation_threshold: LIQUIDATION_THRESHOLD,
            liquidation_bonus: LIQUIDATION_BONUS,
            liquidation_precision: LIQUIDATION_PRECISION,
            min_health_factor: min_health_factor(),
        }
    }

    // ===========================================================================
    // HELPER FUNCTIONS
    // ===========================================================================

    fn assert_more_than_zero(&self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(EngineError::NeedsMoreThanZero);
        }
    }

    fn assert_allowed_token(&self, token: Address) {
        if !self.registry.is_allowed(token) {
            self.env().revert(EngineError::NotAllowedToken);
        }
    }

    fn assert_healthy(&self, user: Address) {
        let factor = self.get_health_factor(user);
        if let Err(err) = check_health_factor(factor) {
            log::warn!("health factor broken: user={:?} factor={}", user, factor);
            self.env().revert(err);
        }
    }

    fn debt_of(&self, user: Address) -> U256 {
        self.debt_minted.get_or_default(&user)
    }

    fn dsc_address(&self) -> Address {
        self.dsc.get_or_revert_with(EngineError::DebtTokenNotSet)
    }

    fn feed_of(&self, token: Address) -> Address {
        self.registry
            .price_feed_of(token)
            .unwrap_or_revert_with(self, EngineError::NotAllowedToken)
    }

    fn price_of(&self, token: Address) -> U256 {
        let feed = PriceFeedContractRef::new(self.env(), self.feed_of(token));
        let round = feed.latest_round_data();
        let now = self.env().get_block_time();
        checked_price(&round, now).unwrap_or_revert(self)
    }

    fn redeem(&mut self, token: Address, amount: U256, from: Address, to: Address) {
        self.ledger.record_withdrawal(from, to, token, amount);
        let mut collateral = CollateralTokenContractRef::new(self.env(), token);
        if !collateral.transfer(to, amount) {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    /// Lowers `on_behalf_of`'s debt and burns tokens pulled from `dsc_from`.
    fn burn(&mut self, amount: U256, on_behalf_of: Address, dsc_from: Address) {
        let debt = self
            .debt_of(on_behalf_of)
            .try_sub(amount)
            .unwrap_or_revert_with(self, EngineError::BurnAmountExceedsDebt);
        self.debt_minted.set(&on_behalf_of, debt);

        let custody = self.env().self_address();
        let mut dsc = DebtTokenContractRef::new(self.env(), self.dsc_address());
        if !dsc.transfer_from(dsc_from, custody, amount) {
            self.env().revert(EngineError::TransferFailed);
        }
        dsc.burn(amount);
        log::debug!(
            "dsc burned: on_behalf_of={:?} from={:?} amount={} debt={}",
            on_behalf_of,
            dsc_from,
            amount,
            debt
        );
    }
}
