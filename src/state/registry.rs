use odra::prelude::*;

use crate::error::EngineError;

/// Accepted collateral tokens and the price feed of each.
///
/// Filled once at construction and never changed afterwards.
#[odra::module(errors = EngineError)]
pub struct CollateralRegistry {
    tokens: List<Address>,
    price_feeds: Mapping<Address, Address>,
}

#[odra::module]
impl CollateralRegistry {
    /// Registers `token_addresses[i]` with `price_feed_addresses[i]`.
    pub fn init(&mut self, token_addresses: Vec<Address>, price_feed_addresses: Vec<Address>) {
        if token_addresses.len() != price_feed_addresses.len() {
            self.env()
                .revert(EngineError::TokenAddressesAndPriceFeedAddressesMustBeSameLength);
        }
        for (token, feed) in token_addresses.into_iter().zip(price_feed_addresses) {
            if self.price_feeds.get(&token).is_some() {
                self.env().revert(EngineError::DuplicateCollateralToken);
            }
            self.price_feeds.set(&token, feed);
            self.tokens.push(token);
        }
    }

    /// True for tokens accepted as collateral.
    pub fn is_allowed(&self, token: Address) -> bool {
        self.price_feeds.get(&token).is_some()
    }

    /// `None` for tokens outside the registry.
    pub fn price_feed_of(&self, token: Address) -> Option<Address> {
        self.price_feeds.get(&token)
    }

    /// Tokens in registration order.
    pub fn tokens(&self) -> Vec<Address> {
        self.tokens.iter().collect()
    }
}
