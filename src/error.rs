use core::fmt;
use odra::prelude::OdraError;

/// Errors raised by the collateral engine and its submodules.
#[odra::odra_error]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    // 1: configuration
    TokenAddressesAndPriceFeedAddressesMustBeSameLength = 1,
    DuplicateCollateralToken = 2,
    DebtTokenNotSet = 3,

    // 10: validation
    NeedsMoreThanZero = 10,
    NotAllowedToken = 11,
    InsufficientCollateral = 12,
    BurnAmountExceedsDebt = 13,

    // 20: solvency invariants
    BreaksHealthFactor = 20,
    HealthFactorOk = 21,
    HealthFactorNotImproved = 22,

    // 30: external calls
    TransferFailed = 30,
    MintFailed = 31,

    // 40: oracle
    InvalidPrice = 40,
    StalePrice = 41,

    // 50
    MathOverflow = 50,
}

impl EngineError {
    pub fn message(&self) -> &str {
        match self {
            EngineError::TokenAddressesAndPriceFeedAddressesMustBeSameLength => {
                "Token addresses and price feed addresses must have the same length"
            }
            EngineError::DuplicateCollateralToken => "Collateral token listed more than once",
            EngineError::DebtTokenNotSet => "Debt token address is not configured",
            EngineError::NeedsMoreThanZero => "Amount must be more than zero",
            EngineError::NotAllowedToken => "Token is not an accepted collateral",
            EngineError::InsufficientCollateral => "Withdrawal exceeds deposited collateral",
            EngineError::BurnAmountExceedsDebt => "Burn amount exceeds minted debt",
            EngineError::BreaksHealthFactor => "Operation leaves the position below the minimum health factor",
            EngineError::HealthFactorOk => "Position is healthy and cannot be liquidated",
            EngineError::HealthFactorNotImproved => "Liquidation did not improve the health factor",
            EngineError::TransferFailed => "Token transfer failed",
            EngineError::MintFailed => "Debt token mint failed",
            EngineError::InvalidPrice => "Oracle returned a non-positive price",
            EngineError::StalePrice => "Oracle price is stale",
            EngineError::MathOverflow => "Math operation overflow",
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Errors raised by the bundled fungible tokens.
#[odra::odra_error]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenError {
    NotOwner = 100,
    MustBeMoreThanZero = 101,
    BurnAmountExceedsBalance = 102,
    MathOverflow = 103,
}

impl TokenError {
    pub fn message(&self) -> &str {
        match self {
            TokenError::NotOwner => "Caller is not the token owner",
            TokenError::MustBeMoreThanZero => "Amount must be more than zero",
            TokenError::BurnAmountExceedsBalance => "Burn amount exceeds balance",
            TokenError::MathOverflow => "Token supply overflow",
        }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
