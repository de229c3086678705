//! Contract storage: the collateral registry, the collateral ledger and the
//! position records returned by the engine's views.

pub mod ledger;
pub mod position;
pub mod registry;

pub use ledger::{CollateralDeposited, CollateralLedger, CollateralRedeemed};
pub use position::{AccountInformation, PositionStatus, RiskParameters};
pub use registry::CollateralRegistry;
