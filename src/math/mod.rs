//! Fixed-point arithmetic for collateral valuation, health factors and
//! liquidation seizures.

pub mod common;
pub mod health;
pub mod liquidation;
pub mod valuation;

pub use common::{TryAdd, TryDiv, TryMul, TrySub};
