#![allow(clippy::arithmetic_side_effects)]
#![cfg_attr(target_arch = "wasm32", no_std)]

//! An overcollateralized stablecoin engine for the casper blockchain.

pub mod error;
pub mod interfaces;
pub mod math;
pub mod mocks;
pub mod oracle;
pub mod processor;
pub mod state;
pub mod token;

pub use error::{EngineError, TokenError};
pub use mocks::{MockCollateral, MockFailedMintDebtToken, MockV3Aggregator};
pub use processor::DscEngine;
pub use token::StableCoin;

extern crate alloc;
