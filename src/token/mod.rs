//! Fungible tokens shipped with the engine: the debt token and the balance
//! book it shares with the mocks.

pub mod balances;
pub mod stable_coin;

pub use balances::{Approval, FungibleBalances, Transfer};
pub use stable_coin::{OwnershipTransferred, StableCoin};
