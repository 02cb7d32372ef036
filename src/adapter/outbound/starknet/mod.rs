//! Starknet node integration.

pub mod provider;
pub mod settings;

pub use provider::{selector, RpcProvider};
pub use settings::StarknetConfig;
