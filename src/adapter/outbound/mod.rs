//! Outbound adapters (driven side).

pub mod carmine;
pub mod starknet;
