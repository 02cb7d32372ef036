//! Carmine REST backend integration.

pub mod client;
pub mod dto;
pub mod settings;
pub mod state;
pub mod url;

pub use client::{CarmineApi, PageQuery};
pub use settings::{CarmineApiConfig, Network};
pub use state::PoolState;
