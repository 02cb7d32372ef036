//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!          ┌─────────────────────────┐
//!          │      Application        │
//!          │  (pool / option reads)  │
//!          └────────────┬────────────┘
//!                       │ ContractReader
//!                       ▼
//!              ┌─────────────────┐
//!              │ Starknet RPC    │
//!              │ adapter         │
//!              └─────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`ContractReader`] - View calls against deployed contracts

pub mod outbound;

pub use outbound::contract::ContractReader;
