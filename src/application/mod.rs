//! Application services (use cases).
//!
//! Network-backed operations on the domain entities. Pools, options and
//! tokens gain async read methods here; all chain access goes through
//! [`Contracts`].

pub mod contracts;
mod option;
mod pool;
mod token;

pub use contracts::{AmmContract, AuxContract, Contracts, Erc20Contract};
