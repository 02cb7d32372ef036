//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`reader`] - [`ScriptedReader`](reader::ScriptedReader), an in-memory
//!   [`ContractReader`](crate::port::ContractReader) answering by entrypoint.
//! - [`domain`] - Builders for pools, options and felt payloads.
//! - [`config`] - Configurations pointing at local mock servers.

pub mod config;
pub mod domain;
pub mod reader;
