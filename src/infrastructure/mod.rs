//! Infrastructure: configuration, logging and SDK wiring.

pub mod config;
pub mod context;
pub mod sdk;

pub use context::SdkContext;
