//! CLI module graph.

pub mod balance;
pub mod command;
pub mod market;
pub mod options;
pub mod output;
pub mod pool;
pub mod prices;
pub mod run;
pub mod trade;

pub use command::{Cli, Commands};
