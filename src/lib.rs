//! Carmine - client SDK for the Carmine options protocol on Starknet.
//!
//! Reads pool and option state from the on-chain AMM, prices options,
//! builds the calls needed to trade or provide liquidity, and queries the
//! Carmine indexer backend.
//!
//! # Architecture
//!
//! - **`domain`** - Tokens, pools, options, fixed-point and felt encoding.
//!   Pure and synchronous; builds [`domain::call::Call`]s but never sends them.
//! - **`port`** - The [`port::outbound::contract::ContractReader`] seam for
//!   read-only contract calls.
//! - **`application`** - Contract wrappers and the async reads on pools,
//!   options and tokens.
//! - **`adapter`** - Starknet JSON-RPC provider, Carmine REST client and the
//!   `carmine` CLI.
//! - **`infrastructure`** - Configuration, logging and the shared SDK
//!   context.
//!
//! # Features
//!
//! - `testkit` - Scripted contract reader and fixtures for tests.
//!
//! # Example
//!
//! ```no_run
//! use carmine::domain::pool::{LiquidityPool, PoolId};
//! use carmine::infrastructure::{config::Config, SdkContext};
//!
//! # async fn demo() -> carmine::error::Result<()> {
//! let context = SdkContext::new(Config::default());
//! let pool = LiquidityPool::from_pool_id(PoolId::EthUsdcCall);
//! let tvl = pool.fetch_pool_tvl(&context.contracts()).await?;
//! println!("TVL: {tvl}");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use error::{Error, Result};
