//! Builders for domain values and felt payloads used across tests.

use alloy_primitives::U256;

use crate::domain::address::{felt_to_hex, parse_felt};
use crate::domain::fixed::Fixed;
use crate::domain::option::{OptionContract, OptionSide};
use crate::domain::pool::{LiquidityPool, PoolId};

/// Maturity shared by the fixture options: 2025-10-09 23:59:59 UTC.
pub const MATURITY: u64 = 1_760_054_399;

/// Three ETH/USDC calls expiring at [`LIVE_MATURITY`] as served by the
/// backend's live-options feed: long 2500, short 2500, long 3000.
/// 2025-09-04 23:59:59 UTC.
pub const LIVE_MATURITY: u64 = 1_757_030_399;

pub const LIVE_OPTIONS_FELTS: [&str; 27] = [
    "0x0",
    "0x68ba27ff",
    "0x9c40000000000000000",
    "0x0",
    "0x53c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8",
    "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
    "0x0",
    "0x743f969b548ac182",
    "0x0",
    "0x1",
    "0x68ba27ff",
    "0x9c40000000000000000",
    "0x0",
    "0x53c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8",
    "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
    "0x0",
    "0x6d7a05226fed1bd6",
    "0x0",
    "0x0",
    "0x68ba27ff",
    "0xbb80000000000000000",
    "0x0",
    "0x53c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8",
    "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7",
    "0x0",
    "0x56c3171987ea087b",
    "0x0",
];

/// Owned felts from string literals.
pub fn felts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// A u256 result as `[low, high]` hex felts.
pub fn u256_felts(value: U256) -> Vec<String> {
    let low = value & U256::from(u128::MAX);
    let high = value >> 128;
    vec![format!("{low:#x}"), format!("{high:#x}")]
}

/// A fixed-point result as `[mag, sign]` hex felts.
pub fn fixed_felts(value: f64) -> Vec<String> {
    let fixed = Fixed::from_f64(value).expect("finite fixture value");
    vec![
        format!("{:#x}", fixed.mag),
        if fixed.sign { "0x1" } else { "0x0" }.to_string(),
    ]
}

pub fn pool(id: PoolId) -> LiquidityPool {
    LiquidityPool::from_pool_id(id)
}

/// An option on `id` with the fixture maturity.
pub fn option(id: PoolId, side: OptionSide, strike: f64) -> OptionContract {
    OptionContract::on_pool(
        pool(id),
        side,
        MATURITY,
        Fixed::from_f64(strike).expect("finite fixture strike"),
    )
}

/// An option with premium encoded as the nine felts of the AMM's
/// `(Option, Fixed)` tuple.
pub fn option_with_premia_felts(option: &OptionContract, premia: f64) -> Vec<String> {
    let mut out: Vec<String> = option
        .to_calldata()
        .into_iter()
        .map(|felt| felt_to_hex(parse_felt(&felt).expect("calldata felt")))
        .collect();
    out.extend(fixed_felts(premia));
    out
}
