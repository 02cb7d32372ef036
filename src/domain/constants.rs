//! Mainnet contract addresses and protocol defaults.

/// Main AMM contract.
pub const AMM_ADDRESS: &str = "0x47472e6755afc57ada9550b6a3ac93129cc4b5f98f51c73e0644d129fd208d9";

/// Auxiliary contract used for wBTC option listings.
pub const AUX_ADDRESS: &str = "0x4580d85b9d19b9412bb982bcb31ecb6ebb4363221e27b349b569f60410f6ef";

pub const ETH_ADDRESS: &str = "0x49d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7";
pub const USDC_ADDRESS: &str = "0x53c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8";
pub const BTC_ADDRESS: &str = "0x3fe2b97c1fd336e750087d68b9b867997fd64a2661ff3ca5a7c771641e8e7ac";
pub const STRK_ADDRESS: &str = "0x4718f5a0fc34cc1af16a1cdee98ffb20c31f5cd61d6ab07201858f4287c938d";
pub const EKUBO_ADDRESS: &str = "0x75afe6402ad5a5c20dd25e10ec3b3986acaa647b77e4ae24b0cbc9a54a27a87";

// LP token addresses, one per pool
pub const ETH_USDC_CALL_ADDRESS: &str =
    "0x70cad6be2c3fc48c745e4a4b70ef578d9c79b46ffac4cd93ec7b61f951c7c5c";
pub const ETH_USDC_PUT_ADDRESS: &str =
    "0x466e3a6731571cf5d74c5b0d9c508bfb71438de10f9a13269177b01d6f07159";
pub const BTC_USDC_CALL_ADDRESS: &str =
    "0x35db72a814c9b30301f646a8fa8c192ff63a0dc82beb390a36e6e9eba55b6db";
pub const BTC_USDC_PUT_ADDRESS: &str =
    "0x1bf27366077765c922f342c8de257591d1119ebbcbae7a6c4ff2f50ede4c54c";
pub const ETH_STRK_CALL_ADDRESS: &str =
    "0x6df66db6a4b321869b3d1808fc702713b6cbb69541d583d4b38e7b1406c09aa";
pub const ETH_STRK_PUT_ADDRESS: &str =
    "0x4dcd9632353ed56e47be78f66a55a04e2c1303ebcb8ec7ea4c53f4fdf3834ec";
pub const STRK_USDC_CALL_ADDRESS: &str =
    "0x2b629088a1d30019ef18b893cebab236f84a365402fa0df2f51ec6a01506b1d";
pub const STRK_USDC_PUT_ADDRESS: &str =
    "0x6ebf1d8bd43b9b4c5d90fb337c5c0647b406c6c0045da02e6675c43710a326f";
pub const EKUBO_USDC_CALL_ADDRESS: &str =
    "0x78a090c99bfc993fe8bbd19487351e501dbe7b50ab695966605e0839b34182a";
pub const EKUBO_USDC_PUT_ADDRESS: &str =
    "0xe12a16c964dc68850c1f6cbea9062c36bed7676265eec7f563c728c53e536f";

/// Default Starknet JSON-RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "http://51.195.57.196:6060";

/// Default Carmine REST backend.
pub const DEFAULT_API_URL: &str = "https://backend.carmine.finance";

/// LP tokens always carry 18 decimals regardless of the underlying.
pub const LP_TOKEN_DECIMALS: u32 = 18;

/// Slippage tolerance is capped at 60%.
pub const MAX_SLIPPAGE: f64 = 0.6;

/// Seconds a trade stays valid when no deadline is given.
pub const DEFAULT_TRADE_DEADLINE_SECS: u64 = 300;
