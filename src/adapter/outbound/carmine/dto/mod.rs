//! Carmine backend data transfer objects.
//!
//! Contains the wire shapes returned by the backend:
//! - the `{status, data}` envelope of versioned endpoints
//! - pool state, prices, event feeds and points

pub mod envelope;
pub mod number;
pub mod response;

pub use envelope::ApiResponse;
pub use response::{
    LiquidityAction, LiquidityEvent, LivePrices, PaginatedResponse, StateResponse, TopUsers,
    TradeAction, TradeEvent, UserPoints, VoteEvent,
};
