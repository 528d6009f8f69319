//! WebSocket client for the Binance depth stream and its data transfer objects.

pub mod depth_client;
pub mod dto;

pub use depth_client::*;
pub use dto::*;
