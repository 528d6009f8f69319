pub mod services;
pub mod websocket;
