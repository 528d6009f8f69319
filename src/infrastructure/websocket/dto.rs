use serde::Deserialize;

/// DTO for a diff-depth payload from the Binance `<symbol>@depth` stream.
///
/// The widget only consumes the bid side; everything else is carried for
/// completeness and ignored.
#[derive(Debug, Deserialize)]
pub struct DepthUpdate {
    #[serde(rename = "e")]
    pub event_type: String,
    #[serde(rename = "E")]
    pub event_time: u64,
    #[serde(rename = "s")]
    pub symbol: String,
    #[serde(rename = "U")]
    pub first_update_id: u64,
    #[serde(rename = "u")]
    pub final_update_id: u64,
    /// Bid levels as `[price, quantity]` string pairs, best bid first.
    #[serde(rename = "b", default)]
    pub bids: Vec<Vec<String>>,
    #[serde(rename = "a", default)]
    pub asks: Vec<Vec<String>>,
}

impl DepthUpdate {
    /// Price string of the top bid level, if the payload carries one.
    pub fn best_bid(&self) -> Option<&str> {
        self.bids.first().and_then(|level| level.first()).map(String::as_str)
    }
}
