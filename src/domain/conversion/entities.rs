pub use super::value_objects::{Direction, Price};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// What the user typed into the widget: an amount and a direction.
///
/// The amount is stored exactly as the input field parsed it. A non-numeric
/// field parses to NaN and the sentinel is kept, so a broken input shows up
/// as a non-numeric result instead of being silently suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionInput {
    pub amount: f64,
    pub direction: Direction,
}

impl ConversionInput {
    pub fn new(amount: f64, direction: Direction) -> Self {
        Self { amount, direction }
    }
}

impl Default for ConversionInput {
    fn default() -> Self {
        Self { amount: 0.0, direction: Direction::Sell }
    }
}

/// Rejection reasons for a best-bid value that cannot become a quote.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum InvalidQuote {
    #[display(fmt = "best bid is not a finite number: {}", _0)]
    NonFinite(f64),
    #[display(fmt = "best bid is not positive: {}", _0)]
    NonPositive(f64),
}

impl std::error::Error for InvalidQuote {}

/// The latest best-bid price accepted from the feed.
///
/// Construction filters out everything that must not overwrite the previous
/// quote; a rejected value is treated as a malformed message upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote(Price);

impl PriceQuote {
    pub fn try_new(value: f64) -> Result<Self, InvalidQuote> {
        if !value.is_finite() {
            return Err(InvalidQuote::NonFinite(value));
        }
        if value <= 0.0 {
            return Err(InvalidQuote::NonPositive(value));
        }
        Ok(Self(Price::new(value)))
    }

    pub fn price(&self) -> Price {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }
}

/// Derived output of the widget. May be NaN when the input amount was.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult(f64);

impl ConversionResult {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_numeric(&self) -> bool {
        !self.0.is_nan()
    }
}

/// Two decimal places, always; NaN renders as "NaN".
impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
