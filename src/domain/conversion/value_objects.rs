use derive_more::{Constructor, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, EnumIter, EnumString, Display as StrumDisplay};

/// Value Object - price of one unit of the base asset, in quote currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - trading symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

/// Value Object - conversion direction, toggled by the UI switch.
///
/// The switch reports 0/1; 0 sells the base asset, 1 buys it back.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum Direction {
    #[strum(serialize = "sell")]
    #[serde(rename = "sell")]
    Sell,

    #[strum(serialize = "buy")]
    #[serde(rename = "buy")]
    Buy,
}

impl Direction {
    pub fn from_toggle(value: u8) -> Self {
        if value == 1 { Self::Buy } else { Self::Sell }
    }

    pub fn as_toggle(&self) -> u8 {
        match self {
            Self::Sell => 0,
            Self::Buy => 1,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Sell => Self::Buy,
            Self::Buy => Self::Sell,
        }
    }

    /// Label shown next to the switch.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sell => "Selling ETH",
            Self::Buy => "Buying ETH",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Sell
    }
}
