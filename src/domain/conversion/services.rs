use super::entities::{ConversionInput, ConversionResult, PriceQuote};
use super::value_objects::Direction;

/// Pure two-branch conversion.
///
/// Selling multiplies the base amount by the best bid; buying divides it.
/// NaN amounts flow straight through.
pub fn convert(amount: f64, direction: Direction, quote: PriceQuote) -> ConversionResult {
    let value = match direction {
        Direction::Sell => amount * quote.value(),
        Direction::Buy => amount / quote.value(),
    };
    ConversionResult::new(value)
}

/// The widget's single unit of mutable state.
///
/// Every mutation recomputes the derived result synchronously, so observers
/// only ever read a consistent (input, quote, result) triple. The result
/// stays absent until the first valid quote has been applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConverterState {
    input: ConversionInput,
    quote: Option<PriceQuote>,
    result: Option<ConversionResult>,
}

impl ConverterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> f64 {
        self.input.amount
    }

    pub fn direction(&self) -> Direction {
        self.input.direction
    }

    pub fn quote(&self) -> Option<PriceQuote> {
        self.quote
    }

    pub fn result(&self) -> Option<ConversionResult> {
        self.result
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.input.amount = amount;
        self.recompute();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.input.direction = direction;
        self.recompute();
    }

    pub fn toggle_direction(&mut self) {
        self.set_direction(self.input.direction.flipped());
    }

    pub fn apply_quote(&mut self, quote: PriceQuote) {
        self.quote = Some(quote);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = self.quote.map(|q| convert(self.input.amount, self.input.direction, q));
    }
}
