use rate_converter_wasm::domain::conversion::{
    ConversionResult, ConverterState, Direction, PriceQuote,
};

#[test]
fn sell_result_rounds_to_two_decimals() {
    let mut state = ConverterState::new();
    state.set_amount(1.0);
    state.apply_quote(PriceQuote::try_new(300.555).unwrap());
    assert_eq!(state.result().unwrap().to_string(), "300.56");
}

#[test]
fn buy_result_pads_to_two_decimals() {
    let mut state = ConverterState::new();
    state.set_amount(10.0);
    state.set_direction(Direction::Buy);
    state.apply_quote(PriceQuote::try_new(2.0).unwrap());
    assert_eq!(state.result().unwrap().to_string(), "5.00");
}

#[test]
fn nan_result_renders_as_nan() {
    // Documented current behavior: the sentinel is displayed, not suppressed
    assert_eq!(ConversionResult::new(f64::NAN).to_string(), "NaN");
}

#[test]
fn integer_results_still_show_cents() {
    assert_eq!(ConversionResult::new(600.0).to_string(), "600.00");
    assert_eq!(ConversionResult::new(0.0).to_string(), "0.00");
}
