use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rate_converter_wasm::domain::conversion::{Direction, PriceQuote, convert};

#[test]
fn sell_multiplies_by_best_bid() {
    let quote = PriceQuote::try_new(300.0).unwrap();
    let result = convert(2.0, Direction::Sell, quote);
    assert_eq!(result.value(), 600.0);
}

#[test]
fn buy_divides_by_best_bid() {
    let quote = PriceQuote::try_new(2.0).unwrap();
    let result = convert(10.0, Direction::Buy, quote);
    assert_eq!(result.value(), 5.0);
}

#[test]
fn zero_amount_converts_to_zero_both_ways() {
    let quote = PriceQuote::try_new(1234.5).unwrap();
    assert_eq!(convert(0.0, Direction::Sell, quote).value(), 0.0);
    assert_eq!(convert(0.0, Direction::Buy, quote).value(), 0.0);
}

#[quickcheck]
fn sell_equals_amount_times_price(amount: f64, price: f64) -> TestResult {
    if !amount.is_finite() || amount < 0.0 || !price.is_finite() || price <= 0.0 {
        return TestResult::discard();
    }
    let quote = PriceQuote::try_new(price).unwrap();
    TestResult::from_bool(convert(amount, Direction::Sell, quote).value() == amount * price)
}

#[quickcheck]
fn buy_equals_amount_over_price(amount: f64, price: f64) -> TestResult {
    if !amount.is_finite() || amount < 0.0 || !price.is_finite() || price <= 0.0 {
        return TestResult::discard();
    }
    let quote = PriceQuote::try_new(price).unwrap();
    TestResult::from_bool(convert(amount, Direction::Buy, quote).value() == amount / price)
}

#[quickcheck]
fn sell_then_buy_roundtrips(amount: f64, price: f64) -> TestResult {
    if !amount.is_finite() || amount <= 0.0 || amount > 1e12 {
        return TestResult::discard();
    }
    if !price.is_finite() || price <= 1e-6 || price > 1e9 {
        return TestResult::discard();
    }
    let quote = PriceQuote::try_new(price).unwrap();
    let sold = convert(amount, Direction::Sell, quote);
    let back = convert(sold.value(), Direction::Buy, quote);
    TestResult::from_bool((back.value() - amount).abs() <= amount * 1e-12)
}
