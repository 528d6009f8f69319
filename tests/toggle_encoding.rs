use rate_converter_wasm::domain::conversion::Direction;

#[test]
fn toggle_values_map_to_directions() {
    assert_eq!(Direction::from_toggle(0), Direction::Sell);
    assert_eq!(Direction::from_toggle(1), Direction::Buy);
}

#[test]
fn directions_round_trip_through_toggle_encoding() {
    for direction in [Direction::Sell, Direction::Buy] {
        assert_eq!(Direction::from_toggle(direction.as_toggle()), direction);
    }
}

#[test]
fn flip_is_an_involution() {
    assert_eq!(Direction::Sell.flipped(), Direction::Buy);
    assert_eq!(Direction::Buy.flipped(), Direction::Sell);
    assert_eq!(Direction::Sell.flipped().flipped(), Direction::Sell);
}

#[test]
fn labels_name_the_base_asset() {
    assert_eq!(Direction::Sell.label(), "Selling ETH");
    assert_eq!(Direction::Buy.label(), "Buying ETH");
}
