use rate_converter_wasm::domain::conversion::Symbol;
use rate_converter_wasm::infrastructure::websocket::{BinanceDepthClient, DepthUpdate, FeedError};

fn client() -> BinanceDepthClient {
    BinanceDepthClient::new(Symbol::from("ETHUSDT"))
}

#[test]
fn stream_url_targets_the_depth_channel() {
    assert_eq!(client().stream_url(), "wss://stream.binance.com:9443/ws/ethusdt@depth");
}

#[test]
fn parses_best_bid_from_depth_update() {
    let msg = r#"{
        "e": "depthUpdate",
        "E": 1700000000000,
        "s": "ETHUSDT",
        "U": 157,
        "u": 160,
        "b": [["300.555", "12.5"], ["300.40", "3.0"]],
        "a": [["300.60", "1.2"]]
    }"#;
    let quote = client().parse_message(msg).unwrap();
    assert_eq!(quote.value(), 300.555);
}

#[test]
fn best_bid_reads_first_price_of_first_level() {
    let msg = r#"{
        "e": "depthUpdate",
        "E": 1,
        "s": "ETHUSDT",
        "U": 1,
        "u": 2,
        "b": [["0.073", "9.9"]],
        "a": []
    }"#;
    let update: DepthUpdate = serde_json::from_str(msg).unwrap();
    assert_eq!(update.best_bid(), Some("0.073"));
}

#[test]
fn missing_bids_field_is_rejected() {
    let msg = r#"{"e": "depthUpdate", "E": 1, "s": "ETHUSDT", "U": 1, "u": 2}"#;
    assert_eq!(client().parse_message(msg), Err(FeedError::MissingBestBid));
}

#[test]
fn empty_bids_are_rejected() {
    let msg = r#"{"e": "depthUpdate", "E": 1, "s": "ETHUSDT", "U": 1, "u": 2, "b": [], "a": []}"#;
    assert_eq!(client().parse_message(msg), Err(FeedError::MissingBestBid));
}

#[test]
fn empty_first_level_is_rejected() {
    let msg = r#"{"e": "depthUpdate", "E": 1, "s": "ETHUSDT", "U": 1, "u": 2, "b": [[]], "a": []}"#;
    assert_eq!(client().parse_message(msg), Err(FeedError::MissingBestBid));
}

#[test]
fn non_numeric_price_string_is_rejected() {
    let msg = r#"{
        "e": "depthUpdate", "E": 1, "s": "ETHUSDT", "U": 1, "u": 2,
        "b": [["garbage", "1.0"]], "a": []
    }"#;
    assert_eq!(client().parse_message(msg), Err(FeedError::BadPrice("garbage".to_string())));
}

#[test]
fn non_positive_price_is_rejected() {
    let msg = r#"{
        "e": "depthUpdate", "E": 1, "s": "ETHUSDT", "U": 1, "u": 2,
        "b": [["0.0", "1.0"]], "a": []
    }"#;
    assert!(matches!(client().parse_message(msg), Err(FeedError::Quote(_))));
}

#[test]
fn non_json_frame_is_rejected() {
    assert!(matches!(client().parse_message("not json"), Err(FeedError::Deserialize(_))));
}
