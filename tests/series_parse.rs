use stonks_chart_wasm::domain::errors::{AppError, FETCH_ERROR_MESSAGE};
use stonks_chart_wasm::domain::market_data::{CandleTone, parse_stock_data};
use stonks_chart_wasm::view_state::{LoadState, ViewState};

const SAMPLE: &str = r#"[
    {"Date":"2024-01-02","Open":100,"High":105,"Low":98,"Close":103,"Volume":1000},
    {"Date":"2024-01-03","Open":103,"High":104,"Low":99,"Close":97,"Volume":2000}
]"#;

#[test]
fn parses_sample_body() {
    let series = parse_stock_data(SAMPLE).expect("valid body").series;
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].tone(), CandleTone::Gain);
    assert_eq!(series[1].tone(), CandleTone::Loss);
    assert_eq!(series.price_range(), Some((98.0, 105.0)));
    assert_eq!(series.max_volume(), 2000);
}

#[test]
fn empty_array_is_an_empty_series() {
    let series = parse_stock_data("[]").expect("valid body").series;
    assert!(series.is_empty());
    assert_eq!(series.price_range(), None);
}

#[test]
fn malformed_bodies_fail() {
    assert!(matches!(parse_stock_data("{\"error\": 1}"), Err(AppError::Parse(_))));
    assert!(matches!(parse_stock_data("not json"), Err(AppError::Parse(_))));

    let bad_date = r#"[{"Date":"02/01/2024","Open":1,"High":1,"Low":1,"Close":1,"Volume":1}]"#;
    assert!(matches!(parse_stock_data(bad_date), Err(AppError::Validation(_))));

    let negative = r#"[{"Date":"2024-01-02","Open":-1,"High":1,"Low":1,"Close":1,"Volume":1}]"#;
    assert!(matches!(parse_stock_data(negative), Err(AppError::Validation(_))));
}

#[test]
fn failures_surface_only_the_static_message() {
    let state: ViewState = LoadState::from_result(parse_stock_data("not json"));
    assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));
}

#[test]
fn raw_dump_is_the_response_body() {
    let body = r#"[{"Date":"2024-01-02","Open":100,"High":105.5,"Low":98,"Close":103,"Volume":1000,"Dividends":0}]"#;
    let data = parse_stock_data(body).expect("valid body");
    assert_eq!(data.series[0].high, 105.5);
    insta::assert_snapshot!(data.to_pretty_json(), @r###"
    [
      {
        "Date": "2024-01-02",
        "Open": 100,
        "High": 105.5,
        "Low": 98,
        "Close": 103,
        "Volume": 1000,
        "Dividends": 0
      }
    ]
    "###);
}
