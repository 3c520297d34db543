mod common;

use common::{bar, daily_series, day, two_day_series};
use stonks_chart_wasm::domain::chart::{
    ChartDimensions, ChartRenderingService, Color, GRID_OPACITY, MIN_HIT_HEIGHT, MonthGrouping,
    VOLUME_HEIGHT_RATIO,
};
use stonks_chart_wasm::domain::market_data::{CandleTone, Series};

fn service() -> ChartRenderingService {
    ChartRenderingService::new(ChartDimensions::default(), MonthGrouping::YearMonth)
}

#[test]
fn two_day_sample_scene() {
    let scene = service().build_scene(&two_day_series()).expect("scene");

    assert_eq!(scene.candle_count(), 2);
    assert_eq!(scene.volumes.len(), 2);
    assert_eq!(scene.vertical_grid.len(), 2);
    assert_eq!(scene.x_ticks.len(), 2);
    assert_eq!(scene.x_ticks[0].label, "02");
    assert_eq!(scene.x_ticks[1].label, "03");

    assert_eq!(scene.candles[0].tone, CandleTone::Gain);
    assert_eq!(scene.candles[0].fill, Color::GREEN);
    assert_eq!(scene.candles[1].tone, CandleTone::Loss);
    assert_eq!(scene.candles[1].fill, Color::RED);

    assert!((scene.raw_price_domain.0 - 93.1).abs() < 1e-9);
    assert_eq!(scene.raw_price_domain.1, 105.0);
    assert_eq!(scene.price_domain, (93.0, 105.0));
    assert_eq!(scene.horizontal_grid.len(), scene.y_ticks.len());
    assert!(scene.horizontal_grid.iter().all(|l| l.opacity == GRID_OPACITY));

    let labels: Vec<&str> = scene.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels.first(), Some(&"93"));
    assert_eq!(labels.last(), Some(&"105"));
    assert_eq!(labels.len(), 13);
}

#[test]
fn price_labels_keep_the_step_decimals() {
    let cheap = Series::new(vec![bar(day(2024, 1, 2), 10.2, 11.0, 10.0, 10.8, 100)]);
    let scene = service().build_scene(&cheap).expect("scene");
    let labels: Vec<&str> = scene.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels.first(), Some(&"9.4"));
    assert!(labels.contains(&"10.0"));
    assert_eq!(labels.last(), Some(&"11.0"));

    let dear = Series::new(vec![bar(day(2024, 1, 2), 2050.0, 2100.0, 2000.0, 2080.0, 100)]);
    let scene = service().build_scene(&dear).expect("scene");
    let labels: Vec<&str> = scene.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels.first(), Some(&"1,900"));
    assert!(labels.contains(&"2,000"));
    assert_eq!(labels.last(), Some(&"2,100"));
}

#[test]
fn candle_geometry_follows_prices() {
    let scene = service().build_scene(&two_day_series()).expect("scene");
    let height = ChartDimensions::default().inner_height();
    let y = |price: f64| height - (price - 93.0) / 12.0 * height;

    let gain = &scene.candles[0];
    assert!((gain.body.y - y(103.0)).abs() < 1e-9);
    assert!((gain.body.height - (y(100.0) - y(103.0))).abs() < 1e-9);
    assert!((gain.stem.y1 - y(105.0)).abs() < 1e-9);
    assert!((gain.stem.y2 - y(98.0)).abs() < 1e-9);
    assert!((gain.stem.x1 - (gain.body.x + scene.bandwidth / 2.0)).abs() < 1e-9);
}

#[test]
fn tallest_volume_bar_fills_bottom_fifth() {
    let scene = service().build_scene(&two_day_series()).expect("scene");
    let height = ChartDimensions::default().inner_height();

    let tallest = &scene.volumes[1].rect;
    assert!((tallest.height - height * VOLUME_HEIGHT_RATIO).abs() < 1e-6);
    assert!((tallest.y + tallest.height - height).abs() < 1e-9);

    let half = &scene.volumes[0].rect;
    assert!((half.height - height * VOLUME_HEIGHT_RATIO / 2.0).abs() < 1e-6);
    assert!(half.width < scene.bandwidth);
}

#[test]
fn zero_volume_draws_flat_bars() {
    let mut bars = two_day_series().bars().to_vec();
    bars.iter_mut().for_each(|b| b.volume = 0);
    let scene = service().build_scene(&Series::new(bars)).expect("scene");
    assert!(scene.volumes.iter().all(|v| v.rect.height == 0.0));
}

#[test]
fn x_ticks_thin_out_from_one_hundred_bars() {
    let dense = service().build_scene(&daily_series(99)).expect("scene");
    assert_eq!(dense.x_ticks.len(), 99);

    let sparse = service().build_scene(&daily_series(100)).expect("scene");
    assert_eq!(sparse.x_ticks.len(), 20);

    let sparse = service().build_scene(&daily_series(103)).expect("scene");
    assert_eq!(sparse.x_ticks.len(), 21);
    assert_eq!(sparse.candle_count(), 103);
}

#[test]
fn empty_series_draws_nothing() {
    assert!(service().build_scene(&Series::default()).is_none());
}

#[test]
fn single_bar_sits_in_the_middle() {
    let series = Series::new(two_day_series().bars()[..1].to_vec());
    let scene = service().build_scene(&series).expect("scene");
    let width = ChartDimensions::default().inner_width();
    let glyph = &scene.candles[0];
    assert!((glyph.body.center_x() - width / 2.0).abs() < 1e-9);
}

#[test]
fn glyph_rect_adds_margins() {
    let scene = service().build_scene(&two_day_series()).expect("scene");
    let margin = ChartDimensions::default().margin;
    let rect = scene.glyph_rect(1).expect("second glyph");
    assert_eq!(rect.x, scene.candles[1].body.x + margin.left);
    assert_eq!(rect.y, scene.candles[1].body.y + margin.top);
    assert!(scene.glyph_rect(2).is_none());
}

#[test]
fn flat_day_still_has_a_hover_area() {
    let series = Series::new(vec![
        bar(day(2024, 1, 2), 100.0, 104.0, 97.0, 100.0, 1000),
        bar(day(2024, 1, 3), 101.0, 101.0, 101.0, 101.0, 500),
    ]);
    let scene = service().build_scene(&series).expect("scene");

    let doji = &scene.candles[0];
    assert_eq!(doji.body.height, 0.0);
    assert!(doji.hit.height > 0.0);
    assert!((doji.hit.y - doji.stem.y1).abs() < 1e-9);
    assert!((doji.hit.y + doji.hit.height - doji.stem.y2).abs() < 1e-9);
    assert_eq!(doji.hit.x, doji.body.x);
    assert_eq!(doji.hit.width, doji.body.width);

    let no_range = &scene.candles[1];
    assert_eq!(no_range.hit.height, MIN_HIT_HEIGHT);
    assert!((no_range.hit.y + MIN_HIT_HEIGHT / 2.0 - no_range.stem.y1).abs() < 1e-9);
}
