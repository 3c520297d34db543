use quickcheck_macros::quickcheck;
use stonks_chart_wasm::domain::chart::{LinearScale, tick_increment};

#[test]
fn floor_of_sample_series_nices_to_whole_dollars() {
    let raw: (f64, f64) = (98.0 * 0.95, 105.0);
    assert!((raw.0 - 93.1).abs() < 1e-9);

    let y = LinearScale::new(raw, (520.0, 0.0)).nice(10);
    assert_eq!(y.domain(), (93.0, 105.0));
    assert_eq!(y.map(93.0), 520.0);
    assert_eq!(y.map(105.0), 0.0);

    let ticks = y.ticks(10);
    assert_eq!(ticks.first(), Some(&93.0));
    assert_eq!(ticks.last(), Some(&105.0));
    assert_eq!(ticks.len(), 13);
}

#[test]
fn increments_follow_one_two_five() {
    assert_eq!(tick_increment(0.0, 100.0, 10), 10.0);
    assert_eq!(tick_increment(0.0, 50.0, 10), 5.0);
    assert_eq!(tick_increment(0.0, 20.0, 10), 2.0);
}

#[test]
fn collapsed_domain_maps_to_middle() {
    let y = LinearScale::new((42.0, 42.0), (520.0, 0.0));
    assert_eq!(y.map(42.0), 260.0);
}

#[quickcheck]
fn nice_domain_contains_raw_domain(lo: u16, span: u16) -> bool {
    let lo = lo as f64 / 7.0;
    let hi = lo + 1.0 + span as f64 / 3.0;
    let (nlo, nhi) = LinearScale::new((lo, hi), (520.0, 0.0)).nice(10).domain();
    nlo <= lo + 1e-9 && nhi >= hi - 1e-9
}
