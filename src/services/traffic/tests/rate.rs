use crate::services::traffic::{
    CounterSample, RateEngine, RateState, Throughput,
    rate::{MIN_ELAPSED_MS, throughput},
};

fn sample(rx: u64, tx: u64) -> CounterSample {
    CounterSample { rx, tx }
}

#[test]
fn first_sample_primes_without_a_rate() {
    let mut engine = RateEngine::new();
    assert_eq!(engine.state(), RateState::Uninitialized);

    assert_eq!(engine.on_poll(Some(sample(100, 100)), 1_000), None);
    assert_eq!(engine.state(), RateState::Primed);
}

#[test]
fn rate_is_bits_per_second_over_elapsed_time() {
    let mut engine = RateEngine::new();
    engine.on_poll(Some(sample(0, 0)), 10_000);

    let rate = engine.on_poll(Some(sample(1_000_000, 250_000)), 12_000);

    assert_eq!(
        rate,
        Some(Throughput {
            down_bps: 4_000_000.0,
            up_bps: 1_000_000.0,
        })
    );
}

#[test]
fn decreasing_counters_report_zero() {
    let mut engine = RateEngine::new();
    engine.on_poll(Some(sample(5_000, 9_000)), 0);

    let rate = engine.on_poll(Some(sample(10, 9_500)), 1_000).unwrap();

    assert_eq!(rate.down_bps, 0.0);
    assert_eq!(rate.up_bps, 4_000.0);
}

#[test]
fn reference_slides_to_the_latest_sample() {
    let mut engine = RateEngine::new();
    engine.on_poll(Some(sample(0, 0)), 0);
    engine.on_poll(Some(sample(1_000, 0)), 1_000);

    let rate = engine.on_poll(Some(sample(1_500, 0)), 2_000).unwrap();

    assert_eq!(rate.down_bps, 4_000.0);
}

#[test]
fn short_intervals_are_floored() {
    let mut engine = RateEngine::new();
    engine.on_poll(Some(sample(0, 0)), 1_000);

    let rate = engine.on_poll(Some(sample(1_000, 0)), 1_100).unwrap();

    assert_eq!(rate.down_bps, 16_000.0);
}

#[test]
fn clock_stepping_back_uses_the_floor() {
    let mut engine = RateEngine::new();
    engine.on_poll(Some(sample(0, 0)), 50_000);

    let rate = engine.on_poll(Some(sample(500, 500)), 40_000).unwrap();

    assert_eq!(rate.down_bps, 8_000.0);
    assert_eq!(rate.up_bps, 8_000.0);
}

#[test]
fn failed_read_keeps_the_reference() {
    let mut engine = RateEngine::new();
    engine.on_poll(Some(sample(0, 0)), 0);

    assert_eq!(engine.on_poll(None, 1_000), None);
    assert_eq!(engine.state(), RateState::Primed);

    let rate = engine.on_poll(Some(sample(2_000, 0)), 2_000).unwrap();
    assert_eq!(rate.down_bps, 8_000.0);
}

#[test]
fn failed_read_before_priming_stays_uninitialized() {
    let mut engine = RateEngine::new();

    assert_eq!(engine.on_poll(None, 0), None);
    assert_eq!(engine.state(), RateState::Uninitialized);
}

#[test]
fn prime_and_reset() {
    let mut engine = RateEngine::new();
    engine.prime(sample(100, 100), 0);
    assert_eq!(engine.state(), RateState::Primed);

    let rate = engine.on_poll(Some(sample(225, 100)), 1_000).unwrap();
    assert_eq!(rate.down_bps, 1_000.0);

    engine.reset();
    assert_eq!(engine.state(), RateState::Uninitialized);
    assert_eq!(engine.on_poll(Some(sample(300, 100)), 2_000), None);
}

#[test]
fn throughput_is_never_negative() {
    let pairs = [(0, 0), (10, 0), (0, 10), (u64::MAX, 0), (0, u64::MAX)];

    for (before, after) in pairs {
        let rate = throughput(sample(before, before), sample(after, after), 1_000);
        assert!(rate.down_bps >= 0.0);
        assert!(rate.up_bps >= 0.0);
        let expected = after.saturating_sub(before) as f64 * 8.0;
        assert_eq!(rate.down_bps, expected);
    }

    let floored = throughput(sample(0, 0), sample(1, 1), 0);
    assert_eq!(floored.down_bps, 8.0 * 1000.0 / MIN_ELAPSED_MS as f64);
}
