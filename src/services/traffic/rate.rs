use tracing::trace;

use super::{CounterSample, Throughput};

/// Shortest interval a rate is averaged over, in milliseconds.
///
/// Sub-second or delayed polls would otherwise divide by almost nothing.
pub const MIN_ELAPSED_MS: u64 = 500;

/// Whether the engine has a reference sample yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateState {
    /// No sample seen since creation or the last interface switch
    Uninitialized,
    /// A reference sample is held
    Primed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PollState {
    sample: CounterSample,
    timestamp_ms: u64,
}

/// Instantaneous throughput from consecutive counter samples.
///
/// Holds exactly one previous sample. Each successful poll replaces it, so
/// the reported rate covers only the last interval.
#[derive(Debug, Clone, Default)]
pub struct RateEngine {
    last: Option<PollState>,
}

impl RateEngine {
    /// Engine without a reference sample
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> RateState {
        match self.last {
            Some(_) => RateState::Primed,
            None => RateState::Uninitialized,
        }
    }

    /// Use `sample` as the reference without emitting a rate.
    pub fn prime(&mut self, sample: CounterSample, now_ms: u64) {
        self.last = Some(PollState {
            sample,
            timestamp_ms: now_ms,
        });
    }

    /// Feed one poll result.
    ///
    /// Returns `None` (placeholder) when the read failed, which leaves the
    /// reference untouched, and on the first successful sample, which only
    /// primes the engine.
    pub fn on_poll(&mut self, sample: Option<CounterSample>, now_ms: u64) -> Option<Throughput> {
        let sample = sample?;

        let Some(last) = self.last else {
            trace!("Priming rate engine");
            self.prime(sample, now_ms);
            return None;
        };

        let elapsed_ms = now_ms.saturating_sub(last.timestamp_ms);
        let rate = throughput(last.sample, sample, elapsed_ms);
        self.prime(sample, now_ms);

        Some(rate)
    }

    /// Drop the reference sample.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Rate in bits per second between two samples `elapsed_ms` apart.
///
/// Counters that went backwards count as zero traffic and the interval is
/// never shorter than [`MIN_ELAPSED_MS`].
pub fn throughput(previous: CounterSample, current: CounterSample, elapsed_ms: u64) -> Throughput {
    let elapsed_secs = elapsed_ms.max(MIN_ELAPSED_MS) as f64 / 1000.0;

    let bits_per_sec = |before: u64, after: u64| after.saturating_sub(before) as f64 * 8.0 / elapsed_secs;

    Throughput {
        down_bps: bits_per_sec(previous.rx, current.rx),
        up_bps: bits_per_sec(previous.tx, current.tx),
    }
}
