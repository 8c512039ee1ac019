use std::time::{Duration, Instant};

use indexmap::IndexMap;

/// Operation counters and wall-clock timing for one algorithm run.
///
/// Algorithms call [`Metrics::start`] before doing any work, [`Metrics::increment`]
/// once per unit of work and [`Metrics::stop`] when done. Each stage of an
/// analysis gets its own instance; repeated sections on one instance add up.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    started: Option<Instant>,
    elapsed: Duration,
    counters: IndexMap<&'static str, u64>,
}

impl Metrics {
    /// Creates an empty metrics sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the beginning of a timed section
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Marks the end of a timed section. Calling `stop` without `start` is a no-op.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
        }
    }

    /// Records one unit of work under `name`
    pub fn increment(&mut self, name: &'static str) {
        *self.counters.entry(name).or_insert(0) += 1;
    }

    /// Total number of recorded events across all names
    pub fn counter(&self) -> u64 {
        self.counters.values().sum()
    }

    /// Number of events recorded under `name`
    pub fn count(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Named counters in the order they were first incremented
    pub fn counters(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counters.iter().map(|(name, count)| (*name, *count))
    }

    /// Total time spent inside `start`/`stop` sections
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}
