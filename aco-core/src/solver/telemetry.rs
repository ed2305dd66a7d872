//! A module which provides the logic to collect metrics about colony execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::solver::TerminationReason;
use crate::utils::{InfoLogger, Timer};

/// Encapsulates different measurements regarding colony run.
#[derive(Clone, Debug, Default)]
pub struct TelemetryMetrics {
    /// Run duration in milliseconds.
    pub duration: usize,
    /// Total amount of iterations.
    pub iterations: usize,
    /// Speed: iterations per second.
    pub speed: f64,
    /// Search progress.
    pub evolution: Vec<TelemetryIteration>,
}

/// Represents information about iteration.
#[derive(Clone, Debug)]
pub struct TelemetryIteration {
    /// Iteration sequence number.
    pub number: usize,
    /// Time since run started.
    pub timestamp: f64,
    /// The shortest tour length found in the iteration.
    pub best_length: f64,
    /// The shortest tour length found so far.
    pub global_best: f64,
    /// True if this iteration improved the best known tour.
    pub is_improvement: bool,
    /// How many times degenerate selection was resolved by uniform fallback.
    pub fallbacks: usize,
}

/// Specifies a telemetry mode.
#[derive(Clone, Debug, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// Specifies how often iteration best is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often iteration is tracked.
        track_best: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// Specifies how often iteration best is logged.
        log_best: usize,
        /// Specifies how often iteration is tracked.
        track_best: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
    logger: InfoLogger,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode, logger: InfoLogger) -> Self {
        Self {
            metrics: TelemetryMetrics::default(),
            time: Timer::start(),
            mode,
            logger,
        }
    }

    /// Reports iteration statistics.
    pub fn on_iteration(&mut self, iteration: TelemetryIteration, iteration_time: Timer) {
        self.metrics.iterations = iteration.number + 1;

        let (log_best, track_best) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best } => (Some(*log_best), None),
            TelemetryMode::OnlyMetrics { track_best } => (None, Some(*track_best)),
            TelemetryMode::All { log_best, track_best } => (Some(*log_best), Some(*track_best)),
        };

        if is_scheduled(iteration.number, log_best) {
            self.log(
                format!(
                    "[{}s] iteration {} took {}ms, best: {:.3}, global best: {:.3}{}",
                    self.time.elapsed_secs(),
                    iteration.number,
                    iteration_time.elapsed_millis(),
                    iteration.best_length,
                    iteration.global_best,
                    if iteration.fallbacks > 0 {
                        format!(", uniform fallbacks: {}", iteration.fallbacks)
                    } else {
                        String::default()
                    }
                )
                .as_str(),
            );
        }

        if is_scheduled(iteration.number, track_best) {
            let iteration = TelemetryIteration { timestamp: self.time.elapsed_secs_as_float(), ..iteration };
            self.metrics.evolution.push(iteration);
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, reason: TerminationReason, global_best: f64) {
        let iterations = self.metrics.iterations;
        let elapsed = self.time.elapsed_millis() as usize;
        let elapsed_secs = self.time.elapsed_secs_as_float();
        let speed = if elapsed_secs > 0. { iterations as f64 / elapsed_secs } else { 0. };

        self.metrics.duration = elapsed;
        self.metrics.speed = speed;

        self.log(
            format!(
                "[{}s] terminated ({}) after {iterations} iterations, speed: {speed:.2} iter/sec",
                self.time.elapsed_secs(),
                reason.name()
            )
            .as_str(),
        );
        self.log(format!("\tbest tour length: {global_best:.3}").as_str());
    }

    /// Takes collected metrics leaving empty ones in place.
    pub fn take_metrics(&mut self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(std::mem::take(&mut self.metrics)),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { .. } | TelemetryMode::All { .. } => (self.logger)(message),
            TelemetryMode::None | TelemetryMode::OnlyMetrics { .. } => {}
        }
    }
}

fn is_scheduled(number: usize, frequency: Option<usize>) -> bool {
    frequency.map_or(false, |frequency| number % frequency.max(1) == 0)
}
