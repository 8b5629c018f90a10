//! Provides a simple way to collect and log progress of the search.

use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Logs progress of the search.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often the best known fitness is logged, in generations.
        log_best: usize,
    },
}

/// Writes progress of the search into the log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start() }
    }

    /// Reports the best known fitness of a generation.
    pub fn on_generation(&self, generation: usize, best_fitness: Float, is_improved: bool) {
        if let TelemetryMode::OnlyLogging { logger, log_best } = &self.mode {
            if is_improved || generation % (*log_best).max(1) == 0 {
                (logger)(&format!(
                    "[{}s] generation {generation}: best fitness {best_fitness:.4}{}",
                    self.time.elapsed_secs(),
                    if is_improved { " (improved)" } else { "" }
                ));
            }
        }
    }

    /// Reports the result of the whole run.
    pub fn on_result(&self, generations: usize, best_fitness: Float) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(&format!(
                "[{}s] search finished after {generations} generations, best fitness {best_fitness:.4}",
                self.time.elapsed_secs()
            ));
        }
    }
}
