//! Progress observers.

/// Receives `(iteration, iteration-best fitness)` every report interval.
pub trait ProgressObserver {
    /// Called with the zero-based iteration index and that iteration's best
    /// fitness.
    fn on_progress(&mut self, iteration: usize, best_fitness: f64);
}

impl<F: FnMut(usize, f64)> ProgressObserver for F {
    fn on_progress(&mut self, iteration: usize, best_fitness: f64) {
        self(iteration, best_fitness)
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_progress(&mut self, _iteration: usize, _best_fitness: f64) {}
}

/// Forwards reports to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_progress(&mut self, iteration: usize, best_fitness: f64) {
        log::info!("iteration {iteration}: best fitness {best_fitness}");
    }
}

/// Collects every report in order.
#[derive(Debug, Clone, Default)]
pub struct HistoryObserver {
    reports: Vec<(usize, f64)>,
}

impl HistoryObserver {
    /// Creates an empty observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far.
    pub fn reports(&self) -> &[(usize, f64)] {
        &self.reports
    }
}

impl ProgressObserver for HistoryObserver {
    fn on_progress(&mut self, iteration: usize, best_fitness: f64) {
        self.reports.push((iteration, best_fitness));
    }
}
