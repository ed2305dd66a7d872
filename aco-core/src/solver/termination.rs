#[cfg(test)]
#[path = "../../tests/unit/solver/termination_test.rs"]
mod termination_test;

/// Specifies why the colony run has stopped. All reasons are successful outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationReason {
    /// The iteration budget is exhausted.
    MaxIterations,
    /// The best known tour was not improved during configured amount of iterations.
    Converged,
    /// An external quota was reached, e.g. time limit or user interruption.
    Interrupted,
}

impl TerminationReason {
    /// Returns a short human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MaxIterations => "max iterations",
            Self::Converged => "converged",
            Self::Interrupted => "interrupted",
        }
    }
}

/// Keeps track of the best known tour length and counts iterations without improvement.
#[derive(Clone, Debug)]
pub struct ConvergenceTracker {
    threshold: Option<usize>,
    global_best: f64,
    previous_best: f64,
    counter: usize,
}

impl ConvergenceTracker {
    /// Creates a new tracker. Convergence is never detected when `threshold` is not set.
    pub fn new(threshold: Option<usize>) -> Self {
        Self { threshold, global_best: f64::INFINITY, previous_best: f64::INFINITY, counter: 0 }
    }

    /// Accepts the best tour length of the iteration and returns true if it improves the best known one.
    pub fn track(&mut self, iteration_best: f64) -> bool {
        let is_improvement = iteration_best < self.global_best;

        if is_improvement {
            self.global_best = iteration_best;
            self.counter = 0;
        } else if self.global_best == self.previous_best {
            self.counter += 1;
        }

        self.previous_best = self.global_best;

        is_improvement
    }

    /// Returns true when the counter has reached the threshold.
    pub fn is_converged(&self) -> bool {
        self.threshold.map_or(false, |threshold| self.counter >= threshold)
    }

    /// Returns the best known tour length, infinity when nothing is tracked yet.
    pub fn global_best(&self) -> f64 {
        self.global_best
    }

    /// Returns amount of consecutive iterations without improvement.
    pub fn counter(&self) -> usize {
        self.counter
    }
}
