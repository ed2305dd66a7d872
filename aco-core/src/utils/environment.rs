#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{Quota, ThreadPool};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the engine.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences the run, but not the
/// algorithm itself.
#[derive(Clone)]
pub struct Environment {
    /// A seed of the master random generator. Runs with the same seed and inputs are identical.
    pub seed: Option<u64>,
    /// A dedicated thread pool for route construction. Rayon global pool is used when not set.
    pub thread_pool: Option<Arc<ThreadPool>>,
    /// An external quota which stops the run between iterations, e.g. time limit or user interruption.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,
    /// Information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with a fixed random seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Sets amount of worker threads used to construct routes. Zero means all available CPUs.
    pub fn with_threads(mut self, threads: usize) -> Self {
        let threads = if threads == 0 { get_cpus() } else { threads };
        self.thread_pool = Some(Arc::new(ThreadPool::new(threads)));
        self
    }

    /// Sets a quota.
    pub fn with_quota(mut self, quota: Arc<dyn Quota + Send + Sync>) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Sets a logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Returns a logger which writes messages to stdout.
    pub fn console_logger() -> InfoLogger {
        Arc::new(|msg: &str| println!("{msg}"))
    }

    /// Returns a logger which ignores all messages.
    pub fn silent_logger() -> InfoLogger {
        Arc::new(|_: &str| {})
    }

    /// Returns true if the quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().map_or(false, |quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { seed: None, thread_pool: None, quota: None, logger: Self::console_logger() }
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
