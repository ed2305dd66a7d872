#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::construction::DegeneratePolicy;
use crate::pheromone::Variant;
use crate::solver::TelemetryMode;
use crate::utils::{ColonyError, ColonyResult};

/// Specifies convergence tracking: the run stops when the best known tour length is not
/// improved during the given amount of consecutive iterations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvergenceConfig {
    /// Whether convergence tracking is enabled.
    pub is_enabled: bool,
    /// Amount of iterations without improvement to consider the colony as converged.
    pub iterations: Option<usize>,
}

/// A configuration which controls colony execution.
#[derive(Clone, Debug)]
pub struct ColonyConfig {
    /// Pheromone influence exponent.
    pub alpha: f64,
    /// Heuristic (inverse distance) influence exponent.
    pub beta: f64,
    /// Evaporation rate per iteration, in `(0, 1)`.
    pub rho: f64,
    /// Initial pheromone value, positive.
    pub init_pheromone: f64,
    /// Numerator of the deposition increment, positive.
    pub pheromone_q: f64,
    /// Amount of agents in the population.
    pub agent_count: usize,
    /// An ant colony variant.
    pub variant: Variant,
    /// Iteration budget.
    pub max_iterations: usize,
    /// Convergence tracking, disabled when not set.
    pub convergence: Option<ConvergenceConfig>,
    /// A policy to resolve degenerate selection during route construction.
    pub degenerate: DegeneratePolicy,
    /// Telemetry settings.
    pub telemetry: TelemetryMode,
}

impl ColonyConfig {
    /// Checks that all coefficients are inside of their valid domains.
    pub fn validate(&self) -> ColonyResult<()> {
        check_finite("alpha", self.alpha)?;
        check_finite("beta", self.beta)?;

        if !(self.rho > 0. && self.rho < 1.) {
            return Err(ColonyError::configuration(format!("rho should be in (0, 1), got: '{}'", self.rho)));
        }

        check_positive("init_pheromone", self.init_pheromone)?;
        check_positive("pheromone_q", self.pheromone_q)?;

        if let Variant::MaxMin { p_best } = self.variant {
            if !(p_best > 0. && p_best < 1.) {
                return Err(ColonyError::configuration(format!("p_best should be in (0, 1), got: '{p_best}'")));
            }
        }

        if self.agent_count == 0 {
            return Err(ColonyError::configuration("agent count should be positive"));
        }

        if self.max_iterations == 0 {
            return Err(ColonyError::configuration("max iterations should be positive"));
        }

        match &self.convergence {
            Some(ConvergenceConfig { is_enabled: true, iterations: None }) => {
                Err(ColonyError::ConvergenceMisconfiguration)
            }
            Some(ConvergenceConfig { is_enabled: true, iterations: Some(0) }) => {
                Err(ColonyError::configuration("convergence iterations should be positive"))
            }
            _ => Ok(()),
        }
    }

    /// Returns convergence threshold when convergence tracking is enabled.
    pub fn convergence_threshold(&self) -> Option<usize> {
        self.convergence
            .as_ref()
            .filter(|convergence| convergence.is_enabled)
            .and_then(|convergence| convergence.iterations)
    }
}

/// Provides configurable way to build colony configuration using fluent interface style.
pub struct ColonyConfigBuilder {
    alpha: f64,
    beta: f64,
    rho: f64,
    init_pheromone: f64,
    pheromone_q: f64,
    agent_count: Option<usize>,
    variant: Variant,
    max_iterations: usize,
    convergence: Option<ConvergenceConfig>,
    degenerate: DegeneratePolicy,
    telemetry: TelemetryMode,
}

impl Default for ColonyConfigBuilder {
    fn default() -> Self {
        Self {
            alpha: 1.,
            beta: 5.,
            rho: 0.5,
            init_pheromone: 1.,
            pheromone_q: 1.,
            agent_count: None,
            variant: Variant::Plain,
            max_iterations: 100,
            convergence: None,
            degenerate: DegeneratePolicy::default(),
            telemetry: TelemetryMode::None,
        }
    }
}

impl ColonyConfigBuilder {
    /// Sets pheromone influence exponent. Default is 1.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets heuristic influence exponent. Default is 5.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets evaporation rate. Default is 0.5.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets initial pheromone value. Default is 1.
    pub fn with_init_pheromone(mut self, init_pheromone: f64) -> Self {
        self.init_pheromone = init_pheromone;
        self
    }

    /// Sets numerator of the deposition increment. Default is 1.
    pub fn with_pheromone_q(mut self, pheromone_q: f64) -> Self {
        self.pheromone_q = pheromone_q;
        self
    }

    /// Sets amount of agents. Has no default and must be specified.
    pub fn with_agent_count(mut self, agent_count: usize) -> Self {
        self.agent_count = Some(agent_count);
        self
    }

    /// Sets ant colony variant. Default is plain Ant System.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets max iterations to be run. Default is 100.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets convergence tracking. Default is no tracking.
    pub fn with_convergence(mut self, is_enabled: bool, iterations: Option<usize>) -> Self {
        self.convergence = Some(ConvergenceConfig { is_enabled, iterations });
        self
    }

    /// Sets degenerate selection policy. Default is uniform fallback.
    pub fn with_degenerate_policy(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    /// Sets telemetry mode. Default is no telemetry.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Builds and validates a colony configuration.
    pub fn build(self) -> ColonyResult<ColonyConfig> {
        let agent_count = self.agent_count.ok_or_else(|| ColonyError::configuration("agent count is not specified"))?;

        let config = ColonyConfig {
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            init_pheromone: self.init_pheromone,
            pheromone_q: self.pheromone_q,
            agent_count,
            variant: self.variant,
            max_iterations: self.max_iterations,
            convergence: self.convergence,
            degenerate: self.degenerate,
            telemetry: self.telemetry,
        };

        config.validate()?;

        Ok(config)
    }
}

fn check_finite(name: &str, value: f64) -> ColonyResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ColonyError::configuration(format!("{name} should be finite, got: '{value}'")))
    }
}

fn check_positive(name: &str, value: f64) -> ColonyResult<()> {
    if value.is_finite() && value > 0. {
        Ok(())
    } else {
        Err(ColonyError::configuration(format!("{name} should be positive, got: '{value}'")))
    }
}
