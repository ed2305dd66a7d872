//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use aco_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A default convergence sharpness of Max-Min variant.
pub const DEFAULT_P_BEST: f64 = 0.05;

/// A default frequency of iteration logging.
pub const DEFAULT_LOG_BEST: usize = 10;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies colony coefficients.
    pub colony: Option<ColonyParamsConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// Colony coefficients, all are optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColonyParamsConfig {
    /// Pheromone influence exponent. Default is 1.
    pub alpha: Option<f64>,
    /// Heuristic influence exponent. Default is 5.
    pub beta: Option<f64>,
    /// Evaporation rate. Default is 0.5.
    pub rho: Option<f64>,
    /// Initial pheromone value. Default is 1.
    pub init_pheromone: Option<f64>,
    /// Numerator of the deposition increment. Default is 1.
    pub pheromone_q: Option<f64>,
    /// Amount of agents. Default is amount of cities.
    pub agents: Option<usize>,
    /// An ant colony variant. Default is plain.
    pub variant: Option<VariantType>,
}

/// An ant colony variant configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum VariantType {
    /// A classical Ant System.
    #[serde(rename(deserialize = "plain"))]
    Plain,

    /// Only the best agents of each iteration deposit pheromone.
    #[serde(rename(deserialize = "elitist"))]
    Elitist,

    /// Max-Min Ant System.
    #[serde(rename(deserialize = "max-min"))]
    #[serde(rename_all = "camelCase")]
    MaxMin {
        /// Convergence sharpness. Default is 0.05.
        p_best: Option<f64>,
    },
}

/// An algorithm termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max iterations. Default is 100.
    pub max_iterations: Option<usize>,
    /// Max time in seconds. Default is no limit.
    pub max_time: Option<usize>,
    /// Convergence tracking.
    pub convergence: Option<ConvergenceTerminationConfig>,
}

/// A convergence termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvergenceTerminationConfig {
    /// Whether convergence tracking is enabled. Default is true.
    pub is_enabled: Option<bool>,
    /// Amount of iterations without improvement.
    pub iterations: Option<usize>,
}

/// An environment configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// A random seed. Default is random.
    pub seed: Option<u64>,
    /// Amount of threads used to build routes, zero means all CPUs. Default is rayon's global pool.
    pub threads: Option<usize>,
    /// How often iterations are logged. No logging if not set.
    pub log_best: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a colony config builder from config. Amount of agents defaults to amount of cities.
pub fn create_builder_from_config(config: &Config, size: usize) -> ColonyConfigBuilder {
    let builder = ColonyConfigBuilder::default().with_agent_count(size);

    let builder = configure_from_colony(builder, &config.colony);
    let builder = configure_from_termination(builder, &config.termination);

    configure_from_telemetry(builder, &config.environment)
}

/// Creates an environment from config. Quota is not set.
pub fn create_environment_from_config(config: &Config) -> Environment {
    let environment = Environment::default();
    let Some(env_config) = config.environment.as_ref() else {
        return environment;
    };

    let environment = Environment { seed: env_config.seed, ..environment };

    match env_config.threads {
        Some(threads) => environment.with_threads(threads),
        None => environment,
    }
}

fn configure_from_colony(
    mut builder: ColonyConfigBuilder,
    colony_config: &Option<ColonyParamsConfig>,
) -> ColonyConfigBuilder {
    if let Some(config) = colony_config {
        if let Some(alpha) = config.alpha {
            builder = builder.with_alpha(alpha);
        }
        if let Some(beta) = config.beta {
            builder = builder.with_beta(beta);
        }
        if let Some(rho) = config.rho {
            builder = builder.with_rho(rho);
        }
        if let Some(init_pheromone) = config.init_pheromone {
            builder = builder.with_init_pheromone(init_pheromone);
        }
        if let Some(pheromone_q) = config.pheromone_q {
            builder = builder.with_pheromone_q(pheromone_q);
        }
        if let Some(agents) = config.agents {
            builder = builder.with_agent_count(agents);
        }
        if let Some(variant) = &config.variant {
            builder = builder.with_variant(create_variant(variant));
        }
    }

    builder
}

fn configure_from_termination(
    mut builder: ColonyConfigBuilder,
    termination_config: &Option<TerminationConfig>,
) -> ColonyConfigBuilder {
    if let Some(config) = termination_config {
        if let Some(max_iterations) = config.max_iterations {
            builder = builder.with_max_iterations(max_iterations);
        }

        if let Some(convergence) = &config.convergence {
            builder = builder.with_convergence(convergence.is_enabled.unwrap_or(true), convergence.iterations);
        }
    }

    builder
}

fn configure_from_telemetry(
    builder: ColonyConfigBuilder,
    env_config: &Option<EnvironmentConfig>,
) -> ColonyConfigBuilder {
    match env_config.as_ref().and_then(|config| config.log_best) {
        Some(log_best) => builder.with_telemetry(TelemetryMode::OnlyLogging { log_best }),
        None => builder,
    }
}

fn create_variant(variant: &VariantType) -> Variant {
    match variant {
        VariantType::Plain => Variant::Plain,
        VariantType::Elitist => Variant::Elitist,
        VariantType::MaxMin { p_best } => Variant::MaxMin { p_best: p_best.unwrap_or(DEFAULT_P_BEST) },
    }
}

/// Parses variant name as used in command line arguments.
pub fn parse_variant(name: &str) -> Result<VariantType, String> {
    match name {
        "plain" => Ok(VariantType::Plain),
        "elitist" => Ok(VariantType::Elitist),
        "max-min" => Ok(VariantType::MaxMin { p_best: None }),
        _ => Err(format!("unknown variant: '{name}'")),
    }
}
