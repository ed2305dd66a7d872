//! This module reimports commonly used types.

pub use crate::models::create_euclidean_matrix;
pub use crate::models::{Agent, DistanceModel, Population};

pub use crate::pheromone::{PheromoneField, UpdatePolicy, Variant};

pub use crate::construction::DegeneratePolicy;

pub use crate::solver::{ColonyConfig, ColonyConfigBuilder, ConvergenceConfig};
pub use crate::solver::{ColonyEngine, EngineState, IterationReport, RunSummary, TerminationReason};
pub use crate::solver::{ScoreWriter, TelemetryMetrics, TelemetryMode};

pub use crate::utils::{ColonyError, ColonyResult, GenericError, GenericResult};
pub use crate::utils::{Environment, InfoLogger, Quota, TimeQuota};
