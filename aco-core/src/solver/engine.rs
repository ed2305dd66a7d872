#[cfg(test)]
#[path = "../../tests/unit/solver/engine_test.rs"]
mod engine_test;

use crate::construction::{build_route, RouteContext};
use crate::models::{DistanceModel, Population};
use crate::pheromone::{PheromoneField, UpdatePolicy};
use crate::solver::*;
use crate::utils::*;

/// Specifies a state of the colony engine. Each iteration walks through all intermediate
/// states and ends either in `Idle` or in `Terminated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Waiting for the next iteration.
    Idle,
    /// Agents construct their routes.
    BuildingRoutes,
    /// Agent tours are measured.
    Scoring,
    /// The pheromone field is evaporated and reinforced.
    UpdatingPheromone,
    /// The best known tour and convergence are evaluated.
    CheckingConvergence,
    /// The run is finished successfully.
    Terminated(TerminationReason),
    /// The run was aborted by an error.
    Failed,
}

/// Contains the outcome of a single iteration.
#[derive(Clone, Debug)]
pub struct IterationReport {
    /// Iteration index (zero based).
    pub iteration: usize,
    /// Tour lengths in agent order.
    pub lengths: Vec<f64>,
    /// The shortest tour length in the iteration.
    pub best_length: f64,
    /// The shortest tour length found so far.
    pub global_best: f64,
    /// True if the iteration improved the best known tour.
    pub is_improvement: bool,
    /// How many times degenerate selection was resolved by uniform fallback.
    pub fallbacks: usize,
}

/// Contains the outcome of the whole run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// The shortest tour length found.
    pub global_best: f64,
    /// The shortest tour found.
    pub best_route: Vec<usize>,
    /// Amount of completed iterations.
    pub iterations: usize,
    /// Why the run has stopped.
    pub termination: TerminationReason,
    /// Collected metrics, if telemetry mode tracks them.
    pub metrics: Option<TelemetryMetrics>,
}

/// Orchestrates colony iterations: route construction, scoring, pheromone update and
/// convergence detection.
pub struct ColonyEngine {
    config: ColonyConfig,
    environment: Environment,
    distances: DistanceModel,
    pheromone: PheromoneField,
    population: Population,
    policy: UpdatePolicy,
    tracker: ConvergenceTracker,
    telemetry: Telemetry,
    random: RandomGen,
    state: EngineState,
    iteration: usize,
    best_route: Vec<usize>,
}

impl ColonyEngine {
    /// Creates a new instance of `ColonyEngine`. Fails fast when the configuration or
    /// the distance matrix is invalid.
    pub fn new(matrix: Vec<Vec<f64>>, config: ColonyConfig, environment: Environment) -> ColonyResult<Self> {
        config.validate()?;

        let distances = DistanceModel::new(matrix, config.beta)?;
        let pheromone = PheromoneField::new(distances.size(), config.init_pheromone)?;
        let population = Population::new(config.agent_count, distances.size());
        let policy = UpdatePolicy::new(config.variant, config.rho, config.pheromone_q);
        let tracker = ConvergenceTracker::new(config.convergence_threshold());
        let telemetry = Telemetry::new(config.telemetry.clone(), environment.logger.clone());
        let random = create_random_gen(environment.seed);

        Ok(Self {
            config,
            environment,
            distances,
            pheromone,
            population,
            policy,
            tracker,
            telemetry,
            random,
            state: EngineState::Idle,
            iteration: 0,
            best_route: vec![],
        })
    }

    /// Runs iterations until the budget is exhausted, the colony converges or the quota is reached.
    /// Tour lengths of every completed iteration are passed to the `writer`, which is flushed
    /// once the run is over, even when the run has failed.
    pub fn run(&mut self, writer: &mut dyn ScoreWriter) -> ColonyResult<RunSummary> {
        self.telemetry.log(
            format!(
                "running {} colony: {} cities, {} agents, max iterations: {}",
                self.config.variant.name(),
                self.distances.size(),
                self.population.size(),
                self.config.max_iterations
            )
            .as_str(),
        );

        let result = self.run_iterations(writer);
        let flushed = writer.flush();

        let termination = result?;
        flushed?;

        let global_best = self.tracker.global_best();
        self.telemetry.on_result(termination, global_best);

        Ok(RunSummary {
            global_best,
            best_route: self.best_route.clone(),
            iterations: self.iteration,
            termination,
            metrics: self.telemetry.take_metrics(),
        })
    }

    /// Runs a single iteration. Fails if the engine is not idle.
    pub fn iterate(&mut self) -> ColonyResult<IterationReport> {
        if self.state != EngineState::Idle {
            return Err(ColonyError::Terminated);
        }

        let iteration_time = Timer::start();

        self.state = EngineState::BuildingRoutes;
        self.population.reset();
        let fallbacks = match self.build_routes() {
            Ok(fallbacks) => fallbacks,
            Err(err) => {
                self.state = EngineState::Failed;
                return Err(err);
            }
        };

        self.state = EngineState::Scoring;
        let distances = &self.distances;
        parallel_foreach_mut(self.population.agents_mut(), |agent| agent.close(distances));
        let lengths = self.population.lengths();
        let best_length = self.population.best_length().unwrap_or(f64::INFINITY);

        self.state = EngineState::UpdatingPheromone;
        self.policy.apply_update(&mut self.pheromone, &self.population);

        self.state = EngineState::CheckingConvergence;
        let is_improvement = self.tracker.track(best_length);
        if is_improvement {
            self.best_route = self.population.best_route().map(|route| route.to_vec()).unwrap_or_default();
        }

        let report = IterationReport {
            iteration: self.iteration,
            lengths,
            best_length,
            global_best: self.tracker.global_best(),
            is_improvement,
            fallbacks,
        };

        self.iteration += 1;
        self.state = if self.tracker.is_converged() {
            EngineState::Terminated(TerminationReason::Converged)
        } else if self.iteration >= self.config.max_iterations {
            EngineState::Terminated(TerminationReason::MaxIterations)
        } else {
            EngineState::Idle
        };

        self.telemetry.on_iteration(
            TelemetryIteration {
                number: report.iteration,
                timestamp: 0.,
                best_length,
                global_best: report.global_best,
                is_improvement,
                fallbacks,
            },
            iteration_time,
        );

        Ok(report)
    }

    /// Returns the best known tour length, `None` before the first iteration.
    pub fn global_best(&self) -> Option<f64> {
        (self.iteration > 0).then(|| self.tracker.global_best())
    }

    /// Returns the best known tour.
    pub fn best_route(&self) -> &[usize] {
        self.best_route.as_slice()
    }

    /// Returns current state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns amount of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns the pheromone field.
    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    /// Returns the population of the last iteration.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Returns the distance model.
    pub fn distances(&self) -> &DistanceModel {
        &self.distances
    }

    fn run_iterations(&mut self, writer: &mut dyn ScoreWriter) -> ColonyResult<TerminationReason> {
        loop {
            match self.state {
                EngineState::Terminated(reason) => return Ok(reason),
                EngineState::Idle if self.environment.is_quota_reached() => {
                    self.state = EngineState::Terminated(TerminationReason::Interrupted);
                }
                EngineState::Idle => {
                    let report = self.iterate()?;
                    if let Err(err) = writer.write(report.lengths.as_slice()) {
                        self.state = EngineState::Failed;
                        return Err(err.into());
                    }
                }
                _ => return Err(ColonyError::Terminated),
            }
        }
    }

    fn build_routes(&mut self) -> ColonyResult<usize> {
        let randoms = fork_random_gens(&mut self.random, self.population.size());
        let route_ctx = RouteContext {
            distances: &self.distances,
            pheromone: &self.pheromone,
            alpha: self.config.alpha,
            degenerate: self.config.degenerate,
        };

        let jobs = self.population.agents_mut().iter_mut().zip(randoms).enumerate().collect::<Vec<_>>();
        let build = || {
            parallel_into_collect(jobs, |(idx, (agent, mut random))| {
                build_route(&route_ctx, agent, &mut random).map_err(|_| idx)
            })
        };

        let results = match self.environment.thread_pool.as_ref() {
            Some(thread_pool) => thread_pool.execute(build),
            None => build(),
        };

        let iteration = self.iteration;
        results.into_iter().try_fold(0, |acc, result| match result {
            Ok(fallbacks) => Ok(acc + fallbacks),
            Err(agent) => Err(ColonyError::DegenerateSelection { iteration, agent }),
        })
    }
}
