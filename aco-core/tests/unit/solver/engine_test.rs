use super::*;
use crate::construction::DegeneratePolicy;
use crate::helpers::models::*;
use crate::helpers::solver::*;
use crate::pheromone::{get_max_min_bounds, Variant};
use std::sync::Arc;

const VARIANTS: [Variant; 3] = [Variant::Plain, Variant::Elitist, Variant::MaxMin { p_best: 0.05 }];

#[derive(Default)]
struct RecordingWriter {
    rows: Vec<Vec<f64>>,
    flushes: usize,
    fail_on_write: bool,
}

impl ScoreWriter for RecordingWriter {
    fn write(&mut self, lengths: &[f64]) -> GenericResult<()> {
        if self.fail_on_write {
            return Err("disk is full".into());
        }

        self.rows.push(lengths.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> GenericResult<()> {
        self.flushes += 1;
        Ok(())
    }
}

struct ReachedQuota;

impl Quota for ReachedQuota {
    fn is_reached(&self) -> bool {
        true
    }
}

fn create_engine(matrix: Vec<Vec<f64>>, config: ColonyConfig, seed: u64) -> ColonyEngine {
    ColonyEngine::new(matrix, config, create_test_environment(seed)).unwrap()
}

#[test]
fn can_run_single_iteration_on_five_cities() {
    let mut engine = create_engine(create_square_with_tail_matrix(), create_test_config(5, Variant::Plain, 1), 42);

    let report = engine.iterate().unwrap();

    assert_eq!(report.iteration, 0);
    assert_eq!(report.lengths.len(), 5);
    assert!(engine.population().agents().iter().all(|agent| is_permutation(agent.route(), 5)));
    assert_eq!(report.best_length, report.lengths.iter().cloned().fold(f64::INFINITY, f64::min));
    assert_eq!(report.global_best, report.best_length);
    assert!(report.is_improvement);
    assert!(is_symmetric(engine.pheromone()));
    assert!(engine.pheromone().values().iter().all(|&value| value >= 0.));
    assert_eq!(engine.state(), EngineState::Terminated(TerminationReason::MaxIterations));
    assert_eq!(engine.global_best(), Some(report.best_length));
    assert_eq!(engine.distances().tour_length(engine.best_route()), report.best_length);
}

parameterized_test! {can_find_only_tour_for_two_cities, variant, {
    can_find_only_tour_for_two_cities_impl(variant);
}}

can_find_only_tour_for_two_cities! {
    case01_plain: Variant::Plain,
    case02_elitist: Variant::Elitist,
    case03_max_min: Variant::MaxMin { p_best: 0.05 },
}

fn can_find_only_tour_for_two_cities_impl(variant: Variant) {
    let matrix = vec![vec![-1., 3.], vec![3., -1.]];
    let mut engine = create_engine(matrix, create_test_config(3, variant, 5), 0);
    let mut writer = RecordingWriter::default();

    let summary = engine.run(&mut writer).unwrap();

    assert_eq!(summary.global_best, 6.);
    assert_eq!(summary.iterations, 5);
    assert!(writer.rows.iter().flatten().all(|&length| length == 6.));
}

#[test]
fn can_run_single_city() {
    let mut engine = create_engine(vec![vec![-1.]], create_test_config(2, Variant::Plain, 3), 0);
    let mut writer: Vec<Vec<f64>> = vec![];

    let summary = engine.run(&mut writer).unwrap();

    assert_eq!(summary.global_best, 0.);
    assert_eq!(summary.best_route, vec![0]);
    assert_eq!(writer, vec![vec![0., 0.]; 3]);
}

#[test]
fn can_keep_field_invariants_for_all_variants() {
    VARIANTS.into_iter().for_each(|variant| {
        let mut engine = create_engine(create_line_matrix(8), create_test_config(6, variant, 20), 7);
        let mut previous_best = f64::INFINITY;

        while engine.state() == EngineState::Idle {
            let report = engine.iterate().unwrap();

            assert!(is_symmetric(engine.pheromone()));
            assert!(report.global_best <= previous_best);
            assert!(report.global_best <= report.best_length);
            previous_best = report.global_best;

            if let Variant::MaxMin { p_best } = variant {
                let (tau_min, tau_max) = get_max_min_bounds(0.5, report.best_length, 8, p_best);
                assert!(engine.pheromone().values().iter().all(|&value| value >= tau_min && value <= tau_max));
            }
        }

        assert_eq!(engine.iteration(), 20);
    });
}

#[test]
fn can_evaporate_untouched_edges() {
    let mut engine = create_engine(create_line_matrix(6), create_test_config(1, Variant::Elitist, 3), 3);
    let mut previous = engine.pheromone().clone();

    (0..3).for_each(|_| {
        engine.iterate().unwrap();

        let used = engine.population().best_edges();
        (0..6)
            .flat_map(|i| (0..6).map(move |j| (i, j)))
            .filter(|&(i, j)| !used.contains(&(i, j)) && !used.contains(&(j, i)))
            .for_each(|(i, j)| assert!(engine.pheromone().get(i, j) < previous.get(i, j)));

        previous = engine.pheromone().clone();
    });
}

#[test]
fn can_produce_same_results_with_same_seed() {
    let run = |environment: Environment| {
        let config = create_test_config(8, Variant::Plain, 10);
        let mut engine = ColonyEngine::new(create_line_matrix(10), config, environment).unwrap();
        let mut writer: Vec<Vec<f64>> = vec![];

        let summary = engine.run(&mut writer).unwrap();

        (writer, summary.best_route)
    };

    let first = run(create_test_environment(11));
    let second = run(create_test_environment(11));
    let parallel = run(create_test_environment(11).with_threads(2));

    assert_eq!(first, second);
    assert_eq!(first, parallel);
}

#[test]
fn can_terminate_on_convergence() {
    let config = ColonyConfigBuilder::default()
        .with_agent_count(4)
        .with_max_iterations(1000)
        .with_convergence(true, Some(2))
        .build()
        .unwrap();
    let mut engine = create_engine(create_line_matrix(4), config, 5);
    let mut writer: Vec<Vec<f64>> = vec![];

    let summary = engine.run(&mut writer).unwrap();

    assert_eq!(summary.termination, TerminationReason::Converged);
    assert!(summary.iterations < 1000);
    assert_eq!(writer.len(), summary.iterations);
    assert_eq!(summary.global_best, 6.);
}

#[test]
fn can_reject_convergence_without_iterations() {
    let mut config = create_test_config(4, Variant::Plain, 10);
    config.convergence = Some(ConvergenceConfig { is_enabled: true, iterations: None });

    let result = ColonyEngine::new(create_line_matrix(4), config, create_test_environment(0));

    assert!(matches!(result, Err(ColonyError::ConvergenceMisconfiguration)));
}

#[test]
fn can_reject_invalid_matrix() {
    let matrix = vec![vec![-1., 1.], vec![2., -1.]];

    let result = ColonyEngine::new(matrix, create_test_config(2, Variant::Plain, 1), create_test_environment(0));

    assert!(matches!(result, Err(ColonyError::Configuration(_))));
}

#[test]
fn can_abort_on_degenerate_selection() {
    let config = ColonyConfigBuilder::default()
        .with_agent_count(3)
        .with_beta(400.)
        .with_degenerate_policy(DegeneratePolicy::Abort)
        .build()
        .unwrap();
    let matrix = vec![vec![-1., 10., 10.], vec![10., -1., 10.], vec![10., 10., -1.]];
    let mut engine = create_engine(matrix, config, 0);
    let mut writer = RecordingWriter::default();

    let result = engine.run(&mut writer);

    assert!(matches!(result, Err(ColonyError::DegenerateSelection { iteration: 0, agent: 0 })));
    assert_eq!(engine.state(), EngineState::Failed);
    assert_eq!(writer.flushes, 1);
    assert!(writer.rows.is_empty());
    assert!(matches!(engine.iterate(), Err(ColonyError::Terminated)));
}

#[test]
fn can_count_uniform_fallbacks() {
    let config =
        ColonyConfigBuilder::default().with_agent_count(3).with_beta(400.).with_max_iterations(1).build().unwrap();
    let matrix = vec![vec![-1., 10., 10.], vec![10., -1., 10.], vec![10., 10., -1.]];
    let mut engine = create_engine(matrix, config, 0);

    let report = engine.iterate().unwrap();

    assert_eq!(report.fallbacks, 6);
    assert_eq!(report.lengths, vec![30.; 3]);
}

#[test]
fn can_interrupt_by_quota() {
    let environment = create_test_environment(0).with_quota(Arc::new(ReachedQuota));
    let config = create_test_config(2, Variant::Plain, 10);
    let mut engine = ColonyEngine::new(create_line_matrix(4), config, environment).unwrap();
    let mut writer = RecordingWriter::default();

    let summary = engine.run(&mut writer).unwrap();

    assert_eq!(summary.termination, TerminationReason::Interrupted);
    assert_eq!(summary.iterations, 0);
    assert_eq!(summary.global_best, f64::INFINITY);
    assert_eq!(engine.global_best(), None);
    assert_eq!(writer.flushes, 1);
    assert!(matches!(engine.iterate(), Err(ColonyError::Terminated)));
}

#[test]
fn can_propagate_writer_error() {
    let mut engine = create_engine(create_line_matrix(4), create_test_config(2, Variant::Plain, 10), 0);
    let mut writer = RecordingWriter { fail_on_write: true, ..RecordingWriter::default() };

    let result = engine.run(&mut writer);

    assert!(matches!(result, Err(ColonyError::Writer(err)) if err.to_string() == "disk is full"));
    assert_eq!(writer.flushes, 1);
    assert_eq!(engine.state(), EngineState::Failed);
    assert_eq!(engine.iteration(), 1);
}

#[test]
fn can_not_resume_run_after_writer_error() {
    let mut engine = create_engine(create_line_matrix(4), create_test_config(2, Variant::Plain, 10), 0);
    let mut failing_writer = RecordingWriter { fail_on_write: true, ..RecordingWriter::default() };
    assert!(engine.run(&mut failing_writer).is_err());

    let mut writer = RecordingWriter::default();
    let result = engine.run(&mut writer);

    assert!(matches!(result, Err(ColonyError::Terminated)));
    assert!(writer.rows.is_empty());
    assert_eq!(engine.iteration(), 1);
}

#[test]
fn can_return_metrics_when_tracked() {
    let config = ColonyConfigBuilder::default()
        .with_agent_count(2)
        .with_max_iterations(4)
        .with_telemetry(TelemetryMode::OnlyMetrics { track_best: 1 })
        .build()
        .unwrap();
    let mut engine = create_engine(create_line_matrix(5), config, 0);

    let summary = engine.run(&mut Vec::<Vec<f64>>::new()).unwrap();

    let metrics = summary.metrics.unwrap();
    assert_eq!(metrics.iterations, 4);
    assert_eq!(metrics.evolution.len(), 4);
    assert!(metrics.evolution.iter().any(|iteration| iteration.is_improvement));
}
