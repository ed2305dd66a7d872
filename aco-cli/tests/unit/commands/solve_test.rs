use super::*;
use std::io::{BufRead, Read};

const SQUARE_PROBLEM_PATH: &str = "tests/data/square5.tsp";
const FULL_CONFIG_PATH: &str = "tests/data/config.full.json";

fn get_solve_matches(args: &[&str]) -> ArgMatches {
    let args = std::iter::once("solve").chain(args.iter().cloned()).collect::<Vec<_>>();
    get_solve_app().try_get_matches_from(args).unwrap()
}

fn run_solve_with_output(matches: &ArgMatches) -> Result<String, String> {
    let out_file = tempfile::NamedTempFile::new().unwrap();

    run_solve(matches, BufWriter::new(Box::new(out_file.reopen().unwrap())))?;

    let mut output = String::new();
    out_file.reopen().unwrap().read_to_string(&mut output).unwrap();

    Ok(output)
}

#[test]
fn can_require_problem_argument() {
    let result = get_solve_app().try_get_matches_from(vec!["solve", "--seed", "1"]);

    assert!(result.is_err());
}

#[test]
fn can_reject_unknown_variant_argument() {
    let result = get_solve_app().try_get_matches_from(vec!["solve", SQUARE_PROBLEM_PATH, "--variant", "rank"]);

    assert!(result.is_err());
}

#[test]
fn can_solve_problem_and_write_scores() {
    let out_result = tempfile::NamedTempFile::new().unwrap();
    let out_result_path = out_result.path().to_string_lossy().to_string();
    let matches = get_solve_matches(&[
        SQUARE_PROBLEM_PATH,
        "--max-iterations",
        "5",
        "--seed",
        "1",
        "--agents",
        "5",
        "--out-result",
        out_result_path.as_str(),
    ]);

    let output = run_solve_with_output(&matches).unwrap();

    let rows =
        std::io::BufReader::new(out_result.reopen().unwrap()).lines().map(|line| line.unwrap()).collect::<Vec<_>>();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.split(',').count() == 5));
    assert!(output.starts_with("best tour length: "));
    assert!(output.contains("iterations: 5, termination: max iterations"));
}

#[test]
fn can_produce_same_summary_with_same_seed() {
    let matches = get_solve_matches(&[SQUARE_PROBLEM_PATH, "-n", "10", "--seed", "7", "--variant", "max-min"]);

    let first = run_solve_with_output(&matches).unwrap();
    let second = run_solve_with_output(&matches).unwrap();

    assert_eq!(first, second);
}

#[test]
fn can_stop_on_convergence() {
    let matches = get_solve_matches(&[SQUARE_PROBLEM_PATH, "-n", "1000", "--convergence", "3", "--seed", "3"]);

    let output = run_solve_with_output(&matches).unwrap();

    assert!(output.contains("termination: converged"));
}

#[test]
fn can_use_config_file_with_overrides() {
    let matches =
        get_solve_matches(&[SQUARE_PROBLEM_PATH, "--config", FULL_CONFIG_PATH, "-n", "3", "--convergence", "100"]);

    let output = run_solve_with_output(&matches).unwrap();

    assert!(output.contains("iterations: 3, termination: max iterations"));
}

parameterized_test! {can_reject_invalid_arguments, (args, expected), {
    can_reject_invalid_arguments_impl(args, expected);
}}

can_reject_invalid_arguments! {
    case01_bad_integer: (&[SQUARE_PROBLEM_PATH, "--agents", "many"], "cannot get integer value"),
    case02_float_time: (&[SQUARE_PROBLEM_PATH, "--max-time", "1.5"], "cannot get integer value"),
    case03_missing_problem: (&["tests/data/unknown.tsp"], "cannot open problem file"),
    case04_missing_config: (&[SQUARE_PROBLEM_PATH, "-c", "tests/data/unknown.json"], "cannot open config file"),
    case05_zero_iterations: (&[SQUARE_PROBLEM_PATH, "-n", "0"], "cannot configure colony"),
    case06_bad_problem: (&[FULL_CONFIG_PATH], "cannot read problem from"),
}

fn can_reject_invalid_arguments_impl(args: &[&str], expected: &str) {
    let matches = get_solve_matches(args);

    let result = run_solve_with_output(&matches);

    assert!(result.unwrap_err().contains(expected));
}

#[test]
fn can_override_config_with_arguments() {
    let mut config = Config::default();
    let matches =
        get_solve_matches(&[SQUARE_PROBLEM_PATH, "-a", "3", "-v", "elitist", "-t", "10", "--seed", "5", "--log"]);

    override_config(&mut config, &matches).unwrap();

    let colony = config.colony.unwrap();
    assert_eq!(colony.agents, Some(3));
    assert!(matches!(colony.variant, Some(VariantType::Elitist)));
    assert_eq!(config.termination.unwrap().max_time, Some(10));
    let environment = config.environment.unwrap();
    assert_eq!(environment.seed, Some(5));
    assert_eq!(environment.log_best, Some(DEFAULT_LOG_BEST));
}

#[test]
fn can_keep_config_p_best_for_max_min_argument() {
    let mut config = Config {
        colony: Some(ColonyParamsConfig {
            variant: Some(VariantType::MaxMin { p_best: Some(0.2) }),
            ..ColonyParamsConfig::default()
        }),
        ..Config::default()
    };
    let matches = get_solve_matches(&[SQUARE_PROBLEM_PATH, "--variant", "max-min"]);

    override_config(&mut config, &matches).unwrap();

    let variant = config.colony.and_then(|colony| colony.variant);
    assert!(matches!(variant, Some(VariantType::MaxMin { p_best: Some(p_best) }) if p_best == 0.2));
}

#[test]
fn can_leave_config_untouched_without_arguments() {
    let mut config = Config::default();
    let matches = get_solve_matches(&[SQUARE_PROBLEM_PATH]);

    override_config(&mut config, &matches).unwrap();

    assert!(config.colony.is_none());
    assert!(config.termination.is_none());
    assert!(config.environment.is_none());
}
