#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use aco_cli::core::prelude::*;
use aco_cli::extensions::solve::config::*;
use aco_cli::extensions::solve::interruption::create_interruption_quota;
use aco_cli::extensions::solve::writer::CsvScoreWriter;
use aco_cli::extensions::tsplib::TsplibProblem;
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CONFIG_ARG_NAME: &str = "config";
const AGENTS_ARG_NAME: &str = "agents";
const VARIANT_ARG_NAME: &str = "variant";
const ITERATIONS_ARG_NAME: &str = "max-iterations";
const CONVERGENCE_ARG_NAME: &str = "convergence";
const TIME_ARG_NAME: &str = "max-time";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves symmetric traveling salesman problem using ant colony optimization")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file in TSPLIB format").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(AGENTS_ARG_NAME)
                .help("Specifies amount of agents, default is amount of cities")
                .short('a')
                .long(AGENTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(VARIANT_ARG_NAME)
                .help("Specifies ant colony variant")
                .short('v')
                .long(VARIANT_ARG_NAME)
                .required(false)
                .value_parser(["plain", "elitist", "max-min"]),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies maximum number of iterations")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONVERGENCE_ARG_NAME)
                .help("Specifies amount of iterations without improvement to stop the search")
                .long(CONVERGENCE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for tour lengths of each iteration in csv format")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver command and writes run summary into `out_buffer`.
pub fn run_solve(matches: &ArgMatches, out_buffer: BufWriter<Box<dyn Write>>) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;

    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };
    override_config(&mut config, matches)?;

    let matrix = BufReader::new(open_file(problem_path, "problem")?)
        .read_tsplib()
        .map_err(|err| format!("cannot read problem from '{problem_path}': '{err}'"))?;

    let colony_config = create_builder_from_config(&config, matrix.len())
        .build()
        .map_err(|err| format!("cannot configure colony: '{err}'"))?;

    let max_time = config.termination.as_ref().and_then(|termination| termination.max_time);
    let environment = create_environment_from_config(&config).with_quota(create_interruption_quota(max_time));

    let mut engine = ColonyEngine::new(matrix, colony_config, environment)
        .map_err(|err| format!("cannot create colony: '{err}'"))?;

    let summary = match matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        Some(path) => {
            let mut writer = CsvScoreWriter::new(BufWriter::new(create_file(path, "out result")?));
            engine.run(&mut writer)
        }
        None => engine.run(&mut SkipScoreWriter),
    }
    .map_err(|err| format!("cannot solve problem: '{err}'"))?;

    write_summary(out_buffer, &summary)
}

/// Applies command line arguments on top of the config file.
fn override_config(config: &mut Config, matches: &ArgMatches) -> Result<(), String> {
    let agents = parse_int_value::<usize>(matches, AGENTS_ARG_NAME, "agents")?;
    let variant = matches.get_one::<String>(VARIANT_ARG_NAME).map(|name| parse_variant(name)).transpose()?;
    let max_iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")?;
    let convergence = parse_int_value::<usize>(matches, CONVERGENCE_ARG_NAME, "convergence iterations")?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);

    if agents.is_some() || variant.is_some() {
        let colony = config.colony.get_or_insert_with(Default::default);
        colony.agents = agents.or(colony.agents);
        colony.variant = match (variant, colony.variant.take()) {
            // NOTE keep p_best from config file
            (Some(VariantType::MaxMin { .. }), Some(VariantType::MaxMin { p_best })) => {
                Some(VariantType::MaxMin { p_best })
            }
            (Some(variant), _) => Some(variant),
            (None, variant) => variant,
        };
    }

    if max_iterations.is_some() || convergence.is_some() || max_time.is_some() {
        let termination = config.termination.get_or_insert_with(Default::default);
        termination.max_iterations = max_iterations.or(termination.max_iterations);
        termination.max_time = max_time.or(termination.max_time);

        if let Some(iterations) = convergence {
            termination.convergence =
                Some(ConvergenceTerminationConfig { is_enabled: Some(true), iterations: Some(iterations) });
        }
    }

    if seed.is_some() || is_logging {
        let environment = config.environment.get_or_insert_with(Default::default);
        environment.seed = seed.or(environment.seed);

        if is_logging {
            environment.log_best = environment.log_best.or(Some(DEFAULT_LOG_BEST));
        }
    }

    Ok(())
}

fn write_summary(mut writer: BufWriter<Box<dyn Write>>, summary: &RunSummary) -> Result<(), String> {
    let route = summary.best_route.iter().map(|city| city.to_string()).collect::<Vec<_>>().join(" ");

    writeln!(writer, "best tour length: {:.3}", summary.global_best)
        .and_then(|_| writeln!(writer, "best tour: {route}"))
        .and_then(|_| {
            writeln!(writer, "iterations: {}, termination: {}", summary.iterations, summary.termination.name())
        })
        .and_then(|_| writer.flush())
        .map_err(|err| format!("cannot write summary: '{err}'"))
}

/// Discards tour lengths when no output file is specified.
struct SkipScoreWriter;

impl ScoreWriter for SkipScoreWriter {
    fn write(&mut self, _: &[f64]) -> GenericResult<()> {
        Ok(())
    }

    fn flush(&mut self) -> GenericResult<()> {
        Ok(())
    }
}
