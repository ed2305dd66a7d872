//! A command line interface to *Ant Colony Optimization* solver of symmetric traveling salesman problem.
//!

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../../aco-core/tests/helpers/macros.rs"]
#[macro_use]
mod macros;

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use crate::commands::create_write_buffer;
use crate::commands::solve::{get_solve_app, run_solve};
use clap::{ArgMatches, Command};
use std::process;

fn get_app() -> Command {
    Command::new("Ant Colony TSP Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("A command line interface to ant colony solver of symmetric traveling salesman problem")
        .subcommand(get_solve_app())
}

fn run_subcommand(arg_matches: ArgMatches) -> Result<(), String> {
    match arg_matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer()),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    }
}

fn main() {
    if let Err(err) = run_subcommand(get_app().get_matches()) {
        eprintln!("{err}");
        process::exit(1);
    }
}
