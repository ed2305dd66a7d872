//! A crate with extensions used by the command line interface of the ant colony TSP solver:
//!
//! - **TSPLIB reader** which reads a problem with `EUC_2D` coordinates into a distance matrix
//! - **CSV score writer** which persists tour lengths of each iteration
//! - **JSON configuration** of the colony, termination criteria and environment
//! - **interruption quota** which stops the run gracefully on `Ctrl-C` or time limit
//!
//! # Examples
//!
//! ```
//! # use std::io::BufReader;
//! use aco_cli::extensions::tsplib::TsplibProblem;
//! use aco_cli::extensions::solve::config::{create_builder_from_config, Config};
//! use aco_core::prelude::*;
//!
//! let problem = "NAME : square\nDIMENSION : 4\nEDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n\
//!     1 0 0\n2 0 1\n3 1 1\n4 1 0\nEOF\n";
//! let matrix = BufReader::new(problem.as_bytes()).read_tsplib()?;
//!
//! let config = create_builder_from_config(&Config::default(), matrix.len()).with_max_iterations(5).build()?;
//! let environment = Environment::new_with_seed(0).with_logger(Environment::silent_logger());
//!
//! let summary = ColonyEngine::new(matrix, config, environment)?.run(&mut Vec::<Vec<f64>>::new())?;
//! assert_eq!(summary.global_best, 4.);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub use aco_core as core;

pub mod extensions;
