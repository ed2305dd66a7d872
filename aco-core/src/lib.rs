//! This crate contains an ant colony optimization engine which builds approximate solutions of the
//! symmetric ***Traveling Salesman Problem***.
//!
//! A population of agents (ants) repeatedly constructs closed tours. Every construction step is
//! biased by a shared pheromone field and by a static heuristic derived from inverse distances.
//! After each iteration the field evaporates and gets reinforced on good tours, using one of the
//! following update policies:
//!
//! - **plain**: a classical Ant System where every agent deposits pheromone
//! - **elitist**: only agents with the best tour length in the iteration deposit
//! - **max-min**: only the best tour deposits and the field is kept within computed bounds
//!
//! # Examples
//!
//! ```
//! use aco_core::prelude::*;
//!
//! let coordinates = vec![(0., 0.), (0., 1.), (1., 1.), (1., 0.), (2., 2.)];
//! let distances = create_euclidean_matrix(coordinates.as_slice());
//!
//! let config = ColonyConfigBuilder::default()
//!     .with_agent_count(5)
//!     .with_max_iterations(10)
//!     .build()
//!     .expect("valid configuration");
//! let environment = Environment::new_with_seed(42).with_logger(Environment::silent_logger());
//!
//! let mut engine = ColonyEngine::new(distances, config, environment).expect("valid engine");
//! let mut scores = Vec::<Vec<f64>>::new();
//! let summary = engine.run(&mut scores).expect("successful run");
//!
//! assert_eq!(scores.len(), 10);
//! assert_eq!(summary.best_route.len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub mod construction;
pub mod models;
pub mod pheromone;
pub mod prelude;
pub mod solver;
pub mod utils;
