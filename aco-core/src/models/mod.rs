//! Contains the problem model and per iteration state of agents.

mod agent;
pub use self::agent::Agent;

mod distance;
pub use self::distance::*;

mod population;
pub use self::population::Population;
