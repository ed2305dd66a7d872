//! Contains the pheromone field and the policies used to update it after each iteration.

mod field;
pub use self::field::PheromoneField;

mod update;
pub use self::update::*;
