#[cfg(test)]
#[path = "../../tests/unit/pheromone/field_test.rs"]
mod field_test;

use crate::utils::{ColonyError, ColonyResult};

/// A symmetric matrix of pheromone intensity for each pair of cities.
/// Every mutation is applied to both `[i][j]` and `[j][i]` entries.
#[derive(Clone, Debug)]
pub struct PheromoneField {
    size: usize,
    values: Vec<f64>,
}

impl PheromoneField {
    /// Creates a new field with all entries set to `initial` value.
    pub fn new(size: usize, initial: f64) -> ColonyResult<Self> {
        if !initial.is_finite() || initial <= 0. {
            return Err(ColonyError::configuration(format!("initial pheromone should be positive, got: '{initial}'")));
        }

        Ok(Self { size, values: vec![initial; size * size] })
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns pheromone intensity between two cities.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Returns all entries in row-major order.
    pub fn values(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Multiplies every entry by `(1 - rho)`.
    pub fn evaporate(&mut self, rho: f64) {
        let factor = 1. - rho;
        self.values.iter_mut().for_each(|value| *value *= factor);
    }

    /// Adds `amount` to the edge in both directions.
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.values[from * self.size + to] += amount;
        if from != to {
            self.values[to * self.size + from] += amount;
        }
    }

    /// Puts every entry into `[min, max]` range.
    pub fn clamp(&mut self, min: f64, max: f64) {
        debug_assert!(min <= max);
        self.values.iter_mut().for_each(|value| *value = value.clamp(min, max));
    }
}
