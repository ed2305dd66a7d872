#[cfg(test)]
#[path = "../../tests/unit/pheromone/update_test.rs"]
mod update_test;

use crate::models::Population;
use crate::pheromone::PheromoneField;

/// Specifies an ant colony variant: it defines which agents reinforce the pheromone field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Variant {
    /// A classical Ant System: every agent deposits pheromone on its own tour.
    Plain,
    /// Only agents with the best tour length in the iteration deposit pheromone.
    Elitist,
    /// Only the best tour of the iteration deposits, then the field is bounded.
    MaxMin {
        /// Controls how sharp convergence is: the probability to build the best tour again
        /// once the field has converged. Should be in `(0, 1)`.
        p_best: f64,
    },
}

impl Variant {
    /// Returns a variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Elitist => "elitist",
            Self::MaxMin { .. } => "max-min",
        }
    }
}

/// An update policy of the pheromone field. It holds only coefficients used by the specific variant.
/// Every policy evaporates the field once before deposition.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdatePolicy {
    /// Every agent deposits `q / length` on each edge of its tour.
    Plain {
        /// Evaporation rate.
        rho: f64,
        /// Deposition numerator.
        q: f64,
    },
    /// Agents at the best rank deposit `q / length` on each edge of their tours.
    Elitist {
        /// Evaporation rate.
        rho: f64,
        /// Deposition numerator.
        q: f64,
    },
    /// The best agent deposits `q / length`, then each entry is clamped into computed bounds.
    MaxMin {
        /// Evaporation rate.
        rho: f64,
        /// Deposition numerator.
        q: f64,
        /// Convergence sharpness.
        p_best: f64,
    },
}

impl UpdatePolicy {
    /// Creates an update policy for the given variant.
    pub fn new(variant: Variant, rho: f64, q: f64) -> Self {
        match variant {
            Variant::Plain => Self::Plain { rho, q },
            Variant::Elitist => Self::Elitist { rho, q },
            Variant::MaxMin { p_best } => Self::MaxMin { rho, q, p_best },
        }
    }

    /// Evaporates the field and applies variant specific reinforcement using closed agents of
    /// the population.
    pub fn apply_update(&self, field: &mut PheromoneField, population: &Population) {
        match self {
            Self::Plain { rho, q } => {
                field.evaporate(*rho);
                population.agents().iter().for_each(|agent| {
                    if let Some(length) = agent.length() {
                        deposit_tour(field, agent.edges(), *q, length);
                    }
                });
            }
            Self::Elitist { rho, q } => {
                field.evaporate(*rho);
                if let Some(elite) = population.ranking().first() {
                    let agents = population.agents();
                    elite.iter().map(|&idx| &agents[idx]).for_each(|agent| {
                        if let Some(length) = agent.length() {
                            deposit_tour(field, agent.edges(), *q, length);
                        }
                    });
                }
            }
            Self::MaxMin { rho, q, p_best } => {
                field.evaporate(*rho);
                if let Some(best_length) = population.best_length() {
                    deposit_tour(field, population.best_edges().into_iter(), *q, best_length);

                    let (tau_min, tau_max) = get_max_min_bounds(*rho, best_length, field.size(), *p_best);
                    field.clamp(tau_min, tau_max);
                }
            }
        }
    }
}

/// Returns `(tau_min, tau_max)` bounds used by Max-Min variant:
///
/// - `tau_max = 1 / ((1 - rho) * best_length)`
/// - `tau_min = tau_max * (1 - p_best^(1/n)) / ((n/2 - 1) * p_best^(1/n))`
///
/// When the denominator of `tau_min` is not positive (less than three cities), the lower bound is
/// zero. The lower bound never exceeds the upper one.
pub fn get_max_min_bounds(rho: f64, best_length: f64, size: usize, p_best: f64) -> (f64, f64) {
    let tau_max = 1. / ((1. - rho) * best_length);

    let root = p_best.powf(1. / size as f64);
    let denominator = (size as f64 / 2. - 1.) * root;
    let tau_min = if denominator > 0. { tau_max * (1. - root) / denominator } else { 0. };

    (tau_min.min(tau_max), tau_max)
}

fn deposit_tour<I>(field: &mut PheromoneField, edges: I, q: f64, length: f64)
where
    I: Iterator<Item = (usize, usize)>,
{
    // NOTE a single city tour has zero length and no edges
    if length <= 0. {
        return;
    }

    let amount = q / length;
    edges.for_each(|(from, to)| field.deposit(from, to, amount));
}
