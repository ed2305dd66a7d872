#[cfg(test)]
#[path = "../../tests/unit/construction/route_builder_test.rs"]
mod route_builder_test;

use crate::models::{Agent, DistanceModel};
use crate::pheromone::PheromoneField;
use crate::utils::RandomGen;
use rand::Rng;

/// Specifies what to do when all remaining candidate cities have zero desirability. This can
/// happen when pheromone or heuristic values underflow to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Selects the next city uniformly among unvisited ones.
    #[default]
    UniformFallback,
    /// Stops route construction with an error.
    Abort,
}

/// Signals that route construction was stopped because no candidate has positive desirability
/// or desirability is undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegenerateSelection;

/// Keeps read-only data shared by all agents while they build their routes within one iteration.
pub struct RouteContext<'a> {
    /// Distances and heuristic desirability.
    pub distances: &'a DistanceModel,
    /// Pheromone field snapshot.
    pub pheromone: &'a PheromoneField,
    /// Pheromone influence exponent.
    pub alpha: f64,
    /// A degenerate selection policy.
    pub degenerate: DegeneratePolicy,
}

/// Grows the route of the empty `agent` until it visits all cities. The tour is closed implicitly:
/// the last city connects back to the first one. Returns how many times the uniform fallback was used.
pub fn build_route(
    route_ctx: &RouteContext<'_>,
    agent: &mut Agent,
    random: &mut RandomGen,
) -> Result<usize, DegenerateSelection> {
    debug_assert!(agent.route().is_empty());

    let size = route_ctx.distances.size();
    let mut scores = vec![0.; size];
    let mut fallbacks = 0;

    agent.visit(random.gen_range(0..size));

    while let Some(current) = agent.current_city().filter(|_| !agent.is_complete()) {
        scores.iter_mut().enumerate().for_each(|(city, score)| {
            *score = if agent.is_visited(city) { 0. } else { get_desirability(route_ctx, city, current) };
        });

        let next = match select_by_roulette(scores.as_slice(), random.gen::<f64>()) {
            Some(city) => city,
            None => match route_ctx.degenerate {
                DegeneratePolicy::UniformFallback => {
                    fallbacks += 1;
                    select_uniform(agent, size, random)
                }
                DegeneratePolicy::Abort => return Err(DegenerateSelection),
            },
        };

        agent.visit(next);
    }

    Ok(fallbacks)
}

/// Selects a city using roulette wheel: candidates are walked in index order and the first one
/// whose normalized cumulative score exceeds `threshold` is returned. Zero scores are skipped.
///
/// An infinite score dominates all finite ones, so the first such candidate is returned. When only
/// the total overflows, scores are scaled by the maximum one. Returns `None` when all scores are
/// zero or any of them is NaN.
pub fn select_by_roulette(scores: &[f64], threshold: f64) -> Option<usize> {
    if scores.iter().any(|score| score.is_nan()) {
        return None;
    }

    if let Some(city) = scores.iter().position(|&score| score == f64::INFINITY) {
        return Some(city);
    }

    let total = scores.iter().sum::<f64>();
    if total.is_infinite() {
        let max = scores.iter().cloned().fold(0., f64::max);
        let scaled = scores.iter().map(|score| score / max).collect::<Vec<_>>();

        return select_by_roulette(scaled.as_slice(), threshold);
    }

    if total <= 0. {
        return None;
    }

    let mut cumulative = 0.;
    let mut last = None;

    for (city, &score) in scores.iter().enumerate().filter(|&(_, &score)| score > 0.) {
        cumulative += score;
        last = Some(city);

        if cumulative / total > threshold {
            return Some(city);
        }
    }

    last
}

fn get_desirability(route_ctx: &RouteContext<'_>, city: usize, current: usize) -> f64 {
    route_ctx.pheromone.get(city, current).powf(route_ctx.alpha) * route_ctx.distances.heuristic(city, current)
}

fn select_uniform(agent: &Agent, size: usize, random: &mut RandomGen) -> usize {
    let candidates = (0..size).filter(|&city| !agent.is_visited(city)).collect::<Vec<_>>();

    candidates[random.gen_range(0..candidates.len())]
}
