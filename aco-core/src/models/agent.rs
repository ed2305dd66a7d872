#[cfg(test)]
#[path = "../../tests/unit/models/agent_test.rs"]
mod agent_test;

use crate::models::DistanceModel;

/// Represents a single simulated ant which constructs one candidate tour per iteration.
#[derive(Clone, Debug)]
pub struct Agent {
    route: Vec<usize>,
    visited: Vec<bool>,
    length: Option<f64>,
}

impl Agent {
    /// Creates a new agent for a problem with `size` cities.
    pub fn new(size: usize) -> Self {
        Self { route: Vec::with_capacity(size), visited: vec![false; size], length: None }
    }

    /// Resets the agent to an empty route.
    pub fn reset(&mut self) {
        self.route.clear();
        self.visited.iter_mut().for_each(|visited| *visited = false);
        self.length = None;
    }

    /// Appends the city to the route.
    pub fn visit(&mut self, city: usize) {
        debug_assert!(!self.visited[city], "city {city} is already visited");

        self.visited[city] = true;
        self.route.push(city);
        self.length = None;
    }

    /// Checks whether the city is already in the route.
    pub fn is_visited(&self, city: usize) -> bool {
        self.visited[city]
    }

    /// Returns the last visited city.
    pub fn current_city(&self) -> Option<usize> {
        self.route.last().copied()
    }

    /// Returns true when all cities are visited.
    pub fn is_complete(&self) -> bool {
        self.route.len() == self.visited.len()
    }

    /// Calculates the closed tour length. The route is expected to be complete.
    pub fn close(&mut self, distances: &DistanceModel) {
        debug_assert!(self.is_complete());
        self.length = Some(distances.tour_length(self.route.as_slice()));
    }

    /// Returns a tour length, which is known only when the agent is closed.
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Returns visited cities in visit order.
    pub fn route(&self) -> &[usize] {
        self.route.as_slice()
    }

    /// Returns edges of the closed tour including the one from the last city back to the first.
    /// A tour with less than two cities has no edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        get_tour_edges(self.route.as_slice())
    }
}

/// Returns edges of the closed tour defined by the route.
pub(crate) fn get_tour_edges(route: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let take = if route.len() < 2 { 0 } else { route.len() };

    route.iter().zip(route.iter().cycle().skip(1)).take(take).map(|(&from, &to)| (from, to))
}
