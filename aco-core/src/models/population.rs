#[cfg(test)]
#[path = "../../tests/unit/models/population_test.rs"]
mod population_test;

use crate::models::agent::get_tour_edges;
use crate::models::Agent;
use crate::utils::{compare_floats, compare_floats_refs};

/// An indexed collection of agents used within one iteration.
#[derive(Clone, Debug)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Creates a new population of `agent_count` agents for a problem with `size` cities.
    pub fn new(agent_count: usize, size: usize) -> Self {
        Self { agents: (0..agent_count).map(|_| Agent::new(size)).collect() }
    }

    /// Resets all agents to empty routes.
    pub fn reset(&mut self) {
        self.agents.iter_mut().for_each(|agent| agent.reset());
    }

    /// Returns amount of agents.
    pub fn size(&self) -> usize {
        self.agents.len()
    }

    /// Returns all agents.
    pub fn agents(&self) -> &[Agent] {
        self.agents.as_slice()
    }

    /// Returns all agents as mutable slice.
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        self.agents.as_mut_slice()
    }

    /// Returns tour lengths in agent order. Agents which are not closed yet have NaN length.
    pub fn lengths(&self) -> Vec<f64> {
        self.agents.iter().map(|agent| agent.length().unwrap_or(f64::NAN)).collect()
    }

    /// Returns index of the agent with the shortest tour and the agent itself.
    /// When several agents share the same length, the first one in agent order is returned.
    pub fn best(&self) -> Option<(usize, &Agent)> {
        self.agents
            .iter()
            .enumerate()
            .filter_map(|(idx, agent)| agent.length().map(|length| (idx, agent, length)))
            .min_by(|(_, _, a), (_, _, b)| compare_floats_refs(a, b))
            .map(|(idx, agent, _)| (idx, agent))
    }

    /// Returns the shortest tour length in the population.
    pub fn best_length(&self) -> Option<f64> {
        self.best().and_then(|(_, agent)| agent.length())
    }

    /// Returns the shortest tour in the population.
    pub fn best_route(&self) -> Option<&[usize]> {
        self.best().map(|(_, agent)| agent.route())
    }

    /// Returns edges of the shortest tour in the population.
    pub fn best_edges(&self) -> Vec<(usize, usize)> {
        self.best_route().map(|route| get_tour_edges(route).collect()).unwrap_or_default()
    }

    /// Ranks closed agents by ascending tour length. Each group contains indices of agents which
    /// share the same length, the first group is the best rank.
    pub fn ranking(&self) -> Vec<Vec<usize>> {
        let mut ordered = self
            .agents
            .iter()
            .enumerate()
            .filter_map(|(idx, agent)| agent.length().map(|length| (idx, length)))
            .collect::<Vec<_>>();

        ordered.sort_by(|(_, a), (_, b)| compare_floats(*a, *b));

        ordered.into_iter().fold(Vec::<(f64, Vec<usize>)>::new(), |mut groups, (idx, length)| {
            match groups.last_mut() {
                Some((group_length, indices)) if *group_length == length => indices.push(idx),
                _ => groups.push((length, vec![idx])),
            }

            groups
        })
        .into_iter()
        .map(|(_, indices)| indices)
        .collect()
    }
}
