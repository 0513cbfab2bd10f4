//! Breadth-first search over the state graph.

use super::action::Load;
use super::graph::StateGraph;
use super::rules::is_goal;
use super::types::Configuration;
use std::collections::VecDeque;
use tracing::{debug, instrument};

impl StateGraph {
    /// Configurations reachable from `from` through safe edges, in
    /// breadth-first order (including `from` itself when it is safe).
    #[instrument(skip(self))]
    pub fn reachable(&self, from: &Configuration) -> Vec<Configuration> {
        if !self.contains(from) {
            return Vec::new();
        }

        let mut seen = vec![false; Configuration::COUNT];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([*from]);
        seen[from.to_index()] = true;

        while let Some(config) = queue.pop_front() {
            order.push(config);
            for edge in self.edges_from(&config) {
                let index = edge.to.to_index();
                if !seen[index] {
                    seen[index] = true;
                    queue.push_back(edge.to);
                }
            }
        }

        order
    }

    /// Shortest load sequence from `from` to the goal.
    ///
    /// Returns `Some(vec![])` when `from` is already the goal and `None`
    /// when the goal cannot be reached without losing. Ties are broken by
    /// edge order, so the answer is deterministic.
    #[instrument(skip(self))]
    pub fn shortest_solution(&self, from: &Configuration) -> Option<Vec<Load>> {
        if !self.contains(from) {
            return None;
        }

        let mut parent: Vec<Option<(Configuration, Load)>> = vec![None; Configuration::COUNT];
        let mut seen = vec![false; Configuration::COUNT];
        let mut queue = VecDeque::from([*from]);
        seen[from.to_index()] = true;

        while let Some(config) = queue.pop_front() {
            if is_goal(&config) {
                let mut loads = Vec::new();
                let mut cursor = config;
                while let Some((previous, load)) = parent[cursor.to_index()] {
                    loads.push(load);
                    cursor = previous;
                }
                loads.reverse();
                debug!(length = loads.len(), "Solution found");
                return Some(loads);
            }

            for edge in self.edges_from(&config) {
                let index = edge.to.to_index();
                if !seen[index] {
                    seen[index] = true;
                    parent[index] = Some((config, edge.load));
                    queue.push_back(edge.to);
                }
            }
        }

        debug!("Goal unreachable");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bank;

    #[test]
    fn test_start_needs_eleven_crossings() {
        let graph = StateGraph::build();
        let solution = graph.shortest_solution(&Configuration::START).unwrap();
        assert_eq!(solution.len(), 11);
    }

    #[test]
    fn test_solution_replays_to_goal() {
        let graph = StateGraph::build();
        let solution = graph.shortest_solution(&Configuration::START).unwrap();
        let mut config = Configuration::START;
        for load in solution {
            config = graph.transition(&config, load).unwrap().to;
        }
        assert_eq!(config, Configuration::GOAL);
    }

    #[test]
    fn test_goal_needs_nothing() {
        let graph = StateGraph::build();
        assert_eq!(graph.shortest_solution(&Configuration::GOAL), Some(vec![]));
    }

    #[test]
    fn test_unsafe_start_has_no_solution() {
        let graph = StateGraph::build();
        let lost = Configuration::new(2, 3, Bank::Left).unwrap();
        assert_eq!(graph.shortest_solution(&lost), None);
        assert!(graph.reachable(&lost).is_empty());
    }

    #[test]
    fn test_reachable_includes_goal() {
        let graph = StateGraph::build();
        let reachable = graph.reachable(&Configuration::START);
        assert_eq!(reachable.first(), Some(&Configuration::START));
        assert!(reachable.contains(&Configuration::GOAL));
    }
}
