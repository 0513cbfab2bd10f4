//! Precomputed state graph.
//!
//! Every configuration is a slot in a dense table indexed by
//! `(missionaries_left, cannibals_left, boat)`. Safe slots hold their
//! outgoing transitions in the fixed [`Load::ALL`] order; unsafe slots hold
//! nothing.

use super::action::Load;
use super::rules::is_safe;
use super::types::Configuration;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// A transition out of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// What the boat carries.
    pub load: Load,
    /// Where the puzzle ends up.
    pub to: Configuration,
}

#[derive(Debug, Clone, Default)]
struct Node {
    safe: bool,
    /// Transitions whose result is safe.
    edges: Vec<Edge>,
    /// Transitions the departure bank can supply but whose result is unsafe.
    fatal: Vec<Edge>,
}

/// Immutable table of configurations and the loads connecting them.
///
/// Built once and shared by reference between any number of sessions.
#[derive(Debug, Clone)]
pub struct StateGraph {
    nodes: Vec<Node>,
}

static SHARED: OnceLock<StateGraph> = OnceLock::new();

impl StateGraph {
    /// Enumerates every configuration and its transitions.
    #[instrument]
    pub fn build() -> Self {
        let mut nodes = vec![Node::default(); Configuration::COUNT];

        for config in Configuration::all() {
            if !is_safe(&config) {
                continue;
            }

            let node = &mut nodes[config.to_index()];
            node.safe = true;

            for load in Load::ALL {
                let Some(to) = load.apply(config) else {
                    continue;
                };
                let edge = Edge { load, to };
                if is_safe(&to) {
                    node.edges.push(edge);
                } else {
                    node.fatal.push(edge);
                }
            }
        }

        let graph = Self { nodes };
        debug!(
            configurations = graph.configurations().count(),
            edges = graph.edge_count(),
            "State graph built"
        );
        graph
    }

    /// Process-wide graph, built on first use.
    pub fn shared() -> &'static StateGraph {
        SHARED.get_or_init(StateGraph::build)
    }

    /// Safe transitions out of `config`, in load order.
    ///
    /// Empty for unsafe configurations.
    pub fn edges_from(&self, config: &Configuration) -> &[Edge] {
        &self.nodes[config.to_index()].edges
    }

    /// Transitions out of `config` that lose the game, in load order.
    pub fn fatal_edges_from(&self, config: &Configuration) -> &[Edge] {
        &self.nodes[config.to_index()].fatal
    }

    /// Finds where `load` takes `config`, whether or not the result is safe.
    ///
    /// Returns `None` if `config` is unsafe or the departure bank cannot
    /// supply the load.
    #[instrument(skip(self))]
    pub fn transition(&self, config: &Configuration, load: Load) -> Option<Edge> {
        let node = &self.nodes[config.to_index()];
        node.edges
            .iter()
            .chain(node.fatal.iter())
            .find(|edge| edge.load == load)
            .copied()
    }

    /// Checks whether `config` is a node of the graph.
    pub fn contains(&self, config: &Configuration) -> bool {
        self.nodes[config.to_index()].safe
    }

    /// All safe configurations, in table order.
    pub fn configurations(&self) -> impl Iterator<Item = Configuration> + '_ {
        Configuration::all().filter(|config| self.contains(config))
    }

    /// Total number of safe edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }
}
