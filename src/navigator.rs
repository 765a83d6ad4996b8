use crate::errors::{NavigatorError, Result};
use crate::graph::{GraphStore, IndexedGraph};
use crate::parse::parse_graph;
use crate::search_algos::{DijkstraSearch, SearchHit, SearchStrategy};

use std::fmt::Debug;
use num_traits::Float;


/// Settings for a [`Navigator`]; fixes the search strategy when the
/// navigator is built.
pub struct NavigatorConfig<W> {
    strategy: Box<dyn SearchStrategy<W>>,
}

impl<W> NavigatorConfig<W> {
    pub fn new(strategy: Box<dyn SearchStrategy<W>>) -> Self {
        NavigatorConfig { strategy }
    }
}

impl<W: Float + Debug + 'static> Default for NavigatorConfig<W> {
    /// Label-setting search is the default strategy.
    fn default() -> Self {
        NavigatorConfig::new(Box::new(DijkstraSearch))
    }
}

/// Façade wiring a graph store to a configured search strategy.
///
/// Borrows the store, so independent navigators (and their searches) can
/// share one read-only graph.
pub struct Navigator<'g, W> {
    graph: &'g dyn GraphStore<W>,
    config: NavigatorConfig<W>,
}

impl<'g, W: Float + Debug + 'static> Navigator<'g, W> {
    /// Navigator with the default configuration.
    pub fn new(graph: &'g dyn GraphStore<W>) -> Self {
        Navigator::with_config(graph, NavigatorConfig::default())
    }

    pub fn with_config(graph: &'g dyn GraphStore<W>, config: NavigatorConfig<W>) -> Self {
        Navigator { graph, config }
    }

    /// Find the closest node carrying `point_type` reachable from `start_id`.
    ///
    /// The start id is validated here, before any traversal, so every
    /// strategy can assume it exists; the strategy's result or failure is
    /// then propagated unchanged.
    #[tracing::instrument(skip(self), fields(start_id = %start_id, point_type = %point_type))]
    pub fn find_closest_node(&self, start_id: &str, point_type: &str) -> Result<SearchHit<W>> {
        if self.graph.node(start_id).is_none() {
            return Err(NavigatorError::StartNodeNotFound(start_id.to_string()));
        }

        self.config.strategy.find_closest(self.graph, start_id, point_type)
    }
}

/// One-shot entry point over raw JSON graph data.
///
/// Decodes the data, builds an [`IndexedGraph`], constructs a [`Navigator`]
/// with the given strategy (label-setting when `None`) and runs a single
/// query. This is the only orchestration in the crate.
pub fn find_closest_node(
    data: &[u8],
    start_id: &str,
    point_type: &str,
    strategy: Option<Box<dyn SearchStrategy<f64>>>,
) -> Result<SearchHit<f64>> {
    let graph: IndexedGraph<f64> = parse_graph(data)?;
    let config = strategy.map(NavigatorConfig::new).unwrap_or_default();

    Navigator::with_config(&graph, config).find_closest_node(start_id, point_type)
}
