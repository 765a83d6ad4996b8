pub mod bellman_ford;
pub mod dijkstra;

pub use bellman_ford::BellmanFordSearch;
pub use dijkstra::DijkstraSearch;

use crate::errors::Result;
use crate::graph::{GraphNode, GraphStore};


/// Outcome of a successful search: the matched node and the cumulative
/// distance from the start node. Produced fresh on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<W> {
    pub node: GraphNode<W>,
    pub distance: W,
}

/// A shortest-path search that resolves the closest node of a point type.
///
/// Strategies carry no state of their own; everything a search needs
/// (distance map, frontier, predecessors) lives inside one invocation, so
/// a strategy value can serve any number of independent searches.
///
/// The start id is validated by the [`Navigator`](crate::Navigator), not
/// here; an absent start simply makes nothing reachable and the strategy
/// reports no match.
pub trait SearchStrategy<W> {
    fn find_closest(
        &self,
        graph: &dyn GraphStore<W>,
        start_id: &str,
        point_type: &str,
    ) -> Result<SearchHit<W>>;
}
