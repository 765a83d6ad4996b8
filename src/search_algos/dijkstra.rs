use crate::collections::FxIndexMap;
use crate::errors::{NavigatorError, Result};
use crate::graph::GraphStore;
use super::{SearchHit, SearchStrategy};

use std::{cmp::Ordering, collections::BinaryHeap, fmt::Debug};
use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::Float;
use tracing::debug;


/// Label-setting search (Dijkstra's algorithm)
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Expands nodes in non-decreasing distance from the start, so the first
/// expanded node carrying the requested point type is the closest one and
/// the search stops there instead of scanning the whole graph.
///
/// Requires non-negative edge weights; with negative weights the result
/// is undefined (use [`BellmanFordSearch`](super::BellmanFordSearch)).
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSearch;

impl<W: Float + Debug> SearchStrategy<W> for DijkstraSearch {
    #[tracing::instrument(skip(self, graph), fields(start_id = %start_id, point_type = %point_type))]
    fn find_closest(
        &self,
        graph: &dyn GraphStore<W>,
        start_id: &str,
        point_type: &str,
    ) -> Result<SearchHit<W>> {
        // Frontier of nodes to expand - binary heap popping the smallest
        // distance first; entries refer to nodes by their index in `best`.
        let mut frontier: BinaryHeap<FrontierEntry<W>> = BinaryHeap::new();

        // Best known distance per node.
        // The tuple contains (parent_index, distance) where parent_index is
        // the index of the parent entry; usize::MAX marks the start node.
        let mut best: FxIndexMap<&str, (usize, W)> = FxIndexMap::default();

        // An absent start reaches nothing; the loop body never runs and
        // the search falls through to the no-match failure.
        if let Some(start) = graph.node(start_id) {
            let start_index = best
                .insert_full(start.id.as_str(), (usize::MAX, W::zero()))
                .0;
            frontier.push(FrontierEntry {
                index: start_index,
                distance: W::zero(),
            });
        }

        while let Some(FrontierEntry { index, distance }) = frontier.pop() {
            let (&id, &(_, d)) = best.get_index(index).unwrap();

            // Stale heap entry - a cheaper path to this node was already found
            if distance > d {
                continue;
            }

            let Some(node) = graph.node(id) else { continue };

            // Frontier order guarantees d is minimal for this node, so the
            // first match is the answer.
            if node.point_type == point_type {
                debug!(node = %node.id, distance = ?d, "closest node found");
                return Ok(SearchHit {
                    node: node.clone(),
                    distance: d,
                });
            }

            let Some(edges) = graph.edges_from(id) else { continue };

            for edge in edges {
                // Dangling destination: tolerated, nothing to expand
                let Some(next) = graph.node(&edge.to) else { continue };

                let new_distance = d + edge.weight;

                let next_index = match best.entry(next.id.as_str()) {
                    Vacant(e) => {
                        // First time seeing this neighbor
                        let i = e.index();
                        e.insert((index, new_distance));
                        i
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_distance {
                            // Found a better path to this neighbor
                            let i = e.index();
                            e.insert((index, new_distance));
                            i
                        } else {
                            // The existing path is better, do nothing
                            continue;
                        }
                    }
                };

                frontier.push(FrontierEntry {
                    index: next_index,
                    distance: new_distance,
                });
            }
        }

        Err(NavigatorError::NoMatchingNode(point_type.to_string()))
    }
}


/// Frontier entry - for ordering we only need the distance and a way to
/// identify the node (its index in the best-distance map).
#[derive(Debug)]
struct FrontierEntry<W> {
    index: usize,
    distance: W,
}

impl<W: Float> Ord for FrontierEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap pops the smallest distance first.
        // Weights never decode to NaN, so equal-fallback is unreachable.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
    }
}
impl<W: Float> PartialOrd for FrontierEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<W: Float> PartialEq for FrontierEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}
impl<W: Float> Eq for FrontierEntry<W> {}
