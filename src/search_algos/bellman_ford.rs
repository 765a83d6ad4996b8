use crate::collections::FxIndexMap;
use crate::errors::{NavigatorError, Result};
use crate::graph::GraphStore;
use super::{SearchHit, SearchStrategy};

use std::fmt::Debug;
use num_traits::Float;
use tracing::debug;


/// Relaxation search (Bellman-Ford algorithm)
/// https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
///
/// Relaxes every edge in the graph `|nodes| - 1` times, then runs one more
/// pass: any edge that would still improve a distance proves a reachable
/// negative-weight cycle, in which case shortest distances are undefined
/// and the search fails instead of producing a number.
///
/// O(V*E) - worth it only when edge weights may be negative; otherwise
/// [`DijkstraSearch`](super::DijkstraSearch) reaches the same answer faster.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordSearch;

impl<W: Float + Debug> SearchStrategy<W> for BellmanFordSearch {
    #[tracing::instrument(skip(self, graph), fields(start_id = %start_id, point_type = %point_type))]
    fn find_closest(
        &self,
        graph: &dyn GraphStore<W>,
        start_id: &str,
        point_type: &str,
    ) -> Result<SearchHit<W>> {
        let nodes = graph.nodes();

        // distance from the start per node id; unreached stays infinite
        let mut distances: FxIndexMap<&str, W> = FxIndexMap::default();
        let mut predecessors: FxIndexMap<&str, &str> = FxIndexMap::default();

        distances.insert(start_id, W::zero());
        for node in &nodes {
            if node.id != start_id {
                distances.insert(node.id.as_str(), W::infinity());
            }
        }

        // Relax every edge, |nodes| - 1 rounds. A round with no update
        // means all distances are final and further rounds are no-ops.
        let rounds = nodes.len().saturating_sub(1);
        for _ in 0..rounds {
            let mut updated = false;

            for node in &nodes {
                let Some(edges) = graph.edges_from(&node.id) else { continue };

                for edge in edges {
                    // Dangling destination: tolerated, same as the
                    // label-setting search. It must also not count as
                    // relaxable here - it has no slot in the round budget,
                    // so a long chain finalized on the last round would
                    // read as a negative cycle in the detection pass.
                    let Some(next) = graph.node(&edge.to) else { continue };

                    let candidate = distances[node.id.as_str()] + edge.weight;

                    if candidate < distances[next.id.as_str()] {
                        distances.insert(next.id.as_str(), candidate);
                        predecessors.insert(next.id.as_str(), node.id.as_str());
                        updated = true;
                    }
                }
            }

            if !updated {
                break;
            }
        }

        // One extra pass: any remaining improvement can only come from a
        // reachable negative-weight cycle.
        for node in &nodes {
            let Some(edges) = graph.edges_from(&node.id) else { continue };

            for edge in edges {
                let Some(next) = graph.node(&edge.to) else { continue };

                let candidate = distances[node.id.as_str()] + edge.weight;

                if candidate < distances[next.id.as_str()] {
                    return Err(NavigatorError::NegativeCycleDetected);
                }
            }
        }

        // Closest finite-distance node carrying the point type; an infinite
        // distance never beats the starting minimum, so unreachable nodes
        // are never candidates.
        let mut closest = None;
        let mut min_distance = W::infinity();

        for (&id, &distance) in &distances {
            if let Some(node) = graph.node(id) {
                if node.point_type == point_type && distance < min_distance {
                    closest = Some(node);
                    min_distance = distance;
                }
            }
        }

        match closest {
            Some(node) => {
                debug!(
                    node = %node.id,
                    distance = ?min_distance,
                    route = ?route_to(&predecessors, start_id, &node.id),
                    "closest node found"
                );
                Ok(SearchHit {
                    node: node.clone(),
                    distance: min_distance,
                })
            }
            None => Err(NavigatorError::NoMatchingNode(point_type.to_string())),
        }
    }
}

/// Walk the predecessor map back from `goal` to `start`.
/// Only called once negative cycles are ruled out, so the walk terminates.
fn route_to<'a>(
    predecessors: &FxIndexMap<&'a str, &'a str>,
    start: &str,
    goal: &'a str,
) -> Vec<&'a str> {
    let mut route = vec![goal];
    let mut current = goal;

    while current != start {
        match predecessors.get(current) {
            Some(&parent) => {
                route.push(parent);
                current = parent;
            }
            None => break,
        }
    }

    route.reverse();
    route
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphEdge, GraphNode, IndexedGraph};

    // Helper to build an IndexedGraph from (id, point_type, [(to, weight)]) triples
    fn build_graph(nodes: Vec<(&str, &str, Vec<(&str, f64)>)>) -> IndexedGraph<f64> {
        IndexedGraph::from_nodes(nodes.into_iter().map(|(id, point_type, edges)| {
            GraphNode::new(
                id,
                point_type,
                edges
                    .into_iter()
                    .map(|(to, weight)| GraphEdge::new(to, weight))
                    .collect(),
            )
        }))
    }

    #[test]
    fn test_indirect_path_beats_direct_edge() {
        let graph = build_graph(vec![
            ("A", "entrance", vec![("B", 2.0), ("C", 10.0)]),
            ("B", "corridor", vec![("C", 3.0)]),
            ("C", "wc", vec![]),
        ]);

        let hit = BellmanFordSearch.find_closest(&graph, "A", "wc").unwrap();
        assert_eq!(hit.node.id, "C");
        assert_eq!(hit.distance, 5.0);
    }

    #[test]
    fn test_start_node_matching_type_is_returned_at_zero() {
        let graph = build_graph(vec![
            ("A", "wc", vec![("B", 1.0)]),
            ("B", "wc", vec![]),
        ]);

        let hit = BellmanFordSearch.find_closest(&graph, "A", "wc").unwrap();
        assert_eq!(hit.node.id, "A");
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        // the detour through B is cheaper than the direct edge once the
        // negative weight is applied: 4 + (-3) = 1 < 2
        let graph = build_graph(vec![
            ("A", "entrance", vec![("B", 4.0), ("C", 2.0)]),
            ("B", "corridor", vec![("C", -3.0)]),
            ("C", "wc", vec![]),
        ]);

        let hit = BellmanFordSearch.find_closest(&graph, "A", "wc").unwrap();
        assert_eq!(hit.node.id, "C");
        assert_eq!(hit.distance, 1.0);
    }

    #[test]
    fn test_reachable_negative_cycle_is_detected() {
        // B <-> C cycles with total weight -1
        let graph = build_graph(vec![
            ("A", "entrance", vec![("B", 1.0)]),
            ("B", "corridor", vec![("C", 2.0)]),
            ("C", "corridor", vec![("B", -3.0), ("D", 1.0)]),
            ("D", "wc", vec![]),
        ]);

        let result = BellmanFordSearch.find_closest(&graph, "A", "wc");
        assert!(matches!(result, Err(NavigatorError::NegativeCycleDetected)));
    }

    #[test]
    fn test_unreachable_negative_cycle_is_ignored() {
        // the X <-> Y cycle exists but nothing connects A to it
        let graph = build_graph(vec![
            ("A", "entrance", vec![("B", 1.0)]),
            ("B", "wc", vec![]),
            ("X", "corridor", vec![("Y", 1.0)]),
            ("Y", "corridor", vec![("X", -2.0)]),
        ]);

        let hit = BellmanFordSearch.find_closest(&graph, "A", "wc").unwrap();
        assert_eq!(hit.node.id, "B");
        assert_eq!(hit.distance, 1.0);
    }

    #[test]
    fn test_unreachable_match_is_not_a_candidate() {
        let graph = build_graph(vec![
            ("A", "entrance", vec![("B", 1.0)]),
            ("B", "corridor", vec![]),
            ("C", "wc", vec![]),
        ]);

        let result = BellmanFordSearch.find_closest(&graph, "A", "wc");
        assert!(matches!(result, Err(NavigatorError::NoMatchingNode(t)) if t == "wc"));
    }

    #[test]
    fn test_minimum_among_several_candidates() {
        let graph = build_graph(vec![
            ("A", "entrance", vec![("B", 4.0), ("C", 2.0)]),
            ("B", "wc", vec![]),
            ("C", "corridor", vec![("D", 1.0)]),
            ("D", "wc", vec![]),
        ]);

        let hit = BellmanFordSearch.find_closest(&graph, "A", "wc").unwrap();
        assert_eq!(hit.node.id, "D");
        assert_eq!(hit.distance, 3.0);
    }

    #[test]
    fn test_dangling_edges_are_skipped() {
        let graph = build_graph(vec![
            ("A", "entrance", vec![("ghost", 0.5), ("B", 2.0)]),
            ("B", "wc", vec![]),
        ]);

        let hit = BellmanFordSearch.find_closest(&graph, "A", "wc").unwrap();
        assert_eq!(hit.node.id, "B");
        assert_eq!(hit.distance, 2.0);
    }

    #[test]
    fn test_dangling_edge_on_a_full_length_chain_is_not_a_cycle() {
        // A -> B -> C needs every round to settle when enumeration runs
        // counter to the chain, and C's dangling edge must not read as a
        // still-relaxable improvement afterwards
        let graph = build_graph(vec![
            ("C", "wc", vec![("ghost", 1.0)]),
            ("B", "corridor", vec![("C", 1.0)]),
            ("A", "entrance", vec![("B", 1.0)]),
        ]);

        let hit = BellmanFordSearch.find_closest(&graph, "A", "wc").unwrap();
        assert_eq!(hit.node.id, "C");
        assert_eq!(hit.distance, 2.0);
    }

    #[test]
    fn test_route_to_walks_predecessors() {
        let mut predecessors: FxIndexMap<&str, &str> = FxIndexMap::default();
        predecessors.insert("B", "A");
        predecessors.insert("C", "B");

        assert_eq!(route_to(&predecessors, "A", "C"), vec!["A", "B", "C"]);
        assert_eq!(route_to(&predecessors, "A", "A"), vec!["A"]);
    }
}
