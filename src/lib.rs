//! Closest point-of-interest search over weighted directed graphs.
//!
//! Callers hand the crate a graph (decoded from JSON or built
//! programmatically), a start node id and a point type; the crate answers
//! with the nearest node carrying that point type and its path distance,
//! or a typed failure.
//!
//! Two strategies sit behind the [`SearchStrategy`] trait:
//! - [`DijkstraSearch`] (default): label-setting search, stops at the
//!   first match; requires non-negative edge weights.
//! - [`BellmanFordSearch`]: full edge relaxation with negative-cycle
//!   detection; tolerates negative weights at O(V*E) cost.
//!
//! ```
//! let data = br#"[
//!     {"id": "A", "pointType": "entrance", "edges": [
//!         {"id": "B", "weight": 2.0},
//!         {"id": "C", "weight": 10.0}
//!     ]},
//!     {"id": "B", "pointType": "corridor", "edges": [{"id": "C", "weight": 3.0}]},
//!     {"id": "C", "pointType": "wc", "edges": []}
//! ]"#;
//!
//! let hit = pointnav::find_closest_node(data, "A", "wc", None).unwrap();
//! assert_eq!(hit.node.id, "C");
//! assert_eq!(hit.distance, 5.0);
//! ```

mod collections;
pub mod errors;
pub mod graph;
pub mod navigator;
pub mod parse;
pub mod search_algos;

pub use errors::{NavigatorError, Result};
pub use graph::{GraphEdge, GraphNode, GraphStore, IndexedGraph};
pub use navigator::{Navigator, NavigatorConfig, find_closest_node};
pub use parse::parse_graph;
pub use search_algos::{BellmanFordSearch, DijkstraSearch, SearchHit, SearchStrategy};
