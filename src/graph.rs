use crate::collections::FxIndexMap;


/// A node in a weighted directed graph.
/// Nodes carry a point type label (e.g. "wc", "exit") and own their
/// outgoing edges; both are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode<W> {
    pub id: String,
    pub point_type: String,
    pub edges: Vec<GraphEdge<W>>,
}

impl<W> GraphNode<W> {
    pub fn new(
        id: impl Into<String>,
        point_type: impl Into<String>,
        edges: Vec<GraphEdge<W>>,
    ) -> Self {
        GraphNode {
            id: id.into(),
            point_type: point_type.into(),
            edges,
        }
    }
}

/// A directed edge to the node with id `to`.
/// The destination does not have to exist in the graph; lookups for it
/// simply come back empty.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge<W> {
    pub to: String,
    pub weight: W,
}

impl<W> GraphEdge<W> {
    pub fn new(to: impl Into<String>, weight: W) -> Self {
        GraphEdge {
            to: to.into(),
            weight,
        }
    }
}

/// Read-only view over a graph fixed at construction.
///
/// Implementations choose their own storage; the search strategies only
/// rely on these three lookups. None of them can fail - an unknown id
/// yields `None`. Enumeration order of [`GraphStore::nodes`] is
/// unspecified and must not be relied upon.
pub trait GraphStore<W> {
    /// The node with the given id, if any.
    fn node(&self, id: &str) -> Option<&GraphNode<W>>;

    /// Outgoing edges of the node with the given id, `None` if the node
    /// is unknown.
    fn edges_from(&self, id: &str) -> Option<&[GraphEdge<W>]>;

    /// Every node in the graph, in unspecified order.
    fn nodes(&self) -> Vec<&GraphNode<W>>;
}

/// Hash-indexed [`GraphStore`]: nodes live contiguously in insertion order
/// with a hash index over their ids, giving O(1) average lookups without
/// an ownership cycle between nodes and edges.
#[derive(Debug, Clone, Default)]
pub struct IndexedGraph<W> {
    nodes: FxIndexMap<String, GraphNode<W>>,
}

impl<W> IndexedGraph<W> {
    /// Build a graph from a collection of nodes.
    /// If an id occurs more than once, the last occurrence wins.
    pub fn from_nodes(nodes: impl IntoIterator<Item = GraphNode<W>>) -> Self {
        let mut map: FxIndexMap<String, GraphNode<W>> = FxIndexMap::default();
        for node in nodes {
            map.insert(node.id.clone(), node);
        }
        IndexedGraph { nodes: map }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<W> GraphStore<W> for IndexedGraph<W> {
    fn node(&self, id: &str) -> Option<&GraphNode<W>> {
        self.nodes.get(id)
    }

    fn edges_from(&self, id: &str) -> Option<&[GraphEdge<W>]> {
        self.nodes.get(id).map(|node| node.edges.as_slice())
    }

    fn nodes(&self) -> Vec<&GraphNode<W>> {
        self.nodes.values().collect()
    }
}
