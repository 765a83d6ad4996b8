//! Decoding of raw serialized graph data.
//!
//! The wire shape is a JSON array of node records:
//! `[{"id": "A", "pointType": "wc", "edges": [{"id": "B", "weight": 2.0}]}]`
//! where an edge's `id` names its destination node. The rest of the crate
//! is agnostic to this format; anything that produces [`GraphNode`]s can
//! feed an [`IndexedGraph`] directly.

use serde::Deserialize;

use crate::errors::Result;
use crate::graph::{GraphEdge, GraphNode, IndexedGraph};


#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: String,
    point_type: String,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    #[serde(rename = "id")]
    to: String,
    weight: f64,
}

/// Decode a JSON graph into an [`IndexedGraph`].
/// Decode failures surface as [`MalformedInput`], distinct from any
/// search failure.
///
/// [`MalformedInput`]: crate::errors::NavigatorError::MalformedInput
pub fn parse_graph(data: &[u8]) -> Result<IndexedGraph<f64>> {
    let raw: Vec<RawNode> = serde_json::from_slice(data)?;

    Ok(IndexedGraph::from_nodes(raw.into_iter().map(|node| {
        GraphNode::new(
            node.id,
            node.point_type,
            node.edges
                .into_iter()
                .map(|edge| GraphEdge::new(edge.to, edge.weight))
                .collect(),
        )
    })))
}
