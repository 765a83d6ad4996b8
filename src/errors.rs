use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NavigatorError>;

/// Failures produced while resolving a closest-node query.
/// One variant per failure kind; none overlap and none are retried.
#[derive(Debug, Error)]
pub enum NavigatorError {
    /// The supplied start identifier does not exist in the graph.
    /// Reported before any traversal begins.
    #[error("start node `{0}` not found in graph")]
    StartNodeNotFound(String),

    /// No node of the requested point type was reachable from the start.
    #[error("no reachable node with point type `{0}`")]
    NoMatchingNode(String),

    /// A reachable negative-weight cycle makes shortest distances undefined.
    #[error("negative-weight cycle detected")]
    NegativeCycleDetected,

    /// The raw graph data could not be decoded.
    #[error("malformed graph data: {0}")]
    MalformedInput(String),
}

impl From<serde_json::Error> for NavigatorError {
    fn from(error: serde_json::Error) -> Self {
        NavigatorError::MalformedInput(error.to_string())
    }
}
