use crate::index::domain::DependencyGraph;

/// DiagramResponse - Result of a diagram rendering run
#[derive(Debug, Clone)]
pub struct DiagramResponse {
    /// The traversed sub-graph, in visit order
    pub graph: DependencyGraph,
    /// Rendered diagram text
    pub diagram: String,
    /// Number of index sources that loaded successfully
    pub loaded_sources: usize,
}

impl DiagramResponse {
    pub fn new(graph: DependencyGraph, diagram: String, loaded_sources: usize) -> Self {
        Self {
            graph,
            diagram,
            loaded_sources,
        }
    }
}
