use crate::index::domain::DependencyGraph;
use crate::shared::Result;

/// DiagramFormatter port for rendering a dependency graph as a textual
/// diagram description.
pub trait DiagramFormatter {
    /// Renders `graph` in the formatter's diagram syntax.
    ///
    /// # Errors
    /// Returns an error if the graph cannot be rendered.
    fn format(&self, graph: &DependencyGraph) -> Result<String>;
}
