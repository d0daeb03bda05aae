use crate::index::domain::DependencyGraph;
use crate::ports::outbound::DiagramFormatter;
use crate::shared::Result;

/// Header line opening a top-down Mermaid flowchart.
const HEADER: &str = "graph TD";

/// Indentation for statement lines.
const INDENT: &str = "    ";

/// MermaidFormatter adapter rendering a dependency graph as Mermaid
/// flowchart source
///
/// One `-->` relation line per edge and one bare node line per terminal
/// node, in graph (traversal) order. Package names are emitted verbatim;
/// names containing Mermaid-reserved characters are not escaped.
pub struct MermaidFormatter;

impl MermaidFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MermaidFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramFormatter for MermaidFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        let mut lines = vec![HEADER.to_string()];

        for (name, depends) in graph.iter() {
            if depends.is_empty() {
                lines.push(format!("{}{}", INDENT, name));
            } else {
                for dep in depends {
                    lines.push(format!("{}{} --> {}", INDENT, name, dep));
                }
            }
        }

        Ok(lines.join("\n"))
    }
}
