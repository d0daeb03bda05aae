/// Formatter adapters for diagram output
mod mermaid_formatter;

pub use mermaid_formatter::MermaidFormatter;
