mod graph_builder;

pub use graph_builder::GraphBuilder;
