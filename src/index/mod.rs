/// Index domain - package records, the merged index table, the dependency
/// graph, and the traversal service
pub mod domain;
pub mod parser;
pub mod services;
