use crate::index::domain::{DependencyGraph, IndexTable};
use std::collections::HashSet;

/// Depth-bounded dependency traversal.
///
/// Pure service: no I/O and no failure modes. The walk uses an explicit
/// frontier stack instead of call recursion, so pathological dependency
/// chains cannot overflow the call stack.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Walks the dependency closure of `root` and returns the visited
    /// sub-graph.
    ///
    /// The traversal is preorder depth-first with dependency-list order
    /// preserved left to right. Each name is visited at most once; cycles
    /// and self-dependencies terminate at the visited-set check. A name
    /// the index does not know is recorded as a terminal node with no
    /// dependencies. The root counts as depth 0, so a negative
    /// `max_depth` yields an empty graph.
    pub fn build(index: &IndexTable, root: &str, max_depth: i64) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier: Vec<(String, i64)> = vec![(root.to_string(), 0)];

        while let Some((name, depth)) = frontier.pop() {
            if depth > max_depth {
                continue;
            }
            // Names cut off by the depth check above stay unvisited, so a
            // later, shallower path may still expand them.
            if !visited.insert(name.clone()) {
                continue;
            }

            let Some(record) = index.get(&name) else {
                graph.record(name, Vec::new());
                continue;
            };

            let depends = record.depends().to_vec();
            // Reversed push so dependencies pop in declaration order.
            for dep in depends.iter().rev() {
                frontier.push((dep.clone(), depth + 1));
            }
            graph.record(name, depends);
        }

        graph
    }
}
