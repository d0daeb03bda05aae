use indexmap::IndexMap;

/// Result of a depth-bounded traversal: each visited package name mapped to
/// its direct dependency names, in visit order.
///
/// A key with an empty list is a terminal node, either a package that
/// declares no dependencies or a name the index does not know. A name that
/// appears only inside a value list was not expanded, because it lay beyond
/// the depth bound or had already been visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visited node. The traversal guarantees each name is
    /// recorded at most once; a repeated insert keeps the first entry.
    pub fn record(&mut self, name: impl Into<String>, depends: Vec<String>) {
        self.nodes.entry(name.into()).or_insert(depends);
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.nodes.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Visited nodes in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.nodes.iter().map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
