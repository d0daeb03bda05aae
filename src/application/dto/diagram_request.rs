/// DiagramRequest - Internal request DTO for one diagram rendering run
#[derive(Debug, Clone)]
pub struct DiagramRequest {
    /// Root package whose dependency closure is visualized
    pub package: String,
    /// Maximum expansion depth, with the root at depth 0
    pub max_depth: i64,
    /// Index source URLs in fetch order; a later source wins name
    /// conflicts during the merge
    pub source_urls: Vec<String>,
}

impl DiagramRequest {
    pub fn new(package: String, max_depth: i64, source_urls: Vec<String>) -> Self {
        Self {
            package,
            max_depth,
            source_urls,
        }
    }
}
