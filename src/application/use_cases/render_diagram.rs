use crate::application::dto::{DiagramRequest, DiagramResponse};
use crate::index::domain::IndexTable;
use crate::index::parser::parse_records;
use crate::index::services::GraphBuilder;
use crate::ports::outbound::{DiagramFormatter, IndexSource, ProgressReporter};
use crate::shared::error::ApkvizError;
use crate::shared::Result;

/// RenderDiagramUseCase - Core use case for diagram generation
///
/// Loads and merges the configured index sources, checks that the
/// requested root package exists, runs the depth-bounded traversal, and
/// renders the result with the injected formatter.
///
/// # Type Parameters
/// * `S` - IndexSource implementation
/// * `F` - DiagramFormatter implementation
/// * `R` - ProgressReporter implementation
pub struct RenderDiagramUseCase<S, F, R> {
    index_source: S,
    formatter: F,
    progress_reporter: R,
}

impl<S, F, R> RenderDiagramUseCase<S, F, R>
where
    S: IndexSource,
    F: DiagramFormatter,
    R: ProgressReporter,
{
    /// Creates a new RenderDiagramUseCase with injected dependencies
    pub fn new(index_source: S, formatter: F, progress_reporter: R) -> Self {
        Self {
            index_source,
            formatter,
            progress_reporter,
        }
    }

    /// Executes the diagram generation use case
    ///
    /// # Errors
    /// Returns `ApkvizError::PackageNotFound` if the root package is
    /// absent from the merged index (checked before the traversal runs),
    /// or an error from the formatter.
    pub fn execute(&self, request: DiagramRequest) -> Result<DiagramResponse> {
        let (index, loaded_sources) = self.load_index(&request.source_urls);

        if !index.contains(&request.package) {
            return Err(ApkvizError::PackageNotFound {
                name: request.package,
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "📊 Resolving dependencies of '{}' (max depth {})...",
            request.package, request.max_depth
        ));

        let graph = GraphBuilder::build(&index, &request.package, request.max_depth);

        self.progress_reporter
            .report(&format!("   - Packages visited: {}", graph.node_count()));
        self.progress_reporter
            .report(&format!("   - Dependency edges: {}", graph.edge_count()));

        let diagram = self.formatter.format(&graph)?;

        Ok(DiagramResponse::new(graph, diagram, loaded_sources))
    }

    /// Loads every source sequentially and merges the parsed records.
    ///
    /// A source that fails to download or extract is reported and
    /// skipped; the remaining sources still contribute. Merge order
    /// follows the request order, so a later source wins name conflicts.
    fn load_index(&self, urls: &[String]) -> (IndexTable, usize) {
        let total = urls.len();
        let mut index = IndexTable::new();
        let mut loaded = 0;

        for (i, url) in urls.iter().enumerate() {
            self.progress_reporter
                .report_progress(i + 1, total, Some(url.as_str()));

            match self.index_source.load(url) {
                Ok(raw) => {
                    let table = parse_records(&raw);
                    self.progress_reporter.report(&format!(
                        "✅ Loaded {} package record(s) from {}",
                        table.len(),
                        url
                    ));
                    index.merge(table);
                    loaded += 1;
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping index source {}: {}",
                        url, e
                    ));
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Index merge complete: {} of {} source(s), {} package(s)",
            loaded,
            total,
            index.len()
        ));

        (index, loaded)
    }
}
