//! apkviz - Alpine Linux package dependency visualizer
//!
//! This library resolves the transitive dependency closure of a package
//! within one or more APKINDEX sources and renders it as a Mermaid
//! diagram, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`index`): package records, the merged index table,
//!   the dependency graph, and the traversal service
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error and result types
//!
//! # Example
//!
//! ```no_run
//! use apkviz::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let index_source = HttpIndexSource::new()?;
//! let formatter = MermaidFormatter::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RenderDiagramUseCase::new(index_source, formatter, progress_reporter);
//!
//! // Execute
//! let request = DiagramRequest::new(
//!     "curl".to_string(),
//!     2,
//!     MirrorConfig::default().source_urls(),
//! );
//! let response = use_case.execute(request)?;
//! println!("{}", response.diagram);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod index;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::MermaidFormatter;
    pub use crate::adapters::outbound::network::HttpIndexSource;
    pub use crate::application::dto::{DiagramRequest, DiagramResponse};
    pub use crate::application::use_cases::RenderDiagramUseCase;
    pub use crate::config::MirrorConfig;
    pub use crate::index::domain::{DependencyGraph, IndexTable, PackageRecord};
    pub use crate::index::parser::parse_records;
    pub use crate::index::services::GraphBuilder;
    pub use crate::ports::outbound::{
        DiagramFormatter, IndexSource, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
