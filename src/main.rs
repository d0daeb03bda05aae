use apkviz::adapters::outbound::console::StderrProgressReporter;
use apkviz::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use apkviz::adapters::outbound::formatters::MermaidFormatter;
use apkviz::adapters::outbound::network::HttpIndexSource;
use apkviz::application::dto::DiagramRequest;
use apkviz::application::use_cases::RenderDiagramUseCase;
use apkviz::cli::Args;
use apkviz::config;
use apkviz::ports::outbound::OutputPresenter;
use apkviz::shared::Result;
use std::path::PathBuf;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Resolve index sources: apkviz.config.yml in the working directory
    // overrides the default Alpine mirror layout
    let mirror_config = config::discover_config(&std::env::current_dir()?)?.unwrap_or_default();
    let source_urls = mirror_config.source_urls();

    // Create adapters (Dependency Injection)
    let index_source = HttpIndexSource::new()?;
    let formatter = MermaidFormatter::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = RenderDiagramUseCase::new(index_source, formatter, progress_reporter);

    let request = DiagramRequest::new(args.name, i64::from(args.depth), source_urls);
    let response = use_case.execute(request)?;

    // Present the diagram on stdout and in the requested output file
    StdoutPresenter::new().present(&response.diagram)?;
    FileSystemWriter::new(PathBuf::from(args.output)).present(&response.diagram)?;

    Ok(())
}
