/// Use cases module containing application business logic orchestration
mod render_diagram;

pub use render_diagram::RenderDiagramUseCase;
