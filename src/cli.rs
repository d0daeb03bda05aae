use clap::Parser;

/// Visualize Alpine Linux package dependencies as a Mermaid diagram
#[derive(Parser, Debug)]
#[command(name = "apkviz")]
#[command(version)]
#[command(about = "Render the dependency closure of an Alpine package as a Mermaid diagram", long_about = None)]
pub struct Args {
    /// Path to an external Mermaid rendering tool (reserved, not invoked)
    #[arg(short, long)]
    pub path: String,

    /// Name of the package to analyze
    #[arg(short, long)]
    pub name: String,

    /// Output file path for the Mermaid code
    #[arg(short, long)]
    pub output: String,

    /// Maximum depth of dependency analysis
    #[arg(short, long)]
    pub depth: u32,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
