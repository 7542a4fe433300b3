use clap::{Args as ClapArgs, Parser, Subcommand};
use container_cli::sbom_generation::domain::WorkflowId;
use container_cli::shared::constants::{DEPGRAPH_WORKFLOW_NAME, SBOM_WORKFLOW_NAME};
use std::path::PathBuf;

/// Extract container depgraphs and convert them to SBOM documents
#[derive(Parser, Debug)]
#[command(name = "container-cli")]
#[command(version)]
#[command(
    about = "Extract container depgraphs and convert them to SBOM documents",
    long_about = None
)]
pub struct Args {
    /// Organization ID the SBOM conversion runs under
    #[arg(long, global = true)]
    pub org: Option<String>,

    /// Base URL of the SBOM conversion API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to the legacy CLI executable (defaults to `snyk` on PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub legacy_cli: Option<String>,

    /// Path to a config file (defaults to container-cli.config.yml in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dependency graphs of a container image
    Depgraph(DepGraphArgs),
    /// Generate an SBOM document for a container image
    Sbom(SbomArgs),
}

#[derive(ClapArgs, Debug)]
pub struct DepGraphArgs {
    /// Disable app-vulns
    #[arg(long)]
    pub exclude_app_vulns: bool,

    /// Enable app-vulns (deprecated, as this is the default value)
    #[arg(long)]
    pub app_vulns: bool,

    /// Image reference, image archive or directory to scan
    pub target: String,
}

#[derive(ClapArgs, Debug)]
pub struct SbomArgs {
    /// SBOM output format, e.g. cyclonedx1.4+json or spdx2.3+json
    #[arg(short, long)]
    pub format: Option<String>,

    /// For multi-architecture images, the platform to generate the SBOM for
    #[arg(long)]
    pub platform: Option<String>,

    /// Disable app-vulns
    #[arg(long)]
    pub exclude_app_vulns: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image reference or image archive to generate the SBOM for
    pub target: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Command {
    /// Workflow the subcommand runs
    pub fn workflow_id(&self) -> WorkflowId {
        match self {
            Command::Depgraph(_) => WorkflowId::new(DEPGRAPH_WORKFLOW_NAME),
            Command::Sbom(_) => WorkflowId::new(SBOM_WORKFLOW_NAME),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Command::Depgraph(args) => &args.target,
            Command::Sbom(args) => &args.target,
        }
    }

    /// Returns the progress message shown while the workflow runs
    pub fn progress_message(&self) -> String {
        match self {
            Command::Depgraph(args) => format!("🔍 Extracting dependency graphs of {}...", args.target),
            Command::Sbom(args) => format!("📝 Generating SBOM for {}...", args.target),
        }
    }
}
