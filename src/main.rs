mod cli;
mod config;

use anyhow::{bail, Context};
use cli::{Args, Command};
use container_cli::adapters::outbound::console::StderrProgressReporter;
use container_cli::adapters::outbound::engine::InProcessEngine;
use container_cli::adapters::outbound::network::build_http_client;
use container_cli::adapters::outbound::process::LegacyCliWorkflow;
use container_cli::application::factories::{PresenterFactory, PresenterType};
use container_cli::ports::outbound::{HttpTransport, ProgressReporter};
use container_cli::sbom_generation::domain::{ContainerFlags, WorkflowData};
use container_cli::shared::error::{ContainerExtensionError, ExitCode};
use container_cli::shared::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.debug);

    if let Err(e) = run(args).await {
        report_failure(&e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    // Merge the config file and the command line
    let file = config::load_config(args.config.as_deref())?;
    let configuration = config::build_configuration(&args, file);

    // Create the engine and register the workflows (Dependency Injection)
    let engine = InProcessEngine::new(configuration);
    let transport: Arc<dyn HttpTransport> = Arc::new(build_http_client()?);
    container_cli::init(&engine, &ContainerFlags::new(), transport)?;
    engine.register(Arc::new(LegacyCliWorkflow::new()))?;

    let reporter = StderrProgressReporter::new();
    reporter.start_activity(&args.command.progress_message());

    let data = match engine.invoke(&args.command.workflow_id()).await {
        Ok(data) => data,
        Err(failure) => {
            reporter.report_error("❌ Workflow failed");
            return Err(failure.into_error());
        }
    };

    match &args.command {
        Command::Depgraph(_) => {
            reporter.report_completion(&format!("✅ Extracted {} dependency graph(s)", data.len()));
            let output = render_depgraphs(&data)?;
            PresenterFactory::create(PresenterType::Stdout).present(&output)?;
        }
        Command::Sbom(sbom) => {
            reporter.report_completion("✅ SBOM generated");
            let Some(document) = data.first().and_then(|element| element.payload().as_bytes())
            else {
                bail!("the SBOM workflow returned no document");
            };
            PresenterFactory::create(PresenterType::from_output(sbom.output.clone()))
                .present(document)?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DepGraphView {
    target: String,
    #[serde(rename = "depGraph")]
    dep_graph: serde_json::Value,
}

/// Renders the depgraphs as a pretty-printed JSON array, one entry per target
fn render_depgraphs(data: &[WorkflowData]) -> Result<Vec<u8>> {
    let views = data
        .iter()
        .map(|element| {
            let target = element.content_location().unwrap_or_default().to_string();
            let bytes = element
                .payload()
                .as_bytes()
                .with_context(|| format!("depgraph of '{target}' is not a byte payload"))?;
            let dep_graph = serde_json::from_slice(bytes)
                .with_context(|| format!("depgraph of '{target}' is not valid JSON"))?;
            Ok(DepGraphView { target, dep_graph })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut output = serde_json::to_vec_pretty(&views)?;
    output.push(b'\n');
    Ok(output)
}

fn report_failure(error: &anyhow::Error) {
    let extension_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ContainerExtensionError>());

    match extension_error {
        Some(extension_error) => {
            eprintln!("\n❌ {}\n", extension_error.render().red());
        }
        None => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", error.red());

            let mut source = error.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();
        }
    }
}
