//! container-cli - container depgraph and SBOM workflows
//!
//! This library extracts dependency graphs ("depgraphs") of container images
//! from the output of a legacy scanner CLI, and converts them to SBOM
//! documents through a remote conversion API.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Workflow data, flags, configuration,
//!   the depgraph output parser and the image metadata resolver
//! - **Application Layer** (`application`): The depgraph and SBOM workflows,
//!   request DTOs and the error factory
//! - **Ports** (`ports`): Interface definitions for the engine and infrastructure
//! - **Adapters** (`adapters`): In-process engine, subprocess, HTTP, console
//!   and filesystem implementations of the ports
//! - **Shared** (`shared`): Common constants and error types
//!
//! # Example
//!
//! ```no_run
//! use container_cli::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! let engine = InProcessEngine::new(Configuration::new());
//! engine.set_config(keys::ORGANIZATION, "my-org");
//! engine.set_config(keys::TARGET_DIRECTORY, "alpine:3.17.0");
//! engine.set_config("format", "cyclonedx1.4+json");
//!
//! let transport: Arc<dyn HttpTransport> = Arc::new(build_http_client()?);
//! container_cli::init(&engine, &ContainerFlags::new(), transport)?;
//! engine.register(Arc::new(LegacyCliWorkflow::new()))?;
//!
//! let data = engine
//!     .invoke(&WorkflowId::new(SBOM_WORKFLOW_NAME))
//!     .await
//!     .map_err(InvocationFailure::into_error)?;
//! println!("{:?}", data[0].payload());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

#[cfg(test)]
mod test_support;

use adapters::outbound::engine::InProcessEngine;
use adapters::outbound::network::HttpSbomClient;
use application::use_cases::{DepGraphWorkflow, SbomWorkflow};
use ports::outbound::HttpTransport;
use sbom_generation::domain::{keys, ContainerFlags};
use shared::constants::DEFAULT_API_URL;
use shared::Result;
use std::sync::Arc;

/// Registers the depgraph and SBOM workflows with `engine`
///
/// The SBOM client targets the API URL found in the engine configuration,
/// falling back to the public API. The legacy CLI workflow the depgraph
/// workflow delegates to is registered separately, so callers can provide
/// their own.
///
/// # Errors
/// Returns an error if either workflow is already registered
pub fn init(
    engine: &InProcessEngine,
    flags: &ContainerFlags,
    transport: Arc<dyn HttpTransport>,
) -> Result<()> {
    let api_url = match engine.configuration().get_string(keys::API_URL) {
        url if url.trim().is_empty() => DEFAULT_API_URL.to_string(),
        url => url,
    };
    tracing::debug!(api_url = %api_url, "initializing container workflows");

    engine.register(Arc::new(DepGraphWorkflow::new(flags.clone())))?;
    engine.register(Arc::new(SbomWorkflow::new(
        flags.clone(),
        HttpSbomClient::new(api_url, transport),
    )))?;

    Ok(())
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::engine::InProcessEngine;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{build_http_client, HttpSbomClient};
    pub use crate::adapters::outbound::process::LegacyCliWorkflow;
    pub use crate::application::dto::{SbomConversionRequest, SbomConversionResult, Subject};
    pub use crate::application::factories::{ErrorFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{DepGraphWorkflow, SbomWorkflow};
    pub use crate::ports::inbound::Workflow;
    pub use crate::ports::outbound::{
        ExitStatusError, HttpTransport, InvocationContext, InvocationFailure, OutputPresenter,
        ProgressReporter, SbomClient, WorkflowEngine, WorkflowResult,
    };
    pub use crate::sbom_generation::domain::{
        keys, BoolFlag, ConfigValue, Configuration, ContainerFlags, DataTypeId, DepGraphRecord,
        Flag, ImageMetadata, LegacyCliError, Payload, StringFlag, WorkflowData, WorkflowId,
    };
    pub use crate::sbom_generation::services::{DepGraphParser, MetadataResolver};
    pub use crate::shared::constants::{DEPGRAPH_WORKFLOW_NAME, SBOM_WORKFLOW_NAME};
    pub use crate::shared::error::{ContainerExtensionError, ErrorKind, ExitCode};
    pub use crate::shared::Result;
}
