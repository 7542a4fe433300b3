use crate::sbom_generation::domain::{Configuration, WorkflowData, WorkflowId};
use crate::shared::error::ContainerExtensionError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a workflow invocation
pub type WorkflowResult = std::result::Result<Vec<WorkflowData>, InvocationFailure>;

/// WorkflowEngine port for invoking registered workflows
///
/// The engine owns the workflow registry and the base configuration;
/// callers hand it the configuration snapshot the invocation should see.
#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// Invokes the workflow registered under `id` with `config`
    ///
    /// # Errors
    /// Returns a failure if no workflow is registered under `id`, or
    /// whatever failure the workflow itself returns.
    async fn invoke_with_config(&self, id: &WorkflowId, config: Configuration) -> WorkflowResult;
}

/// Everything a running workflow receives from the engine
#[derive(Clone)]
pub struct InvocationContext {
    workflow_id: WorkflowId,
    config: Configuration,
    engine: Arc<dyn WorkflowEngine>,
}

impl InvocationContext {
    pub fn new(
        workflow_id: WorkflowId,
        config: Configuration,
        engine: Arc<dyn WorkflowEngine>,
    ) -> Self {
        Self {
            workflow_id,
            config,
            engine,
        }
    }

    pub fn workflow_id(&self) -> &WorkflowId {
        &self.workflow_id
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn engine(&self) -> &Arc<dyn WorkflowEngine> {
        &self.engine
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("workflow_id", &self.workflow_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A failed invocation: the error plus any data produced before failing.
///
/// The legacy CLI, for instance, returns its captured output next to the
/// exit status error so callers can decode a structured error from it.
#[derive(Debug)]
pub struct InvocationFailure {
    error: anyhow::Error,
    data: Vec<WorkflowData>,
}

impl InvocationFailure {
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            data: Vec::new(),
        }
    }

    pub fn with_data(error: impl Into<anyhow::Error>, data: Vec<WorkflowData>) -> Self {
        Self {
            error: error.into(),
            data,
        }
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }

    pub fn data(&self) -> &[WorkflowData] {
        &self.data
    }

    pub fn into_parts(self) -> (anyhow::Error, Vec<WorkflowData>) {
        (self.error, self.data)
    }

    pub fn into_error(self) -> anyhow::Error {
        self.error
    }
}

impl fmt::Display for InvocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ContainerExtensionError> for InvocationFailure {
    fn from(error: ContainerExtensionError) -> Self {
        Self::new(error)
    }
}

impl From<anyhow::Error> for InvocationFailure {
    fn from(error: anyhow::Error) -> Self {
        Self::new(error)
    }
}

/// The legacy CLI ran but exited unsuccessfully.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("legacy CLI exited with {}", describe_code(.code))]
pub struct ExitStatusError {
    pub code: Option<i32>,
}

impl ExitStatusError {
    pub fn new(code: Option<i32>) -> Self {
        Self { code }
    }

    /// Whether `error` is, or wraps, an exit status error
    pub fn is_in_chain(error: &anyhow::Error) -> bool {
        error.chain().any(|cause| cause.is::<ExitStatusError>())
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
