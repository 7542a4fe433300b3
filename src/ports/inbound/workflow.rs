use crate::ports::outbound::{InvocationContext, WorkflowResult};
use crate::sbom_generation::domain::{Flag, WorkflowData, WorkflowId};
use async_trait::async_trait;

/// Workflow - Inbound port for a unit of work registered with the engine
///
/// A workflow declares its identifier and the flags it reads, and is run
/// with an invocation context plus the input data handed over by its caller.
#[async_trait]
pub trait Workflow: Send + Sync {
    /// Identifier the workflow is registered and invoked under
    fn identifier(&self) -> &WorkflowId;

    /// Flags the workflow reads from the configuration
    ///
    /// Their defaults are written into the engine configuration at
    /// registration time.
    fn flags(&self) -> Vec<&dyn Flag>;

    /// Runs the workflow
    ///
    /// # Arguments
    /// * `ctx` - Invocation context (configuration snapshot and engine handle)
    /// * `input` - Data handed over by the caller, usually empty
    ///
    /// # Returns
    /// The produced data, or a failure that may carry data alongside the error
    async fn run(&self, ctx: InvocationContext, input: Vec<WorkflowData>) -> WorkflowResult;
}
