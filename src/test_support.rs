//! Test doubles shared by the unit tests of this crate.

use crate::ports::outbound::{InvocationContext, InvocationFailure, WorkflowEngine, WorkflowResult};
use crate::sbom_generation::domain::{Configuration, WorkflowId};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type Handler = dyn Fn(&WorkflowId, &Configuration) -> WorkflowResult + Send + Sync;

/// Engine double answering every invocation through a closure and
/// recording the id and configuration it was invoked with.
pub(crate) struct StubEngine {
    handler: Box<Handler>,
    invocations: Mutex<Vec<(WorkflowId, Configuration)>>,
}

impl StubEngine {
    pub(crate) fn new(
        handler: impl Fn(&WorkflowId, &Configuration) -> WorkflowResult + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            invocations: Mutex::new(Vec::new()),
        })
    }

    /// Engine whose every invocation fails
    pub(crate) fn unreachable() -> Arc<Self> {
        Self::new(|id, _| {
            Err(InvocationFailure::new(anyhow!(
                "unexpected invocation of '{id}'"
            )))
        })
    }

    pub(crate) fn invocations(&self) -> Vec<(WorkflowId, Configuration)> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkflowEngine for StubEngine {
    async fn invoke_with_config(&self, id: &WorkflowId, config: Configuration) -> WorkflowResult {
        let result = (self.handler)(id, &config);
        self.invocations.lock().unwrap().push((id.clone(), config));
        result
    }
}

pub(crate) fn context(config: Configuration, engine: Arc<StubEngine>) -> InvocationContext {
    InvocationContext::new(WorkflowId::new("under test"), config, engine)
}
