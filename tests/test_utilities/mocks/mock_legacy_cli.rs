use async_trait::async_trait;
use container_cli::prelude::*;
use container_cli::shared::constants::{
    CONTENT_TYPE_TEXT, DATA_TYPE_LEGACY_OUTPUT, LEGACY_CLI_WORKFLOW_NAME,
};
use std::sync::{Arc, Mutex};

enum Reply {
    Output(Vec<u8>),
    Nil,
    ExitFailure(i32, Vec<u8>),
    SpawnFailure,
}

/// Mock legacy CLI workflow for testing
///
/// Registered under the legacy CLI identifier in place of the subprocess
/// adapter. Answers every invocation with a canned reply and records the
/// configuration it was invoked with.
#[derive(Clone)]
pub struct MockLegacyCli {
    id: WorkflowId,
    reply: Arc<Reply>,
    invocations: Arc<Mutex<Vec<Configuration>>>,
}

impl MockLegacyCli {
    fn replying(reply: Reply) -> Self {
        Self {
            id: WorkflowId::new(LEGACY_CLI_WORKFLOW_NAME),
            reply: Arc::new(reply),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Exits successfully, printing `stdout`
    pub fn with_output(stdout: &[u8]) -> Self {
        Self::replying(Reply::Output(stdout.to_vec()))
    }

    /// Succeeds with a single nil element
    pub fn with_nil_output() -> Self {
        Self::replying(Reply::Nil)
    }

    /// Exits with `code`, printing `stdout`
    pub fn with_exit_failure(code: i32, stdout: &[u8]) -> Self {
        Self::replying(Reply::ExitFailure(code, stdout.to_vec()))
    }

    /// Fails before running, as a missing binary would
    pub fn with_spawn_failure() -> Self {
        Self::replying(Reply::SpawnFailure)
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }

    /// Non-empty argument tokens of the last invocation
    pub fn last_args(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap()
            .last()
            .map(|config| config.get_list(keys::RAW_CMD_ARGS))
            .unwrap_or_default()
            .into_iter()
            .filter(|arg| !arg.is_empty())
            .collect()
    }

    fn data(&self, payload: Payload) -> WorkflowData {
        WorkflowData::new(
            DataTypeId::new(self.id.clone(), DATA_TYPE_LEGACY_OUTPUT),
            CONTENT_TYPE_TEXT,
            payload,
        )
    }
}

#[async_trait]
impl Workflow for MockLegacyCli {
    fn identifier(&self) -> &WorkflowId {
        &self.id
    }

    fn flags(&self) -> Vec<&dyn Flag> {
        Vec::new()
    }

    async fn run(&self, ctx: InvocationContext, _input: Vec<WorkflowData>) -> WorkflowResult {
        self.invocations.lock().unwrap().push(ctx.config().clone());

        match self.reply.as_ref() {
            Reply::Output(stdout) => Ok(vec![self.data(Payload::Bytes(stdout.clone()))]),
            Reply::Nil => Ok(vec![self.data(Payload::Nil)]),
            Reply::ExitFailure(code, stdout) => Err(InvocationFailure::with_data(
                ExitStatusError::new(Some(*code)),
                vec![self.data(Payload::Bytes(stdout.clone()))],
            )),
            Reply::SpawnFailure => Err(InvocationFailure::new(anyhow::anyhow!(
                "failed to spawn legacy CLI 'snyk'"
            ))),
        }
    }
}
