use crate::ports::inbound::Workflow;
use crate::ports::outbound::{ExitStatusError, InvocationContext, InvocationFailure, WorkflowResult};
use crate::sbom_generation::domain::{keys, DataTypeId, Flag, Payload, WorkflowData, WorkflowId};
use crate::shared::constants::{
    CONTENT_TYPE_TEXT, DATA_TYPE_LEGACY_OUTPUT, DEFAULT_LEGACY_CLI, LEGACY_CLI_WORKFLOW_NAME,
};
use anyhow::Context;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// LegacyCliWorkflow adapter running the legacy scanner binary
///
/// Arguments come from the `raw_cmd_args` configuration key, empty tokens
/// dropped. Stdout is captured and returned as one byte payload; stderr goes
/// straight to the user's terminal.
pub struct LegacyCliWorkflow {
    id: WorkflowId,
}

impl LegacyCliWorkflow {
    pub fn new() -> Self {
        Self {
            id: WorkflowId::new(LEGACY_CLI_WORKFLOW_NAME),
        }
    }
}

impl Default for LegacyCliWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Workflow for LegacyCliWorkflow {
    fn identifier(&self) -> &WorkflowId {
        &self.id
    }

    fn flags(&self) -> Vec<&dyn Flag> {
        Vec::new()
    }

    async fn run(&self, ctx: InvocationContext, _input: Vec<WorkflowData>) -> WorkflowResult {
        let config = ctx.config();

        let mut binary = config.get_string(keys::LEGACY_CLI_PATH);
        if binary.trim().is_empty() {
            binary = DEFAULT_LEGACY_CLI.to_string();
        }

        let args: Vec<String> = config
            .get_list(keys::RAW_CMD_ARGS)
            .into_iter()
            .filter(|arg| !arg.is_empty())
            .collect();

        tracing::debug!(binary = %binary, args = ?args, "running legacy CLI");

        let output = Command::new(&binary)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .await
            .with_context(|| format!("failed to spawn legacy CLI '{binary}'"))?;

        let data = WorkflowData::new(
            DataTypeId::new(self.id.clone(), DATA_TYPE_LEGACY_OUTPUT),
            CONTENT_TYPE_TEXT,
            Payload::Bytes(output.stdout),
        );

        if !output.status.success() {
            tracing::debug!(status = %output.status, "legacy CLI exited unsuccessfully");
            return Err(InvocationFailure::with_data(
                ExitStatusError::new(output.status.code()),
                vec![data],
            ));
        }

        Ok(vec![data])
    }
}
