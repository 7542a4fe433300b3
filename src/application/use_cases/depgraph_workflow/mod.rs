use crate::application::factories::ErrorFactory;
use crate::ports::inbound::Workflow;
use crate::ports::outbound::{ExitStatusError, InvocationContext, InvocationFailure, WorkflowResult};
use crate::sbom_generation::domain::{
    keys, Configuration, ContainerFlags, DataTypeId, Flag, LegacyCliError, WorkflowData,
    WorkflowId,
};
use crate::sbom_generation::services::DepGraphParser;
use crate::shared::constants::{
    DATA_TYPE_DEPGRAPH, DEPGRAPH_WORKFLOW_NAME, LEGACY_CLI_WORKFLOW_NAME, LEGACY_DEPGRAPH_COMMAND,
};
use async_trait::async_trait;


/// DepGraphWorkflow - produces one depgraph per scanned target
///
/// Runs the legacy CLI through the engine with a command built from the
/// configured flags, then extracts the depgraphs from its output. Single
/// pass: every failure is terminal.
pub struct DepGraphWorkflow {
    id: WorkflowId,
    legacy_cli: WorkflowId,
    flags: ContainerFlags,
}

impl DepGraphWorkflow {
    pub fn new(flags: ContainerFlags) -> Self {
        Self {
            id: WorkflowId::new(DEPGRAPH_WORKFLOW_NAME),
            legacy_cli: WorkflowId::new(LEGACY_CLI_WORKFLOW_NAME),
            flags,
        }
    }

    pub fn type_id(&self) -> DataTypeId {
        DataTypeId::new(self.id.clone(), DATA_TYPE_DEPGRAPH)
    }

    /// Base command, then each flag's rendering, then the positional target.
    ///
    /// Empty renderings are kept here; the legacy CLI adapter drops them.
    pub fn build_cli_command(&self, config: &Configuration) -> Vec<String> {
        LEGACY_DEPGRAPH_COMMAND
            .iter()
            .map(|arg| arg.to_string())
            .chain(self.flags().iter().map(|flag| flag.as_cli_argument(config)))
            .chain(std::iter::once(config.get_string(keys::TARGET_DIRECTORY)))
            .collect()
    }

    /// Surfaces the legacy CLI's own JSON error when it exited unsuccessfully.
    ///
    /// Any other failure, or output that is not the JSON error envelope,
    /// yields `error` unchanged.
    pub fn extract_legacy_cli_error(
        data: &[WorkflowData],
        error: anyhow::Error,
    ) -> anyhow::Error {
        let Some(first) = data.first() else {
            return error;
        };
        if !ExitStatusError::is_in_chain(&error) {
            return error;
        }

        match first.payload().as_bytes().and_then(LegacyCliError::decode) {
            Some(legacy_error) => {
                tracing::debug!(path = %legacy_error.path, "decoded legacy CLI error");
                anyhow::Error::new(legacy_error)
            }
            None => error,
        }
    }
}

#[async_trait]
impl Workflow for DepGraphWorkflow {
    fn identifier(&self) -> &WorkflowId {
        &self.id
    }

    fn flags(&self) -> Vec<&dyn Flag> {
        vec![
            &self.flags.exclude_app_vulns,
            &self.flags.app_vulns,
            &self.flags.debug,
        ]
    }

    async fn run(&self, ctx: InvocationContext, _input: Vec<WorkflowData>) -> WorkflowResult {
        tracing::info!("starting the depgraph workflow");

        // Step 1: Build the legacy CLI command
        let mut config = ctx.config().clone();
        let args = self.build_cli_command(&config);
        tracing::info!(args = ?args, "cli invocation args");
        config.set(keys::RAW_CMD_ARGS, args);

        // Step 2: Run the legacy CLI
        let data = match ctx
            .engine()
            .invoke_with_config(&self.legacy_cli, config)
            .await
        {
            Ok(data) => data,
            Err(failure) => {
                let (error, data) = failure.into_parts();
                tracing::error!("failed to execute depgraph legacy workflow: {:#}", error);
                return Err(InvocationFailure::new(Self::extract_legacy_cli_error(
                    &data, error,
                )));
            }
        };

        // Step 3: Take the captured output
        let Some(first) = data.first().filter(|element| !element.payload().is_nil()) else {
            return Err(ErrorFactory::empty_legacy_payload(data.len()).into());
        };
        let Some(output) = first.payload().as_bytes() else {
            return Err(ErrorFactory::could_not_convert_payload(first.payload().kind()).into());
        };

        // Step 4: Extract the depgraphs
        let records = DepGraphParser::parse(output).map_err(ErrorFactory::could_not_extract_output)?;

        tracing::info!(depgraphs = records.len(), "finished the depgraph workflow");

        let type_id = self.type_id();
        Ok(records
            .into_iter()
            .map(|record| record.into_workflow_data(type_id.clone()))
            .collect())
    }
}
