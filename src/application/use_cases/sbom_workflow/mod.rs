use crate::application::dto::SbomConversionRequest;
use crate::application::factories::ErrorFactory;
use crate::ports::inbound::Workflow;
use crate::ports::outbound::{InvocationContext, SbomClient, WorkflowResult};
use crate::sbom_generation::domain::{
    keys, ContainerFlags, DataTypeId, Flag, WorkflowData, WorkflowId,
};
use crate::sbom_generation::services::MetadataResolver;
use crate::shared::constants::{
    DATA_TYPE_SBOM, DEPGRAPH_WORKFLOW_NAME, SBOM_VALID_FORMATS, SBOM_WORKFLOW_NAME,
    VALID_PLATFORMS,
};
use crate::shared::error::ContainerExtensionError;
use async_trait::async_trait;


/// SbomWorkflow - converts the depgraphs of a target into an SBOM document
///
/// Validates its inputs before any I/O, delegates depgraph creation to the
/// depgraph workflow and the conversion to the injected client.
///
/// # Type Parameters
/// * `C` - SbomClient implementation
pub struct SbomWorkflow<C> {
    id: WorkflowId,
    depgraph: WorkflowId,
    flags: ContainerFlags,
    sbom_client: C,
}

impl<C: SbomClient> SbomWorkflow<C> {
    pub fn new(flags: ContainerFlags, sbom_client: C) -> Self {
        Self {
            id: WorkflowId::new(SBOM_WORKFLOW_NAME),
            depgraph: WorkflowId::new(DEPGRAPH_WORKFLOW_NAME),
            flags,
            sbom_client,
        }
    }

    pub fn type_id(&self) -> DataTypeId {
        DataTypeId::new(self.id.clone(), DATA_TYPE_SBOM)
    }

    fn validate_format(format: &str) -> Result<(), ContainerExtensionError> {
        if format.trim().is_empty() {
            return Err(ErrorFactory::empty_sbom_format(SBOM_VALID_FORMATS));
        }
        if !SBOM_VALID_FORMATS.contains(&format) {
            return Err(ErrorFactory::invalid_sbom_format(format, SBOM_VALID_FORMATS));
        }
        Ok(())
    }

    /// Blank means no platform; anything else must be a known platform
    fn validate_platform(platform: &str) -> Result<Option<&str>, ContainerExtensionError> {
        if platform.trim().is_empty() {
            return Ok(None);
        }
        if !VALID_PLATFORMS.contains(&platform) {
            return Err(ErrorFactory::invalid_platform(platform, VALID_PLATFORMS));
        }
        Ok(Some(platform))
    }
}

#[async_trait]
impl<C: SbomClient> Workflow for SbomWorkflow<C> {
    fn identifier(&self) -> &WorkflowId {
        &self.id
    }

    fn flags(&self) -> Vec<&dyn Flag> {
        vec![
            &self.flags.sbom_format,
            &self.flags.exclude_app_vulns,
            &self.flags.platform,
        ]
    }

    async fn run(&self, ctx: InvocationContext, _input: Vec<WorkflowData>) -> WorkflowResult {
        tracing::info!("starting the sbom workflow");
        let config = ctx.config();

        // Step 1: Validate the output format
        tracing::debug!("getting the sbom format");
        let format = self.flags.sbom_format.value(config);
        Self::validate_format(&format)?;

        // Step 2: Validate the platform
        tracing::debug!("getting the platform");
        let platform = self.flags.platform.value(config);
        let platform = Self::validate_platform(&platform)?;

        // Step 3: Resolve the organization
        tracing::debug!("getting preferred organization id");
        let org_id = config.get_string(keys::ORGANIZATION);
        if org_id.trim().is_empty() {
            return Err(ErrorFactory::empty_org().into());
        }

        // Step 4: Build the depgraphs on a snapshot of the configuration
        tracing::debug!("invoking depgraph workflow");
        let depgraphs = ctx
            .engine()
            .invoke_with_config(&self.depgraph, config.clone())
            .await
            .map_err(|failure| ErrorFactory::depgraph_workflow(failure.into_error()))?;

        // Step 5: Resolve the SBOM subject
        let target = config.get_string(keys::TARGET_DIRECTORY);
        let metadata =
            MetadataResolver::resolve(&target).map_err(ErrorFactory::depgraph_workflow)?;
        tracing::debug!(name = %metadata.name, version = %metadata.version, "resolved image metadata");

        // Step 6: Assemble the conversion request
        let request = SbomConversionRequest::from_depgraphs(&depgraphs, metadata)
            .map_err(ErrorFactory::depgraph_workflow)?;

        // Step 7: Convert
        let result = self
            .sbom_client
            .get_sbom_for_depgraph(&org_id, &format, platform, &request)
            .await?;

        tracing::info!("successfully generated SBOM document");
        Ok(vec![result.into_workflow_data(self.type_id())])
    }
}
