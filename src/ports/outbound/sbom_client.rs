use crate::application::dto::{SbomConversionRequest, SbomConversionResult};
use crate::shared::error::ContainerExtensionError;
use async_trait::async_trait;

/// SbomClient port for the remote depgraph to SBOM conversion
#[async_trait]
pub trait SbomClient: Send + Sync {
    /// Converts the depgraphs in `request` to an SBOM document
    ///
    /// # Arguments
    /// * `org_id` - Organization the conversion runs under
    /// * `format` - SBOM format, e.g. `cyclonedx1.4+json`
    /// * `platform` - Optional platform of a multi-architecture image
    /// * `request` - Depgraphs and subject of the SBOM
    ///
    /// # Errors
    /// Every failure is already classified and carries a user message.
    async fn get_sbom_for_depgraph(
        &self,
        org_id: &str,
        format: &str,
        platform: Option<&str>,
        request: &SbomConversionRequest,
    ) -> std::result::Result<SbomConversionResult, ContainerExtensionError>;
}
