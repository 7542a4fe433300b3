use crate::sbom_generation::services::DepGraphParseError;
use crate::shared::error::{ContainerExtensionError, ErrorKind};
use anyhow::anyhow;

/// User message shared by every depgraph workflow failure
pub const DEPGRAPH_WORKFLOW_USER_MESSAGE: &str =
    "an error occurred while running the underlying analysis needed to generate the depgraph";

/// Factory for user-facing workflow errors
///
/// Every constructor logs the underlying cause once, at the point where it
/// is wrapped; callers propagate the result without logging it again.
pub struct ErrorFactory;

impl ErrorFactory {
    fn build(
        kind: ErrorKind,
        cause: anyhow::Error,
        user_message: impl Into<String>,
    ) -> ContainerExtensionError {
        tracing::error!(code = %kind.code(), "{:#}", cause);
        ContainerExtensionError::new(kind, cause, user_message)
    }

    // depgraph workflow

    pub fn empty_legacy_payload(elements: usize) -> ContainerExtensionError {
        Self::build(
            ErrorKind::EmptyLegacyPayload,
            anyhow!("empty legacy depgraph workflow payload response (elements: {elements})"),
            DEPGRAPH_WORKFLOW_USER_MESSAGE,
        )
    }

    pub fn could_not_convert_payload(payload_kind: &str) -> ContainerExtensionError {
        Self::build(
            ErrorKind::CouldNotConvertPayload,
            anyhow!("could not convert payload, expected bytes, but got '{payload_kind}'"),
            DEPGRAPH_WORKFLOW_USER_MESSAGE,
        )
    }

    /// Wraps a parser failure; the parse error keeps its own code as inner cause
    pub fn could_not_extract_output(error: DepGraphParseError) -> ContainerExtensionError {
        let inner = Self::parse_error(error);
        Self::build(
            ErrorKind::CouldNotExtractOutput,
            anyhow::Error::new(inner).context("could not extract depGraphs from CLI output"),
            DEPGRAPH_WORKFLOW_USER_MESSAGE,
        )
    }

    fn parse_error(error: DepGraphParseError) -> ContainerExtensionError {
        let kind = match error {
            DepGraphParseError::EmptyOutput => ErrorKind::EmptyOutput,
            DepGraphParseError::MalformedOutput => ErrorKind::MalformedOutput,
        };
        ContainerExtensionError::new(kind, error, DEPGRAPH_WORKFLOW_USER_MESSAGE)
    }

    // sbom workflow

    pub fn empty_sbom_format(valid_formats: &[&str]) -> ContainerExtensionError {
        Self::build(
            ErrorKind::EmptySbomFormat,
            anyhow!("no format provided"),
            format!(
                "Must set `--format` flag to specify an SBOM format. Available formats are: {}",
                valid_formats.join(", ")
            ),
        )
    }

    pub fn invalid_sbom_format(invalid: &str, valid_formats: &[&str]) -> ContainerExtensionError {
        Self::build(
            ErrorKind::InvalidSbomFormat,
            anyhow!("invalid format provided ({invalid})"),
            format!(
                "The format provided ({invalid}) is not one of the available formats. Available formats are: {}",
                valid_formats.join(", ")
            ),
        )
    }

    pub fn invalid_platform(invalid: &str, valid_platforms: &[&str]) -> ContainerExtensionError {
        Self::build(
            ErrorKind::InvalidPlatform,
            anyhow!("invalid platform provided ({invalid})"),
            format!(
                "The platform provided ({invalid}) is not one of the available platforms. Available platforms are: {}",
                valid_platforms.join(", ")
            ),
        )
    }

    pub fn empty_org() -> ContainerExtensionError {
        Self::build(
            ErrorKind::EmptyOrg,
            anyhow!("no organization id configured"),
            "Snyk failed to infer an organization ID. Please make sure to authenticate using `snyk auth`. \
             Should the issue persist, explicitly set an organization ID via the `--org` flag.",
        )
    }

    pub fn depgraph_workflow(error: impl Into<anyhow::Error>) -> ContainerExtensionError {
        Self::build(
            ErrorKind::DepGraphWorkflow,
            error.into().context("error while invoking depgraph workflow"),
            "An error occurred while running the underlying analysis needed to generate the SBOM.",
        )
    }

    pub fn internal(error: impl Into<anyhow::Error>) -> ContainerExtensionError {
        Self::build(
            ErrorKind::Internal,
            error.into(),
            "An error occurred while running the underlying analysis which is required to generate the SBOM. \
             Should this issue persist, please reach out to customer support.",
        )
    }

    pub fn remote(error: impl Into<anyhow::Error>) -> ContainerExtensionError {
        Self::build(
            ErrorKind::Remote,
            error.into(),
            "An error occurred while generating the SBOM. \
             Should this issue persist, please reach out to customer support.",
        )
    }

    pub fn bad_request(error: impl Into<anyhow::Error>) -> ContainerExtensionError {
        Self::build(
            ErrorKind::BadRequest,
            error.into(),
            "SBOM generation failed due to bad input arguments. \
             Please make sure you are using the latest version of the Snyk CLI.",
        )
    }

    pub fn unauthorized(error: impl Into<anyhow::Error>) -> ContainerExtensionError {
        Self::build(
            ErrorKind::Unauthorized,
            error.into(),
            "Snyk failed to authenticate you based on your API token. \
             Please ensure that you have authenticated by running `snyk auth`.",
        )
    }

    pub fn forbidden(error: impl Into<anyhow::Error>, org_id: &str) -> ContainerExtensionError {
        Self::build(
            ErrorKind::Forbidden,
            error.into(),
            format!(
                "Your account is not authorized to perform this action. \
                 Please ensure that you belong to the given organization and that \
                 the organization is entitled to use the Snyk API. (Org ID: {org_id})"
            ),
        )
    }
}
