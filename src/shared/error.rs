use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the workflow produced its output
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (workflow, subprocess, API or file I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Diagnostic prefix of errors raised by the depgraph workflow.
pub const DEPGRAPH_WORKFLOW_ERR_CODE: &str = "DG";
/// Diagnostic prefix of errors raised by the SBOM workflow.
pub const SBOM_WORKFLOW_ERR_CODE: &str = "SB";

/// Every failure class a workflow can surface to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // depgraph workflow
    EmptyLegacyPayload,
    CouldNotConvertPayload,
    CouldNotExtractOutput,
    EmptyOutput,
    MalformedOutput,
    // sbom workflow
    EmptySbomFormat,
    InvalidSbomFormat,
    InvalidPlatform,
    EmptyOrg,
    DepGraphWorkflow,
    Internal,
    Remote,
    BadRequest,
    Unauthorized,
    Forbidden,
}

impl ErrorKind {
    pub fn workflow_code(self) -> &'static str {
        match self {
            ErrorKind::EmptyLegacyPayload
            | ErrorKind::CouldNotConvertPayload
            | ErrorKind::CouldNotExtractOutput
            | ErrorKind::EmptyOutput
            | ErrorKind::MalformedOutput => DEPGRAPH_WORKFLOW_ERR_CODE,
            _ => SBOM_WORKFLOW_ERR_CODE,
        }
    }

    pub fn number(self) -> u16 {
        match self {
            ErrorKind::EmptyLegacyPayload => 0,
            ErrorKind::CouldNotConvertPayload => 1,
            ErrorKind::CouldNotExtractOutput => 2,
            ErrorKind::EmptyOutput => 3,
            ErrorKind::MalformedOutput => 4,
            ErrorKind::EmptySbomFormat => 0,
            ErrorKind::InvalidSbomFormat => 1,
            ErrorKind::InvalidPlatform => 2,
            ErrorKind::EmptyOrg => 3,
            ErrorKind::DepGraphWorkflow => 4,
            ErrorKind::Internal => 5,
            ErrorKind::Remote => 6,
            ErrorKind::BadRequest => 7,
            ErrorKind::Unauthorized => 8,
            ErrorKind::Forbidden => 9,
        }
    }

    /// Code of this kind alone, e.g. `DG4`.
    pub fn code(self) -> String {
        format!("{}{}", self.workflow_code(), self.number())
    }
}

/// User-facing workflow error.
///
/// `Display` yields only the user message, which is always safe to print.
/// The underlying cause is kept as the error source for logs. When the cause
/// is itself a `ContainerExtensionError`, the diagnostic codes compose
/// (`SB4+DG2+DG4`); use [`ContainerExtensionError::render`] at the
/// presentation boundary to append them.
#[derive(Debug, Error)]
#[error("{user_message}")]
pub struct ContainerExtensionError {
    kind: ErrorKind,
    user_message: String,
    #[source]
    source: anyhow::Error,
}

impl ContainerExtensionError {
    pub fn new(
        kind: ErrorKind,
        source: impl Into<anyhow::Error>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            user_message: user_message.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// The cause this error was built from (log detail, not for end users).
    pub fn underlying(&self) -> &anyhow::Error {
        &self.source
    }

    /// The nearest `ContainerExtensionError` in the cause chain, if any.
    pub fn inner(&self) -> Option<&ContainerExtensionError> {
        self.source
            .chain()
            .find_map(|cause| cause.downcast_ref::<ContainerExtensionError>())
    }

    /// Compound diagnostic code: own code followed by every wrapped code.
    pub fn diagnostic_code(&self) -> String {
        match self.inner() {
            Some(inner) => format!("{}+{}", self.kind.code(), inner.diagnostic_code()),
            None => self.kind.code(),
        }
    }

    /// User message with the compound diagnostic code appended.
    pub fn render(&self) -> String {
        format!("{} [ERR#{}]", self.user_message, self.diagnostic_code())
    }
}

/// Errors raised while presenting workflow output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to write to stdout: {0}")]
    StdoutWriteError(#[from] std::io::Error),
}
