/// Data Transfer Objects for application layer
///
/// DTOs carry data between the workflows and the outbound adapters,
/// keeping the domain layer isolated.
mod sbom_request;
mod sbom_response;

pub use sbom_request::{SbomConversionRequest, Subject};
pub use sbom_response::SbomConversionResult;
