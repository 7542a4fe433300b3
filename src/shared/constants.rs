//! Identifiers, content types and the fixed value sets shared by the workflows.

pub const DATA_TYPE_SBOM: &str = "sbom";
pub const DATA_TYPE_DEPGRAPH: &str = "depgraph";
pub const DATA_TYPE_LEGACY_OUTPUT: &str = "stdout";

pub const DEPGRAPH_WORKFLOW_NAME: &str = "container depgraph";
pub const SBOM_WORKFLOW_NAME: &str = "container sbom";
pub const LEGACY_CLI_WORKFLOW_NAME: &str = "legacycli";

pub const HEADER_CONTENT_LOCATION: &str = "Content-Location";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Version of the hidden SBOM conversion endpoint.
pub const SBOM_API_VERSION: &str = "2022-03-31~experimental";

pub const DEFAULT_API_URL: &str = "https://api.snyk.io";
pub const DEFAULT_LEGACY_CLI: &str = "snyk";

/// Arguments the legacy CLI is always invoked with, ahead of flags and target.
pub const LEGACY_DEPGRAPH_COMMAND: [&str; 4] = ["container", "test", "--print-graph", "--json"];

pub const SBOM_VALID_FORMATS: &[&str] = &[
    "cyclonedx1.4+json",
    "cyclonedx1.4+xml",
    "cyclonedx1.5+json",
    "cyclonedx1.5+xml",
    "cyclonedx1.6+json",
    "cyclonedx1.6+xml",
    "spdx2.3+json",
];

pub const VALID_PLATFORMS: &[&str] = &[
    "linux/amd64",
    "linux/arm64",
    "linux/riscv64",
    "linux/ppc64le",
    "linux/s390x",
    "linux/386",
    "linux/arm/v7",
    "linux/arm/v6",
];
