//! Configuration file support for container-cli.
//!
//! Provides YAML-based configuration through `container-cli.config.yml` files,
//! and merges file values with command-line arguments into the engine
//! configuration.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use container_cli::sbom_generation::domain::{keys, Configuration};
use container_cli::shared::Result;

use crate::cli::{Args, Command};

pub const CONFIG_FILENAME: &str = "container-cli.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub org: Option<String>,
    pub api_url: Option<String>,
    pub legacy_cli: Option<String>,
    pub format: Option<String>,
    pub platform: Option<String>,
    pub exclude_app_vulns: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Loads the explicit config file, or discovers one in the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir().context("Failed to read the current directory")?;
            discover_config(&cwd)
        }
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref api_url) = config.api_url {
        let parsed = reqwest::Url::parse(api_url);
        if !matches!(parsed.as_ref().map(|url| url.scheme()), Ok("http" | "https")) {
            bail!(
                "Invalid config: api_url '{}' is not an http(s) URL.\n\n\
                 💡 Hint: Use a base URL such as \"https://api.snyk.io\".",
                api_url
            );
        }
    }
    if let Some(ref legacy_cli) = config.legacy_cli {
        if legacy_cli.trim().is_empty() {
            bail!(
                "Invalid config: legacy_cli must not be empty.\n\n\
                 💡 Hint: Remove the field to use the legacy CLI found on PATH."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Builds the engine configuration: file values first, explicit command-line
/// arguments on top.
pub fn build_configuration(args: &Args, file: Option<ConfigFile>) -> Configuration {
    let file = file.unwrap_or_default();
    let mut config = Configuration::new();

    if let Some(org) = args.org.clone().or(file.org) {
        config.set(keys::ORGANIZATION, org);
    }
    if let Some(api_url) = args.api_url.clone().or(file.api_url) {
        config.set(keys::API_URL, api_url);
    }
    if let Some(legacy_cli) = args.legacy_cli.clone().or(file.legacy_cli) {
        config.set(keys::LEGACY_CLI_PATH, legacy_cli);
    }
    if args.debug {
        config.set("debug", true);
    }

    config.set(keys::TARGET_DIRECTORY, args.command.target());

    let file_excludes_app_vulns = file.exclude_app_vulns.unwrap_or(false);
    match &args.command {
        Command::Depgraph(depgraph) => {
            config.set(
                "exclude-app-vulns",
                depgraph.exclude_app_vulns || file_excludes_app_vulns,
            );
            config.set("app-vulns", depgraph.app_vulns);
        }
        Command::Sbom(sbom) => {
            config.set(
                "exclude-app-vulns",
                sbom.exclude_app_vulns || file_excludes_app_vulns,
            );
            if let Some(format) = sbom.format.clone().or(file.format) {
                config.set("format", format);
            }
            if let Some(platform) = sbom.platform.clone().or(file.platform) {
                config.set("platform", platform);
            }
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
org: my-org
api_url: https://api.example.com
legacy_cli: /usr/local/bin/snyk
format: spdx2.3+json
platform: linux/arm64
exclude_app_vulns: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.org.as_deref(), Some("my-org"));
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.legacy_cli.as_deref(), Some("/usr/local/bin/snyk"));
        assert_eq!(config.format.as_deref(), Some("spdx2.3+json"));
        assert_eq!(config.platform.as_deref(), Some("linux/arm64"));
        assert_eq!(config.exclude_app_vulns, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "org: found-org\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.org.as_deref(), Some("found-org"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_api_url_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "api_url: ftp://example.com\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("is not an http(s) URL"));
    }

    #[test]
    fn test_empty_legacy_cli_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "legacy_cli: \"  \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("legacy_cli must not be empty"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "org: a\nunknown_field: true\nanother_unknown: value\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_build_configuration_from_arguments() {
        let args = parse(&[
            "container-cli",
            "--org",
            "cli-org",
            "sbom",
            "-f",
            "cyclonedx1.4+json",
            "alpine:3.17.0",
        ]);

        let config = build_configuration(&args, None);

        assert_eq!(config.get_string(keys::ORGANIZATION), "cli-org");
        assert_eq!(config.get_string(keys::TARGET_DIRECTORY), "alpine:3.17.0");
        assert_eq!(config.get_string("format"), "cyclonedx1.4+json");
        assert!(!config.contains("platform"));
        assert!(!config.contains(keys::API_URL));
        assert!(!config.get_bool("exclude-app-vulns"));
    }

    #[test]
    fn test_arguments_override_file_values() {
        let args = parse(&[
            "container-cli",
            "--org",
            "cli-org",
            "sbom",
            "--platform",
            "linux/amd64",
            "alpine",
        ]);
        let file = ConfigFile {
            org: Some("file-org".to_string()),
            api_url: Some("http://localhost:9000".to_string()),
            format: Some("spdx2.3+json".to_string()),
            platform: Some("linux/arm64".to_string()),
            exclude_app_vulns: Some(true),
            ..ConfigFile::default()
        };

        let config = build_configuration(&args, Some(file));

        assert_eq!(config.get_string(keys::ORGANIZATION), "cli-org");
        assert_eq!(config.get_string(keys::API_URL), "http://localhost:9000");
        assert_eq!(config.get_string("format"), "spdx2.3+json");
        assert_eq!(config.get_string("platform"), "linux/amd64");
        assert!(config.get_bool("exclude-app-vulns"));
    }

    #[test]
    fn test_build_configuration_for_depgraph() {
        let args = parse(&[
            "container-cli",
            "--debug",
            "--legacy-cli",
            "/opt/snyk",
            "depgraph",
            "--app-vulns",
            "image.tar",
        ]);

        let config = build_configuration(&args, None);

        assert!(config.get_bool("debug"));
        assert!(config.get_bool("app-vulns"));
        assert_eq!(config.get_string(keys::LEGACY_CLI_PATH), "/opt/snyk");
        assert_eq!(config.get_string(keys::TARGET_DIRECTORY), "image.tar");
        assert!(!config.contains("format"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.org.is_none());
        assert!(config.api_url.is_none());
        assert!(config.legacy_cli.is_none());
        assert!(config.format.is_none());
        assert!(config.platform.is_none());
        assert!(config.exclude_app_vulns.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
