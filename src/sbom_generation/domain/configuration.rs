use std::collections::HashMap;

/// Well-known configuration keys shared with the host engine
pub mod keys {
    /// Organization id the SBOM conversion runs under
    pub const ORGANIZATION: &str = "org";
    /// Base URL of the remote API
    pub const API_URL: &str = "snyk_api";
    /// Argument list handed to the legacy CLI
    pub const RAW_CMD_ARGS: &str = "raw_cmd_args";
    /// Positional target: image reference, archive or directory
    pub const TARGET_DIRECTORY: &str = "targetDirectory";
    /// Executable of the legacy CLI
    pub const LEGACY_CLI_PATH: &str = "legacy_cli_path";
}

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    String(String),
    List(Vec<String>),
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        ConfigValue::List(value)
    }
}

/// Configuration snapshot handed to every workflow invocation.
///
/// Values are owned, so `clone()` yields a fully independent snapshot:
/// a nested invocation can set keys on its copy without the caller
/// observing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    values: HashMap<String, ConfigValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Sets `key` only when it holds no value yet
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// String value of `key`; empty when unset or not a scalar
    pub fn get_string(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(ConfigValue::String(value)) => value.clone(),
            Some(ConfigValue::Bool(value)) => value.to_string(),
            Some(ConfigValue::List(_)) | None => String::new(),
        }
    }

    /// Boolean value of `key`; `false` when unset or unparsable
    pub fn get_bool(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(ConfigValue::Bool(value)) => *value,
            Some(ConfigValue::String(value)) => value.trim().parse().unwrap_or(false),
            Some(ConfigValue::List(_)) | None => false,
        }
    }

    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.values.get(key) {
            Some(ConfigValue::List(values)) => values.clone(),
            Some(ConfigValue::String(value)) if !value.is_empty() => vec![value.clone()],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_string_unset_is_empty() {
        let config = Configuration::new();
        assert_eq!(config.get_string(keys::ORGANIZATION), "");
        assert!(!config.contains(keys::ORGANIZATION));
    }

    #[test]
    fn test_get_bool_from_string() {
        let mut config = Configuration::new();
        config.set("a", "true");
        config.set("b", "nope");
        config.set("c", true);
        assert!(config.get_bool("a"));
        assert!(!config.get_bool("b"));
        assert!(config.get_bool("c"));
        assert!(!config.get_bool("missing"));
    }

    #[test]
    fn test_set_default_does_not_overwrite() {
        let mut config = Configuration::new();
        config.set("format", "spdx2.3+json");
        config.set_default("format", "");
        config.set_default("platform", "");
        assert_eq!(config.get_string("format"), "spdx2.3+json");
        assert!(config.contains("platform"));
    }

    #[test]
    fn test_get_list() {
        let mut config = Configuration::new();
        config.set(
            keys::RAW_CMD_ARGS,
            vec!["container".to_string(), "test".to_string()],
        );
        assert_eq!(config.get_list(keys::RAW_CMD_ARGS), vec!["container", "test"]);
        assert!(config.get_list("missing").is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Configuration::new();
        original.set(keys::ORGANIZATION, "org-a");

        let mut copy = original.clone();
        copy.set(keys::ORGANIZATION, "org-b");
        copy.set(keys::RAW_CMD_ARGS, vec!["x".to_string()]);

        assert_eq!(original.get_string(keys::ORGANIZATION), "org-a");
        assert!(!original.contains(keys::RAW_CMD_ARGS));
    }
}
