use super::configuration::{ConfigValue, Configuration};
use crate::shared::constants::{SBOM_VALID_FORMATS, VALID_PLATFORMS};
use std::fmt;

/// A command-line flag backed by a configuration key of the same name.
pub trait Flag: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn shorthand(&self) -> Option<char>;

    fn usage(&self) -> &str;

    /// Value registered into the configuration when the flag is unset
    fn default_value(&self) -> ConfigValue;

    /// Renders the flag as a CLI argument for the given configuration.
    ///
    /// May return an empty string; callers drop empty tokens.
    fn as_cli_argument(&self, config: &Configuration) -> String;
}

/// Boolean flag, rendered as bare `--name` when set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolFlag {
    name: String,
    shorthand: Option<char>,
    default: bool,
    usage: String,
}

impl BoolFlag {
    pub fn new(name: impl Into<String>, default: bool, usage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shorthand: None,
            default,
            usage: usage.into(),
        }
    }

    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    pub fn value(&self, config: &Configuration) -> bool {
        if config.contains(&self.name) {
            config.get_bool(&self.name)
        } else {
            self.default
        }
    }
}

impl Flag for BoolFlag {
    fn name(&self) -> &str {
        &self.name
    }

    fn shorthand(&self) -> Option<char> {
        self.shorthand
    }

    fn usage(&self) -> &str {
        &self.usage
    }

    fn default_value(&self) -> ConfigValue {
        ConfigValue::Bool(self.default)
    }

    fn as_cli_argument(&self, config: &Configuration) -> String {
        if self.value(config) {
            format!("--{}", self.name)
        } else {
            String::new()
        }
    }
}

/// String flag, always rendered as `--name=value`, even for an empty value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringFlag {
    name: String,
    shorthand: Option<char>,
    default: String,
    usage: String,
}

impl StringFlag {
    pub fn new(
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shorthand: None,
            default: default.into(),
            usage: usage.into(),
        }
    }

    pub fn with_shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    pub fn value(&self, config: &Configuration) -> String {
        if config.contains(&self.name) {
            config.get_string(&self.name)
        } else {
            self.default.clone()
        }
    }
}

impl Flag for StringFlag {
    fn name(&self) -> &str {
        &self.name
    }

    fn shorthand(&self) -> Option<char> {
        self.shorthand
    }

    fn usage(&self) -> &str {
        &self.usage
    }

    fn default_value(&self) -> ConfigValue {
        ConfigValue::String(self.default.clone())
    }

    fn as_cli_argument(&self, config: &Configuration) -> String {
        format!("--{}={}", self.name, self.value(config))
    }
}

/// Flag registry, built once at start-up and handed to each workflow.
#[derive(Debug, Clone)]
pub struct ContainerFlags {
    pub debug: BoolFlag,
    pub app_vulns: BoolFlag,
    pub exclude_app_vulns: BoolFlag,
    pub sbom_format: StringFlag,
    pub platform: StringFlag,
}

impl ContainerFlags {
    pub fn new() -> Self {
        Self {
            debug: BoolFlag::new("debug", false, "enable debug logging"),
            app_vulns: BoolFlag::new(
                "app-vulns",
                false,
                "enable app-vulns (deprecated, as this is the default value)",
            ),
            exclude_app_vulns: BoolFlag::new("exclude-app-vulns", false, "disable app-vulns"),
            sbom_format: StringFlag::new(
                "format",
                "",
                format!(
                    "Specify the SBOM output format. [{}]",
                    SBOM_VALID_FORMATS.join(", ")
                ),
            )
            .with_shorthand('f'),
            platform: StringFlag::new(
                "platform",
                "",
                format!(
                    "For multi-architecture images, specify the platform to generate the SBOM for. [{}]",
                    VALID_PLATFORMS.join(", ")
                ),
            ),
        }
    }
}

impl Default for ContainerFlags {
    fn default() -> Self {
        Self::new()
    }
}
