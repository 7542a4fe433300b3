use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum length of a repository name, registry included
const NAME_TOTAL_LENGTH_MAX: usize = 255;

/// Anchored container image reference grammar:
/// `[domain/]path[/path...][:tag][@algorithm:hex]`.
///
/// Repository path components are lowercase only; domain, tag and digest
/// algorithm may use uppercase.
static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alphanumeric = "[a-z0-9]+";
    let separator = "(?:[._]|__|[-]+)";
    let path_component = format!("{alphanumeric}(?:{separator}{alphanumeric})*");
    let domain_component = "(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])";
    let host = format!(r"(?:{domain_component}(?:\.{domain_component})*|\[[a-fA-F0-9:]+\])");
    let domain = format!("{host}(?::[0-9]+)?");
    let name = format!("(?:{domain}/)?{path_component}(?:/{path_component})*");
    let tag = "[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}";
    let digest = "[A-Za-z][A-Za-z0-9]*(?:[-_+.][A-Za-z][A-Za-z0-9]*)*:[[:xdigit:]]{32,}";

    Regex::new(&format!("^({name})(?::({tag}))?(?:@({digest}))?$"))
        .expect("image reference grammar must compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("repository name must have at least one component")]
    NameEmpty,

    #[error("repository name must be lowercase")]
    NameContainsUppercase,

    #[error("invalid reference format")]
    InvalidFormat,

    #[error("repository name must not be more than 255 characters")]
    NameTooLong,

    #[error("unsupported digest algorithm: {0}")]
    UnsupportedDigest(String),

    #[error("invalid checksum digest: {0}")]
    InvalidDigest(String),
}

/// A parsed image reference. Name is kept as written, without normalization
/// (`alpine` stays `alpine`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    name: String,
    tag: Option<String>,
    digest: Option<String>,
}

impl ImageReference {
    pub fn parse(input: &str) -> Result<Self, ReferenceError> {
        let Some(captures) = REFERENCE_REGEX.captures(input) else {
            if input.is_empty() {
                return Err(ReferenceError::NameEmpty);
            }
            if REFERENCE_REGEX.is_match(&input.to_lowercase()) {
                return Err(ReferenceError::NameContainsUppercase);
            }
            return Err(ReferenceError::InvalidFormat);
        };

        let name = captures.get(1).map_or("", |m| m.as_str());
        if name.len() > NAME_TOTAL_LENGTH_MAX {
            return Err(ReferenceError::NameTooLong);
        }

        let digest = match captures.get(3) {
            Some(digest) => Some(validate_digest(digest.as_str())?),
            None => None,
        };

        Ok(Self {
            name: name.to_string(),
            tag: captures.get(2).map(|m| m.as_str().to_string()),
            digest,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }
}

fn validate_digest(digest: &str) -> Result<String, ReferenceError> {
    let (algorithm, encoded) = digest
        .split_once(':')
        .ok_or_else(|| ReferenceError::InvalidDigest(digest.to_string()))?;

    let expected_len = match algorithm {
        "sha256" => 64,
        "sha384" => 96,
        "sha512" => 128,
        other => return Err(ReferenceError::UnsupportedDigest(other.to_string())),
    };

    let is_lower_hex = encoded
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if encoded.len() != expected_len || !is_lower_hex {
        return Err(ReferenceError::InvalidDigest(digest.to_string()));
    }

    Ok(digest.to_string())
}
