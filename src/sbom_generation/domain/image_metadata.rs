/// Subject of an SBOM: the scanned image's repository name and version.
///
/// `version` is the digest when the reference has one, otherwise the tag,
/// otherwise empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageMetadata {
    pub name: String,
    pub version: String,
}

impl ImageMetadata {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}
