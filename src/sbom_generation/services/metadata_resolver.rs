use super::image_reference::ImageReference;
use crate::sbom_generation::domain::ImageMetadata;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// Archive URI prefixes understood by the legacy CLI
const ARCHIVE_PREFIXES: [&str; 3] = ["docker-archive:", "oci-archive:", "kaniko-archive:"];

/// MetadataResolver - derives the SBOM subject from the scan target
///
/// Archive targets are named after their file; everything else must be a
/// valid image reference.
pub struct MetadataResolver;

impl MetadataResolver {
    pub fn resolve(target: &str) -> Result<ImageMetadata> {
        if Self::is_archive(target) {
            return Ok(Self::archive_metadata(target));
        }

        let reference = ImageReference::parse(target).context("could not parse container name")?;

        let version = reference
            .digest()
            .or_else(|| reference.tag())
            .unwrap_or_default();

        Ok(ImageMetadata::new(reference.name(), version))
    }

    pub fn is_archive(target: &str) -> bool {
        ARCHIVE_PREFIXES
            .iter()
            .any(|prefix| target.starts_with(prefix))
            || target.ends_with(".tar")
    }

    /// Basename of the archive path, extension kept; no version.
    fn archive_metadata(target: &str) -> ImageMetadata {
        let path = ARCHIVE_PREFIXES
            .iter()
            .find_map(|prefix| target.strip_prefix(prefix))
            .unwrap_or(target);

        let name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());

        ImageMetadata::new(name, "")
    }
}
