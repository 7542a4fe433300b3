use crate::sbom_generation::domain::{ImageMetadata, WorkflowData};
use crate::shared::Result;
use serde::ser::{Error as _, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Subject of the SBOM: the scanned image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub name: String,
    pub version: String,
}

impl From<ImageMetadata> for Subject {
    fn from(metadata: ImageMetadata) -> Self {
        Self {
            name: metadata.name,
            version: metadata.version,
        }
    }
}

/// SbomConversionRequest - body of the depgraph to SBOM conversion call
///
/// Depgraphs are held as the raw bytes the legacy CLI printed and embedded
/// into the JSON body as-is, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomConversionRequest {
    depgraphs: Vec<Vec<u8>>,
    subject: Subject,
}

impl SbomConversionRequest {
    pub fn new(depgraphs: Vec<Vec<u8>>, subject: Subject) -> Self {
        Self { depgraphs, subject }
    }

    /// Builds the request from the depgraph workflow output
    ///
    /// Nil payloads are skipped; order is preserved.
    ///
    /// # Errors
    /// Returns an error if a non-nil payload is not raw bytes
    pub fn from_depgraphs(data: &[WorkflowData], metadata: ImageMetadata) -> Result<Self> {
        let mut depgraphs = Vec::with_capacity(data.len());
        for element in data {
            let payload = element.payload();
            if payload.is_nil() {
                continue;
            }
            let bytes = payload.as_bytes().ok_or_else(|| {
                anyhow::anyhow!(
                    "invalid payload type, want bytes, got {}",
                    payload.kind()
                )
            })?;
            depgraphs.push(bytes.to_vec());
        }

        Ok(Self::new(depgraphs, metadata.into()))
    }

    pub fn depgraphs(&self) -> &[Vec<u8>] {
        &self.depgraphs
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Serializes the request body
    ///
    /// # Errors
    /// Returns an error if a depgraph is not valid JSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl Serialize for SbomConversionRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let depgraphs = self
            .depgraphs
            .iter()
            .map(|bytes| serde_json::from_slice::<&RawValue>(bytes).map_err(S::Error::custom))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut state = serializer.serialize_struct("SbomConversionRequest", 2)?;
        state.serialize_field("depGraphs", &depgraphs)?;
        state.serialize_field("subject", &self.subject)?;
        state.end()
    }
}
