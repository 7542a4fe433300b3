use crate::sbom_generation::domain::{DataTypeId, Payload, WorkflowData};

/// SbomConversionResult - SBOM document returned by the conversion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomConversionResult {
    /// Document body, untouched
    pub doc: Vec<u8>,
    /// `Content-Type` of the response, empty when absent
    pub mime_type: String,
}

impl SbomConversionResult {
    pub fn new(doc: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            doc,
            mime_type: mime_type.into(),
        }
    }

    pub fn into_workflow_data(self, type_id: DataTypeId) -> WorkflowData {
        WorkflowData::new(type_id, self.mime_type, Payload::Bytes(self.doc))
    }
}
