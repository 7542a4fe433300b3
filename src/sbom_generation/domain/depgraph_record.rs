use super::workflow_data::{DataTypeId, Payload, WorkflowData};
use crate::shared::constants::{CONTENT_TYPE_JSON, HEADER_CONTENT_LOCATION};

/// One dependency graph extracted from legacy CLI output.
///
/// The payload is kept exactly as captured, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepGraphRecord {
    payload: Vec<u8>,
    target_label: String,
}

impl DepGraphRecord {
    pub fn new(payload: Vec<u8>, target_label: impl Into<String>) -> Self {
        Self {
            payload,
            target_label: target_label.into(),
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    /// Wraps the record as a JSON workflow artifact carrying its target label
    pub fn into_workflow_data(self, type_id: DataTypeId) -> WorkflowData {
        WorkflowData::new(type_id, CONTENT_TYPE_JSON, Payload::Bytes(self.payload))
            .with_metadata(HEADER_CONTENT_LOCATION, self.target_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::WorkflowId;

    #[test]
    fn test_into_workflow_data() {
        let record = DepGraphRecord::new(b" {\"pkgManager\":{}}\n".to_vec(), "pkg-a");
        let type_id = DataTypeId::new(WorkflowId::new("container depgraph"), "depgraph");

        let data = record.into_workflow_data(type_id.clone());

        assert_eq!(data.type_id(), &type_id);
        assert_eq!(data.content_type(), "application/json");
        assert_eq!(data.content_location(), Some("pkg-a"));
        assert_eq!(
            data.payload().as_bytes(),
            Some(&b" {\"pkgManager\":{}}\n"[..])
        );
    }
}
