use crate::shared::constants::HEADER_CONTENT_LOCATION;
use std::collections::BTreeMap;
use std::fmt;

/// Name of a workflow registered with the engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkflowId(String);

impl WorkflowId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data kind produced by a workflow, e.g. `container depgraph` / `depgraph`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataTypeId {
    workflow: WorkflowId,
    data_type: String,
}

impl DataTypeId {
    pub fn new(workflow: WorkflowId, data_type: impl Into<String>) -> Self {
        Self {
            workflow,
            data_type: data_type.into(),
        }
    }

    pub fn workflow(&self) -> &WorkflowId {
        &self.workflow
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

impl fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.workflow, self.data_type)
    }
}

/// Payload carried by a workflow data element
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Nil,
    Bytes(Vec<u8>),
    Text(String),
    Json(serde_json::Value),
}

impl Payload {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Payload::Nil)
    }

    /// Short name of the variant, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Nil => "nil",
            Payload::Bytes(_) => "bytes",
            Payload::Text(_) => "text",
            Payload::Json(_) => "json",
        }
    }
}

/// Typed output artifact exchanged between workflows
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowData {
    type_id: DataTypeId,
    content_type: String,
    payload: Payload,
    metadata: BTreeMap<String, String>,
}

impl WorkflowData {
    pub fn new(type_id: DataTypeId, content_type: impl Into<String>, payload: Payload) -> Self {
        Self {
            type_id,
            content_type: content_type.into(),
            payload,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_metadata(key, value);
        self
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn content_location(&self) -> Option<&str> {
        self.metadata(HEADER_CONTENT_LOCATION)
    }

    pub fn type_id(&self) -> &DataTypeId {
        &self.type_id
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }
}
