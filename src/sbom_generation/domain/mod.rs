pub mod configuration;
pub mod depgraph_record;
pub mod flags;
pub mod image_metadata;
pub mod legacy_cli_error;
pub mod workflow_data;

pub use configuration::{keys, ConfigValue, Configuration};
pub use depgraph_record::DepGraphRecord;
pub use flags::{BoolFlag, ContainerFlags, Flag, StringFlag};
pub use image_metadata::ImageMetadata;
pub use legacy_cli_error::LegacyCliError;
pub use workflow_data::{DataTypeId, Payload, WorkflowData, WorkflowId};
