mod depgraph_parser;
mod image_reference;
mod metadata_resolver;

pub use depgraph_parser::{DepGraphParseError, DepGraphParser};
pub use image_reference::{ImageReference, ReferenceError};
pub use metadata_resolver::MetadataResolver;
