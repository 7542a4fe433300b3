/// Use cases module: the workflows registered with the engine
mod depgraph_workflow;
mod sbom_workflow;

pub use depgraph_workflow::DepGraphWorkflow;
pub use sbom_workflow::SbomWorkflow;
