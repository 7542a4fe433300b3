/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (engine, network, console, etc.).
pub mod http_transport;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_client;
pub mod workflow_engine;

pub use http_transport::HttpTransport;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_client::SbomClient;
pub use workflow_engine::{
    ExitStatusError, InvocationContext, InvocationFailure, WorkflowEngine, WorkflowResult,
};
