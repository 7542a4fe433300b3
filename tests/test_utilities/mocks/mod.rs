/// Mock implementations for testing
mod mock_http_transport;
mod mock_legacy_cli;

pub use mock_http_transport::{MockHttpTransport, RecordedRequest};
pub use mock_legacy_cli::MockLegacyCli;
