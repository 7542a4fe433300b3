/// Network adapters for the remote SBOM conversion API
mod http_sbom_client;
mod reqwest_transport;

pub use http_sbom_client::HttpSbomClient;
pub use reqwest_transport::build_http_client;
