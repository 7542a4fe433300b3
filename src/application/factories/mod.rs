mod error_factory;
mod presenter_factory;

pub use error_factory::{ErrorFactory, DEPGRAPH_WORKFLOW_USER_MESSAGE};
pub use presenter_factory::{PresenterFactory, PresenterType};
