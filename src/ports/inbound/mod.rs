/// Inbound ports (Driving ports) - Workflow entry points
///
/// These ports define the interface the host engine uses to drive the
/// application core.
pub mod workflow;

pub use workflow::Workflow;
