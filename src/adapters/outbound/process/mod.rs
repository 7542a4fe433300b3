/// Subprocess adapters
mod legacy_cli;

pub use legacy_cli::LegacyCliWorkflow;
