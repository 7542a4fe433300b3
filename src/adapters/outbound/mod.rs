/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod engine;
pub mod filesystem;
pub mod network;
pub mod process;
