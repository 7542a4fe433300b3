/// In-process host engine
mod in_process_engine;

pub use in_process_engine::InProcessEngine;
