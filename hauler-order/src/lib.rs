pub mod orchestrator;

pub use orchestrator::OrderOrchestrator;
pub use hauler_core::TransitionMode;
