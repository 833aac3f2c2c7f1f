pub mod converter;
pub mod orchestrator;
