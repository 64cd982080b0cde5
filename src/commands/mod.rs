//! CLI command implementations.
//!
//! Each submodule owns one command: its configuration struct, the handler
//! that runs it, and nothing else. The binary stays a thin dispatcher.

pub mod analyze;

pub use analyze::{handle_analyze, AnalyzeConfig};
