//! Command implementations

pub mod controller;
pub mod protocol;
pub mod text;

pub use controller::{Controller, INVALID_COMMAND, Reply};
pub use protocol::Command;
pub use text::{Outcome, run_text};
