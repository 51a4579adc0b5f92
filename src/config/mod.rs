//! Settings inputs
//!
//! 1. Built-in defaults per resource type (lowest precedence)
//! 2. Caller defaults file
//! 3. Parameters file (building block context plus user settings)

mod defaults;
mod loader;

pub use defaults::local_network_gateway_defaults;
pub use loader::{load_document, ConfigError};
