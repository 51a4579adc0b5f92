//! Local network gateway building block.
//!
//! Validates user-supplied local network gateway settings against their
//! building block context and projects them into deployable resources.

pub mod config;
pub mod deployment;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod resources;

pub use deployment::{process, DeploymentDocument, DeploymentError, Parameters};
pub use error::TransformError;
pub use gateway::{merge, transform, transform_settings, validations, LocalNetworkGateway};
pub use resources::BuildingBlockSettings;

pub use block_validation::{ValidationErrors, ValidationFailure};
