//! Shared resource plumbing for building blocks
//!
//! - Building block context (subscription, resource group, location)
//! - Settings resolution against that context
//! - Resource identifiers and resource group extraction

mod context;
mod id;

pub use context::{extract_resource_groups, setup_resources, BuildingBlockSettings, ResourceGroup};
pub use id::{resource_id, ResourceIdError};
