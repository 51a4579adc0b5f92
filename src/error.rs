//! Error types for the settings pipeline.

use block_validation::ValidationErrors;

use crate::resources::ResourceIdError;

/// Why a settings object could not be turned into a resource.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("settings must be an object")]
    SettingsNotAnObject,

    /// The building block context failed validation; settings were not checked.
    #[error("{0}")]
    BuildingBlock(ValidationErrors),

    /// The merged settings failed validation.
    #[error("{0}")]
    Settings(ValidationErrors),

    #[error("Malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Resource id error: {0}")]
    ResourceId(#[from] ResourceIdError),
}

impl TransformError {
    /// Violations carried by a validation failure, if any.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::BuildingBlock(errors) | Self::Settings(errors) => Some(errors),
            _ => None,
        }
    }
}
