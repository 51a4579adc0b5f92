//! Deployment document assembly.
//!
//! A parameters document names the building block context, one or more
//! gateway settings objects and optional caller defaults. Every settings
//! object is transformed independently and the results are collected into a
//! deployment parameters document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::config::{load_document, ConfigError};
use crate::error::TransformError;
use crate::gateway::{self, LocalNetworkGateway};
use crate::resources::{extract_resource_groups, BuildingBlockSettings, ResourceGroup};

/// Schema of the emitted deployment parameters document
pub const DEPLOYMENT_PARAMETERS_SCHEMA: &str =
    "https://schema.management.azure.com/schemas/2015-01-01/deploymentParameters.json#";

pub const CONTENT_VERSION: &str = "1.0.0.0";

/// Deployment errors
#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid parameters document: {0}")]
    InvalidParameters(serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("settings[{index}]: {source}")]
    Resource {
        index: usize,
        #[source]
        source: TransformError,
    },
}

/// Input document for one building block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Missing or blank context fields are reported by validation; fields of
    /// the wrong JSON type fail parsing.
    #[serde(default)]
    pub building_block_settings: BuildingBlockSettings,

    pub settings: SettingsList,

    #[serde(default)]
    pub defaults: Option<Value>,
}

/// A single settings object or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SettingsList {
    Many(Vec<Value>),
    One(Value),
}

impl SettingsList {
    pub fn as_slice(&self) -> &[Value] {
        match self {
            SettingsList::Many(items) => items,
            SettingsList::One(item) => std::slice::from_ref(item),
        }
    }
}

impl Parameters {
    pub fn from_value(value: Value) -> Result<Self, DeploymentError> {
        serde_json::from_value(value).map_err(DeploymentError::InvalidParameters)
    }

    /// Load a parameters document, optionally layering a separate defaults file
    /// over any defaults embedded in the document.
    pub fn load(path: &Path, defaults_path: Option<&Path>) -> Result<Self, DeploymentError> {
        let mut parameters = Self::from_value(load_document(path)?)?;
        if let Some(defaults_path) = defaults_path {
            let file_defaults = load_document(defaults_path)?;
            parameters.defaults = Some(match parameters.defaults.take() {
                Some(embedded) => block_validation::deep_merge(embedded, file_defaults),
                None => file_defaults,
            });
        }
        Ok(parameters)
    }

    /// Transform every settings object, keeping each outcome.
    pub fn transform_each(&self) -> Vec<Result<LocalNetworkGateway, TransformError>> {
        self.settings
            .as_slice()
            .iter()
            .map(|settings| {
                gateway::transform(settings, &self.building_block_settings, self.defaults.as_ref())
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue<T> {
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentParameters {
    pub local_network_gateways: ParameterValue<Vec<LocalNetworkGateway>>,
}

/// Output document: template parameters plus the resource groups they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub content_version: String,
    pub parameters: DeploymentParameters,
    pub resource_groups: Vec<ResourceGroup>,
}

impl DeploymentDocument {
    pub fn new(gateways: Vec<LocalNetworkGateway>) -> Self {
        let resource_groups = extract_resource_groups(gateways.iter().map(|g| g.resource_group()));
        Self {
            schema: DEPLOYMENT_PARAMETERS_SCHEMA.to_string(),
            content_version: CONTENT_VERSION.to_string(),
            parameters: DeploymentParameters {
                local_network_gateways: ParameterValue { value: gateways },
            },
            resource_groups,
        }
    }

    /// Pretty JSON, or RFC 8785 canonical JSON when `canonical` is set.
    pub fn to_json(&self, canonical: bool) -> Result<String, DeploymentError> {
        if canonical {
            let bytes = serde_json_canonicalizer::to_vec(self)
                .map_err(|e| DeploymentError::Serialization(e.to_string()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        } else {
            serde_json::to_string_pretty(self).map_err(|e| DeploymentError::Serialization(e.to_string()))
        }
    }
}

/// Transform every settings object, stopping at the first failure.
pub fn process(parameters: &Parameters) -> Result<DeploymentDocument, DeploymentError> {
    let mut gateways = Vec::new();
    for (index, result) in parameters.transform_each().into_iter().enumerate() {
        gateways.push(result.map_err(|source| DeploymentError::Resource { index, source })?);
    }
    tracing::info!(resources = gateways.len(), "built deployment document");
    Ok(DeploymentDocument::new(gateways))
}
