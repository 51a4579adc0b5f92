//! Building block context and settings resolution.

use block_validation::{validators, RuleTable, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys copied from the building block context into resource settings.
const CONTEXT_KEYS: &[&str] = &["subscriptionId", "resourceGroupName", "location"];

/// Context supplied by the caller for every resource in a building block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingBlockSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl BuildingBlockSettings {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: Some(subscription_id.into()),
            resource_group_name: Some(resource_group_name.into()),
            location: Some(location.into()),
        }
    }

    /// Rules every building block context must satisfy.
    pub fn validations() -> RuleTable {
        RuleTable::new()
            .field("subscriptionId", validators::GUID)
            .field("resourceGroupName", validators::NOT_NULL_OR_WHITESPACE)
            .field("location", validators::NOT_NULL_OR_WHITESPACE)
    }

    pub fn validate(&self) -> ValidationErrors {
        block_validation::validate(&Value::Object(self.to_map()), &Self::validations())
    }

    fn to_map(&self) -> Map<String, Value> {
        let fields = [
            ("subscriptionId", &self.subscription_id),
            ("resourceGroupName", &self.resource_group_name),
            ("location", &self.location),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_ref()
                    .map(|v| (key.to_string(), Value::String(v.clone())))
            })
            .collect()
    }
}

/// Fill in building block context on every resource object in `settings`.
///
/// An object is a resource when `is_resource` accepts the key it sits under
/// (`None` for the root; array elements take the array's key). Missing or null
/// context keys are filled from the nearest enclosing resource, so values set
/// by the user win and flow down to nested resources.
pub fn setup_resources<F>(settings: &Value, context: &BuildingBlockSettings, is_resource: F) -> Value
where
    F: Fn(Option<&str>) -> bool,
{
    let mut resolved = settings.clone();
    resolve(&mut resolved, None, &context.to_map(), &is_resource);
    resolved
}

fn resolve<F>(value: &mut Value, parent_key: Option<&str>, context: &Map<String, Value>, is_resource: &F)
where
    F: Fn(Option<&str>) -> bool,
{
    match value {
        Value::Object(map) => {
            let mut inherited = context.clone();
            if is_resource(parent_key) {
                for key in CONTEXT_KEYS {
                    let own = map.get(*key).filter(|v| !v.is_null()).cloned();
                    match own {
                        Some(own) => {
                            inherited.insert(key.to_string(), own);
                        }
                        None => {
                            if let Some(fallback) = context.get(*key) {
                                map.insert(key.to_string(), fallback.clone());
                            }
                        }
                    }
                }
            }
            for (key, child) in map.iter_mut() {
                resolve(child, Some(key.as_str()), &inherited, is_resource);
            }
        }
        Value::Array(items) => {
            for item in items {
                resolve(item, parent_key, context, is_resource);
            }
        }
        _ => {}
    }
}

/// A resource group a deployment needs to exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub location: String,
}

/// Distinct resource groups in first-seen order.
pub fn extract_resource_groups<I>(groups: I) -> Vec<ResourceGroup>
where
    I: IntoIterator<Item = ResourceGroup>,
{
    let mut distinct: Vec<ResourceGroup> = Vec::new();
    for group in groups {
        if !distinct.contains(&group) {
            distinct.push(group);
        }
    }
    distinct
}
