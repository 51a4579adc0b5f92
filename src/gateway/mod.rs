//! Local network gateway building block.
//!
//! Settings flow through three steps, each gating the next:
//! 1. Validate the building block context
//! 2. Merge user settings over defaults and context, then validate
//! 3. Project the validated settings into a [`LocalNetworkGateway`] resource

mod resource;
mod validations;

pub use resource::{
    AddressSpace, LocalNetworkGateway, LocalNetworkGatewayProperties, LocalNetworkGatewaySettings,
};
pub use validations::{bgp_settings_validations, validations};

use serde_json::Value;

use crate::config::local_network_gateway_defaults;
use crate::error::TransformError;
use crate::resources::{resource_id, setup_resources, BuildingBlockSettings};
use resource::is_truthy;

/// Provider path used in resource identifiers.
pub const RESOURCE_TYPE: &str = "Microsoft.Network/localNetworkGateway";

/// Combine built-in defaults, caller defaults and building block context with
/// user settings. User settings win, then caller defaults, then built-ins.
pub fn merge(
    settings: &Value,
    building_block_settings: &BuildingBlockSettings,
    default_settings: Option<&Value>,
) -> Result<Value, TransformError> {
    if !settings.is_object() {
        return Err(TransformError::SettingsNotAnObject);
    }

    let mut defaults = vec![local_network_gateway_defaults()];
    if let Some(caller_defaults) = default_settings {
        defaults.push(caller_defaults.clone());
    }

    // Local network gateways have no child resources; only the root gets context.
    let resolved = setup_resources(settings, building_block_settings, |parent_key| parent_key.is_none());

    Ok(block_validation::merge(resolved, defaults))
}

/// Validate and project one local network gateway.
pub fn transform(
    settings: &Value,
    building_block_settings: &BuildingBlockSettings,
    default_settings: Option<&Value>,
) -> Result<LocalNetworkGateway, TransformError> {
    if !settings.is_object() {
        return Err(TransformError::SettingsNotAnObject);
    }

    building_block_settings.validate().into_result().map_err(|errors| {
        tracing::warn!(violations = errors.len(), "building block settings rejected");
        TransformError::BuildingBlock(errors)
    })?;

    let merged = merge(settings, building_block_settings, default_settings)?;

    block_validation::validate(&merged, &validations())
        .into_result()
        .map_err(|errors| {
            tracing::warn!(violations = errors.len(), "local network gateway settings rejected");
            TransformError::Settings(errors)
        })?;

    let validated: LocalNetworkGatewaySettings = serde_json::from_value(merged)?;
    let gateway = transform_settings(&validated)?;

    tracing::debug!(id = %gateway.id, "transformed local network gateway");
    Ok(gateway)
}

/// Project validated settings into the resource shape. Performs no validation.
pub fn transform_settings(
    settings: &LocalNetworkGatewaySettings,
) -> Result<LocalNetworkGateway, TransformError> {
    let id = resource_id(
        &settings.subscription_id,
        &settings.resource_group_name,
        RESOURCE_TYPE,
        &[settings.name.as_str()],
    )?;

    Ok(LocalNetworkGateway {
        name: settings.name.clone(),
        id,
        resource_group_name: settings.resource_group_name.clone(),
        subscription_id: settings.subscription_id.clone(),
        location: settings.location.clone(),
        properties: LocalNetworkGatewayProperties {
            local_network_address_space: AddressSpace {
                address_prefixes: settings.address_prefixes.clone(),
            },
            gateway_ip_address: settings.ip_address.clone(),
            bgp_settings: settings.bgp_settings.clone().filter(is_truthy),
        },
    })
}
