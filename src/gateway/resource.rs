//! Typed settings and output resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resources::ResourceGroup;

/// Merged, validated local network gateway settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalNetworkGatewaySettings {
    pub name: String,
    pub address_prefixes: Vec<String>,
    pub ip_address: String,

    /// Passed through untouched, so unknown BGP fields survive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_settings: Option<Value>,

    pub subscription_id: String,
    pub resource_group_name: String,
    pub location: String,
}

/// Deployable local network gateway resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalNetworkGateway {
    pub name: String,
    pub id: String,
    pub resource_group_name: String,
    pub subscription_id: String,
    pub location: String,
    pub properties: LocalNetworkGatewayProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalNetworkGatewayProperties {
    pub local_network_address_space: AddressSpace,
    pub gateway_ip_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_settings: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSpace {
    pub address_prefixes: Vec<String>,
}

impl LocalNetworkGateway {
    pub fn resource_group(&self) -> ResourceGroup {
        ResourceGroup {
            subscription_id: self.subscription_id.clone(),
            resource_group_name: self.resource_group_name.clone(),
            location: self.location.clone(),
        }
    }
}

/// JavaScript-style truthiness: null, false, 0 and "" are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn test_settings_ignore_unknown_fields() {
        let settings: LocalNetworkGatewaySettings = serde_json::from_value(json!({
            "name": "gw",
            "addressPrefixes": ["10.0.0.0/8"],
            "ipAddress": "1.2.3.4",
            "subscriptionId": "00000000-0000-1000-8000-000000000000",
            "resourceGroupName": "rg",
            "location": "westus",
            "tags": {"env": "dev"}
        }))
        .unwrap();
        assert!(settings.bgp_settings.is_none());
    }

    #[test]
    fn test_properties_omit_absent_bgp() {
        let properties = LocalNetworkGatewayProperties {
            local_network_address_space: AddressSpace {
                address_prefixes: vec!["10.0.0.0/8".to_string()],
            },
            gateway_ip_address: "1.2.3.4".to_string(),
            bgp_settings: None,
        };
        let value = serde_json::to_value(&properties).unwrap();
        assert_eq!(
            value,
            json!({
                "localNetworkAddressSpace": {"addressPrefixes": ["10.0.0.0/8"]},
                "gatewayIpAddress": "1.2.3.4"
            })
        );
    }
}
