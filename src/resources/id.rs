//! Resource identifiers.

/// Errors building a resource identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceIdError {
    #[error("{0} cannot be blank")]
    Blank(&'static str),

    #[error("resource type '{0}' must be of the form 'Namespace/type[/type...]'")]
    InvalidType(String),

    #[error("resource type '{resource_type}' needs {expected} name(s), got {actual}")]
    NameCount {
        resource_type: String,
        expected: usize,
        actual: usize,
    },
}

/// Format the identifier of a resource:
/// `/subscriptions/{s}/resourceGroups/{rg}/providers/{namespace}/{type}/{name}[/{type}/{name}...]`.
///
/// `resource_type` is the namespace followed by one type segment per entry in `names`.
pub fn resource_id(
    subscription_id: &str,
    resource_group_name: &str,
    resource_type: &str,
    names: &[&str],
) -> Result<String, ResourceIdError> {
    if subscription_id.trim().is_empty() {
        return Err(ResourceIdError::Blank("subscriptionId"));
    }
    if resource_group_name.trim().is_empty() {
        return Err(ResourceIdError::Blank("resourceGroupName"));
    }

    let mut segments = resource_type.split('/');
    let namespace = segments.next().unwrap_or_default();
    let types: Vec<&str> = segments.collect();
    if namespace.trim().is_empty() || types.is_empty() || types.iter().any(|t| t.trim().is_empty()) {
        return Err(ResourceIdError::InvalidType(resource_type.to_string()));
    }
    if types.len() != names.len() {
        return Err(ResourceIdError::NameCount {
            resource_type: resource_type.to_string(),
            expected: types.len(),
            actual: names.len(),
        });
    }
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(ResourceIdError::Blank("name"));
    }

    let mut id = format!(
        "/subscriptions/{}/resourceGroups/{}/providers/{}",
        subscription_id, resource_group_name, namespace
    );
    for (resource, name) in types.iter().zip(names) {
        id.push('/');
        id.push_str(resource);
        id.push('/');
        id.push_str(name);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUB: &str = "00000000-0000-1000-8000-000000000000";

    #[test]
    fn test_top_level_resource() {
        let id = resource_id(SUB, "rg", "Microsoft.Network/localNetworkGateway", &["gw"]).unwrap();
        assert_eq!(
            id,
            "/subscriptions/00000000-0000-1000-8000-000000000000/resourceGroups/rg/providers/Microsoft.Network/localNetworkGateway/gw"
        );
    }

    #[test]
    fn test_child_resource() {
        let id = resource_id(SUB, "rg", "Microsoft.Network/virtualNetworks/subnets", &["vnet", "web"]).unwrap();
        assert!(id.ends_with("/providers/Microsoft.Network/virtualNetworks/vnet/subnets/web"));
    }

    #[test]
    fn test_name_count_mismatch() {
        let err = resource_id(SUB, "rg", "Microsoft.Network/virtualNetworks/subnets", &["vnet"]).unwrap_err();
        assert_eq!(
            err,
            ResourceIdError::NameCount {
                resource_type: "Microsoft.Network/virtualNetworks/subnets".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_blank_parts_rejected() {
        assert_eq!(
            resource_id(" ", "rg", "Microsoft.Network/x", &["a"]),
            Err(ResourceIdError::Blank("subscriptionId"))
        );
        assert_eq!(
            resource_id(SUB, "", "Microsoft.Network/x", &["a"]),
            Err(ResourceIdError::Blank("resourceGroupName"))
        );
        assert_eq!(
            resource_id(SUB, "rg", "Microsoft.Network/x", &[""]),
            Err(ResourceIdError::Blank("name"))
        );
        assert!(matches!(
            resource_id(SUB, "rg", "Microsoft.Network", &["a"]),
            Err(ResourceIdError::InvalidType(_))
        ));
    }
}
