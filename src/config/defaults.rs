//! Built-in defaults (layer 1)

use serde_json::{Map, Value};

/// Built-in local network gateway defaults. Every field is user-supplied, so
/// this layer is empty.
pub fn local_network_gateway_defaults() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty_object() {
        let defaults = local_network_gateway_defaults();
        assert_eq!(defaults.as_object().map(|m| m.len()), Some(0));
    }
}
