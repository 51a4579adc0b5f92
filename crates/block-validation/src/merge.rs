//! Layered settings merge.
//!
//! - Objects: merged key by key, recursively
//! - Arrays: replaced wholesale by the higher layer
//! - Scalars and null: the higher layer wins

use serde_json::Value;

/// Overlay `overlay` onto `base`.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            // Merge in place so existing keys keep their position.
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(slot) => {
                        let base_value = slot.take();
                        *slot = deep_merge(base_value, overlay_value);
                    }
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Merge layers in order; the last layer has the highest precedence.
pub fn merge_layers<I>(layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    layers.into_iter().fold(Value::Null, deep_merge)
}

/// Merge `settings` over `defaults`, where `defaults` are listed lowest precedence first.
pub fn merge(settings: Value, defaults: Vec<Value>) -> Value {
    merge_layers(defaults.into_iter().chain(std::iter::once(settings)))
}
