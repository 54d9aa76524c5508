//! Layer merge logic
//!
//! Top-level keys only:
//! - Objects: the overlay's keys replace the base's keys of the same name
//! - Nested values are never merged; the overlay value wins as a whole
//! - Null in the overlay is ignored so earlier layers keep their value
//! - A non-object overlay contributes nothing

use serde_json::{Map, Value};

/// Shallow merge two option objects.
pub fn shallow_merge(base: Value, overlay: Value) -> Value {
    let mut base_map = match base {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    if let Value::Object(overlay_map) = overlay {
        for (key, value) in overlay_map {
            if value.is_null() {
                continue;
            }
            base_map.insert(key, value);
        }
    }

    Value::Object(base_map)
}

/// Merge multiple layers in order (first is base, last has highest precedence)
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Object(Map::new()), shallow_merge)
}
