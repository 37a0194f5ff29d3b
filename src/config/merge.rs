use serde_json::Value;

/// Deep-merge `overlay` into `base`, returning a new document.
///
/// Rules:
/// - If the overlay value at a key is a mapping and the base has that key,
///   the subtrees are merged recursively (overlay leaves win).
/// - Any other overlay value (scalar, array, null, or a mapping the base
///   lacks) replaces the base value wholesale. Arrays are never merged
///   element-wise.
/// - Keys present only in the base are retained unchanged.
///
/// Neither input is mutated. Mismatched shapes are handled permissively: if
/// either side is not a mapping, the overlay wins.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
	match (base, overlay) {
		(Value::Object(base_map), Value::Object(overlay_map)) => {
			let mut merged = base_map.clone();

			for (key, overlay_value) in overlay_map {
				let value = match (base_map.get(key), overlay_value) {
					(Some(base_value), Value::Object(_)) => {
						deep_merge(base_value, overlay_value)
					}
					_ => overlay_value.clone(),
				};
				merged.insert(key.clone(), value);
			}

			Value::Object(merged)
		}
		_ => overlay.clone(),
	}
}
