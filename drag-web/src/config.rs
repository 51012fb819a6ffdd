use drag_boot::{ConfigValue, ContextConfig};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Builds the plain JS object prototty's `Context` constructor expects.
pub fn config_object(config: &ContextConfig<JsValue, Element>) -> Result<Object, JsValue> {
    let object = Object::new();
    for (key, value) in config.entries() {
        let value = match value {
            ConfigValue::InputBufferType(handle) => handle.clone(),
            ConfigValue::Node(node) => JsValue::from(node.clone()),
            ConfigValue::Integer(n) => JsValue::from(n),
            ConfigValue::Text(s) => JsValue::from_str(s),
        };
        Reflect::set(&object, &JsValue::from_str(key), &value)?;
    }
    Ok(object)
}

#[cfg(test)]
mod tests {
    use drag_boot::{GridLayout, FIELD_NAMES};
    use js_sys::Function;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    fn get(object: &Object, key: &str) -> JsValue {
        Reflect::get(object, &JsValue::from_str(key)).unwrap()
    }

    fn sample() -> (JsValue, Element, Object) {
        let input_buffer_type: JsValue = Function::new_no_args("").into();
        let node = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("div")
            .unwrap();
        let config = ContextConfig::new(input_buffer_type.clone(), node.clone(), GridLayout::default());
        let object = config_object(&config).unwrap();
        (input_buffer_type, node, object)
    }

    #[wasm_bindgen_test]
    fn test_object_has_exactly_the_record_keys() {
        let (_, _, object) = sample();
        let keys: Vec<String> = Object::keys(&object)
            .iter()
            .map(|key| key.as_string().unwrap())
            .collect();
        assert_eq!(keys, FIELD_NAMES);
    }

    #[wasm_bindgen_test]
    fn test_handles_are_passed_through() {
        let (input_buffer_type, node, object) = sample();
        assert!(Object::is(&get(&object, "WasmInputBufferType"), &input_buffer_type));

        let passed_node = get(&object, "node");
        assert!(passed_node.is_instance_of::<Element>());
        assert!(Object::is(&passed_node, &node));
    }

    #[wasm_bindgen_test]
    fn test_layout_values_keep_their_js_types() {
        let (_, _, object) = sample();
        for (key, expected) in [
            ("grid_width", 80.0),
            ("grid_height", 40.0),
            ("cell_width_px", 14.0),
            ("cell_height_px", 28.0),
        ] {
            assert_eq!(get(&object, key).as_f64(), Some(expected), "{key}");
        }
        assert_eq!(get(&object, "font_family").as_string().as_deref(), Some("Hack"));
        assert_eq!(get(&object, "font_size").as_string().as_deref(), Some("24px"));
    }
}
