use js_sys::{Function, Object};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "prototty")]
extern "C" {
    /// prototty's rendering and input context.
    pub type Context;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(config: &Object) -> Result<Context, JsValue>;

    /// Drawable surface handed to the application.
    #[wasm_bindgen(method, catch)]
    pub fn grid(this: &Context) -> Result<JsValue, JsValue>;

    /// Calls `callback(inputBuffer, period)` on every animation frame.
    #[wasm_bindgen(method, catch)]
    pub fn run_animation(this: &Context, callback: &Function) -> Result<(), JsValue>;
}

