use drag_boot::{ContextConfig, FrameCallback, Period, RenderContext};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::bindings::Context;
use crate::config::config_object;
use crate::Browser;

/// A prototty `Context` driven through the bootstrap's [`RenderContext`] seam.
pub struct JsContext {
    inner: Context,
}

impl RenderContext<Browser> for JsContext {
    fn create(config: ContextConfig<JsValue, Element>) -> Result<Self, JsValue> {
        let object = config_object(&config)?;
        let inner = Context::new(&object)?;
        Ok(Self { inner })
    }

    fn grid(&self) -> Result<JsValue, JsValue> {
        self.inner.grid()
    }

    fn run_animation(self, mut frame: FrameCallback<Browser>) -> Result<(), JsValue> {
        let callback = Closure::<dyn FnMut(JsValue, f64)>::new(move |input: JsValue, period: f64| {
            if let Err(err) = frame(&input, Period::from_millis_f64(period)) {
                wasm_bindgen::throw_val(err);
            }
        });
        self.inner.run_animation(callback.as_ref().unchecked_ref())?;

        // Called for as long as the page lives.
        callback.forget();
        Ok(())
    }
}
