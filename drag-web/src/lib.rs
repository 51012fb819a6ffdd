//! drag web entry point
//!
//! Boots the drag application in the browser: disables the page's context menu, imports
//! the application module, binds a prototty `Context` to the `app_node` element and
//! ticks the application from the context's animation loop.
//!
//! Build with `wasm-pack build --target bundler`; both the `prototty` package and the
//! application module are resolved by the bundler. The application package is imported
//! from `js/app_module.js` and is expected in `wasm_out/` next to this crate's `pkg/`.

#[cfg(all(target_arch = "wasm32", not(test)))]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod config;
#[cfg(all(target_arch = "wasm32", not(test)))]
mod context;
#[cfg(target_arch = "wasm32")]
mod module;
#[cfg(target_arch = "wasm32")]
pub mod page;

/// Id of the element the context renders into.
pub const APP_NODE_ID: &str = "app_node";
/// Export of the application module holding the input buffer type.
pub const INPUT_BUFFER_EXPORT: &str = "InputBuffer";
/// Export of the application module holding the application constructor.
pub const APP_EXPORT: &str = "WebApp";

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser instantiation of the bootstrap's types: everything crossing the boundary is a
/// JS value, the node is a DOM element.
#[cfg(target_arch = "wasm32")]
pub struct Browser;

#[cfg(target_arch = "wasm32")]
impl drag_boot::Platform for Browser {
    type Node = web_sys::Element;
    type InputBufferType = JsValue;
    type InputBuffer = JsValue;
    type Grid = JsValue;
    type Error = JsValue;
}

/// Runs on module instantiation: installs the panic hook and logger, then boots.
#[cfg(all(target_arch = "wasm32", not(test)))]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    // Nobody awaits this promise, so a failed boot reaches the browser as an
    // unhandled rejection.
    let _ = wasm_bindgen_futures::future_to_promise(async {
        run().await.map(|()| JsValue::UNDEFINED)
    });
}

#[cfg(all(target_arch = "wasm32", not(test)))]
async fn run() -> Result<(), JsValue> {
    let page = page::BrowserPage::new(APP_NODE_ID);
    let loader = module::JsModuleLoader::app();

    drag_boot::boot::<Browser, context::JsContext, _, _>(&page, loader)
        .await
        .map_err(|err| {
            log::error!("{err} ({}): {:?}", err.stage(), err.inner());
            err.into_inner()
        })
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
