use drag_boot::{AppModule, Application, ModuleLoader};
use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::{Browser, APP_EXPORT, INPUT_BUFFER_EXPORT};

#[wasm_bindgen(module = "/js/app_module.js")]
extern "C" {
    /// `import()` of the application package; resolves to its namespace object.
    #[wasm_bindgen(catch)]
    fn load_app() -> Result<Promise, JsValue>;
}

/// Starts a dynamic import and returns its promise.
pub type ImportFn = fn() -> Result<Promise, JsValue>;

/// Loads a module through a dynamic `import()` whose specifier is fixed in JS.
pub struct JsModuleLoader {
    name: &'static str,
    import: ImportFn,
}

impl JsModuleLoader {
    pub fn new(name: &'static str, import: ImportFn) -> Self {
        Self { name, import }
    }

    /// The application package, imported by `js/app_module.js`.
    pub fn app() -> Self {
        Self::new("wasm_out/app", load_app)
    }
}

impl ModuleLoader<Browser> for JsModuleLoader {
    type Module = JsModule;

    async fn load(self) -> Result<JsModule, JsValue> {
        log::debug!("importing {}", self.name);
        let namespace = JsFuture::from((self.import)()?).await?;
        Ok(JsModule { namespace })
    }
}

/// Namespace object of the imported application module.
pub struct JsModule {
    namespace: JsValue,
}

impl JsModule {
    fn export(&self, name: &str) -> Result<JsValue, JsValue> {
        let value = Reflect::get(&self.namespace, &JsValue::from_str(name))?;
        if value.is_undefined() {
            return Err(JsError::new(&format!("application module has no `{name}` export")).into());
        }
        Ok(value)
    }
}

impl AppModule<Browser> for JsModule {
    type App = JsApp;

    fn input_buffer_type(&self) -> Result<JsValue, JsValue> {
        self.export(INPUT_BUFFER_EXPORT)
    }

    fn instantiate(&self, grid: JsValue) -> Result<JsApp, JsValue> {
        let constructor: Function = self
            .export(APP_EXPORT)?
            .dyn_into()
            .map_err(|_| JsError::new(&format!("`{APP_EXPORT}` is not a constructor")))?;
        let instance = Reflect::construct(&constructor, &Array::of1(&grid))?;

        let tick: Function = Reflect::get(&instance, &JsValue::from_str("tick"))?
            .dyn_into()
            .map_err(|_| JsError::new(&format!("`{APP_EXPORT}` instances have no `tick` method")))?;

        Ok(JsApp { instance, tick })
    }
}

/// A constructed `WebApp` instance.
pub struct JsApp {
    instance: JsValue,
    tick: Function,
}

impl Application<Browser> for JsApp {
    fn tick(&mut self, input: &JsValue) -> Result<(), JsValue> {
        self.tick.call1(&self.instance, input).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use js_sys::{Object, Promise};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen(inline_js = "
        export function import_stub() {
            return import('data:text/javascript,' + encodeURIComponent(`
                export class InputBuffer {}
                export class WebApp {
                    constructor(grid) { this.grid = grid; this.ticks = []; }
                    tick(input) { this.ticks.push(input); return 'ignored'; }
                }
            `));
        }
        export function import_broken() {
            return import('data:text/javascript,' + encodeURIComponent(`throw new Error('boom');`));
        }
        export function import_throws() {
            throw new Error('import unavailable');
        }
    ")]
    extern "C" {
        #[wasm_bindgen(catch)]
        fn import_stub() -> Result<Promise, JsValue>;
        #[wasm_bindgen(catch)]
        fn import_broken() -> Result<Promise, JsValue>;
        #[wasm_bindgen(catch)]
        fn import_throws() -> Result<Promise, JsValue>;
    }

    async fn stub_module() -> JsModule {
        JsModuleLoader::new("stub", import_stub).load().await.unwrap()
    }

    /// A namespace exporting only `WebApp`, built from a function body returning a class.
    fn web_app_only(class_source: &str) -> JsModule {
        let namespace = Object::new();
        let class = Function::new_no_args(class_source).call0(&JsValue::NULL).unwrap();
        Reflect::set(&namespace, &JsValue::from_str(APP_EXPORT), &class).unwrap();
        JsModule {
            namespace: namespace.into(),
        }
    }

    fn field(target: &JsValue, name: &str) -> JsValue {
        Reflect::get(target, &JsValue::from_str(name)).unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_load_resolves_exports() {
        let module = stub_module().await;
        assert!(module.input_buffer_type().unwrap().is_function());
        assert!(module.export(APP_EXPORT).unwrap().is_function());
    }

    #[wasm_bindgen_test]
    async fn test_load_rejection_is_an_error() {
        let result = JsModuleLoader::new("broken", import_broken).load().await;
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    async fn test_import_that_throws_is_an_error() {
        let result = JsModuleLoader::new("throws", import_throws).load().await;
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    async fn test_instantiate_receives_grid() {
        let module = stub_module().await;
        let grid = JsValue::from_str("grid handle");
        let app = module.instantiate(grid.clone()).unwrap();
        assert_eq!(field(&app.instance, "grid"), grid);
    }

    #[wasm_bindgen_test]
    async fn test_tick_forwards_input_unchanged() {
        let module = stub_module().await;
        let mut app = module.instantiate(JsValue::NULL).unwrap();

        let input = Object::new();
        app.tick(&input).unwrap();
        app.tick(&input).unwrap();

        let ticks: Array = field(&app.instance, "ticks").unchecked_into();
        assert_eq!(ticks.length(), 2);
        assert!(Object::is(&ticks.get(0), &input));
        assert!(Object::is(&ticks.get(1), &input));
    }

    #[wasm_bindgen_test]
    fn test_missing_export() {
        let module = web_app_only("return class { tick() {} };");
        assert!(module.input_buffer_type().is_err());
        assert!(module.instantiate(JsValue::NULL).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_app_without_tick_rejected() {
        let module = web_app_only("return class {};");
        assert!(module.instantiate(JsValue::NULL).is_err());
    }

    #[wasm_bindgen_test]
    fn test_tick_exception_propagates() {
        let module = web_app_only("return class { tick() { throw new Error('tick'); } };");
        let mut app = module.instantiate(JsValue::NULL).unwrap();
        assert!(app.tick(&JsValue::UNDEFINED).is_err());
    }
}
