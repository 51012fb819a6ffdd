use drag_boot::{native_context_menu, Page};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::Browser;

/// The host page: the document and the element the context binds to, either passed in
/// or looked up by id.
pub struct BrowserPage {
    node: Option<Element>,
    node_id: String,
}

impl BrowserPage {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node: None,
            node_id: node_id.into(),
        }
    }

    /// Binds to `node` instead of looking one up.
    pub fn with_node(mut self, node: Element) -> Self {
        self.node = Some(node);
        self
    }

    fn document(&self) -> Result<Document, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        Ok(window.document().ok_or("No document")?)
    }
}

impl Page<Browser> for BrowserPage {
    /// Sets `document.oncontextmenu` to a handler returning `false`. Never undone.
    fn suppress_context_menu(&self) -> Result<(), JsValue> {
        let document = self.document()?;
        let handler =
            Closure::<dyn FnMut(Event) -> bool>::new(|event: Event| native_context_menu(&event));
        document.set_oncontextmenu(Some(handler.as_ref().unchecked_ref()));
        handler.forget();
        Ok(())
    }

    fn app_node(&self) -> Result<Element, JsValue> {
        if let Some(node) = &self.node {
            return Ok(node.clone());
        }
        let document = self.document()?;
        document.get_element_by_id(&self.node_id).ok_or_else(|| {
            JsError::new(&format!("no element with id `{}`", self.node_id)).into()
        })
    }
}
