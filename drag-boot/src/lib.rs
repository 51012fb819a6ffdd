//! drag bootstrap
//!
//! Wires an application module to a rendering context: loads the module, builds the
//! context configuration, instantiates the application on the context's grid and hands
//! a per-frame tick callback to the context's animation loop.
//!
//! Nothing here knows about the browser. The host supplies its types through
//! [`Platform`] and its collaborators through the [`Page`], [`ModuleLoader`],
//! [`AppModule`], [`Application`] and [`RenderContext`] traits; `drag-web` is the
//! wasm32 binding.

mod boot;
mod config;
mod error;
mod platform;

pub use boot::boot;
pub use config::{ConfigValue, ContextConfig, GridLayout, FIELD_NAMES};
pub use error::{BootError, BootStage};
pub use platform::{
    native_context_menu, AppModule, Application, FrameCallback, ModuleLoader, Page, Period,
    Platform, RenderContext,
};
