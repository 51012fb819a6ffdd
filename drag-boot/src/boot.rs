use std::fmt;

use crate::config::{ContextConfig, GridLayout};
use crate::error::BootError;
use crate::platform::{
    AppModule, Application, FrameCallback, ModuleLoader, Page, Period, Platform, RenderContext,
};

/// Boots the application.
///
/// Disables the page's context menu, waits for the module, then builds the context,
/// constructs the application on the context's grid and starts the animation loop with a
/// callback that ticks the application once per frame. The module load is the only
/// suspension point. A failing step stops the sequence.
pub async fn boot<P, C, G, L>(page: &G, loader: L) -> Result<(), BootError<P::Error>>
where
    P: Platform,
    P::Error: fmt::Debug,
    C: RenderContext<P>,
    G: Page<P>,
    L: ModuleLoader<P>,
{
    page.suppress_context_menu().map_err(BootError::ContextMenu)?;
    log::debug!("native context menu disabled");

    let module = loader.load().await.map_err(BootError::Load)?;
    log::debug!("application module loaded");

    let node = page.app_node().map_err(BootError::Node)?;
    let input_buffer_type = module.input_buffer_type().map_err(BootError::Load)?;
    let layout = GridLayout::default();
    log::debug!(
        "creating {}x{} context ({} {}, {}x{}px cells)",
        layout.grid_width,
        layout.grid_height,
        layout.font_family,
        layout.font_size,
        layout.cell_width_px,
        layout.cell_height_px,
    );
    let config = ContextConfig::new(input_buffer_type, node, layout);
    let context = C::create(config).map_err(BootError::Context)?;

    let grid = context.grid().map_err(BootError::Context)?;
    let mut app = module.instantiate(grid).map_err(BootError::Instantiate)?;

    let frame: FrameCallback<P> =
        Box::new(move |input: &P::InputBuffer, _period: Period| app.tick(input));
    context.run_animation(frame).map_err(BootError::RunLoop)?;

    log::info!("animation loop started");
    Ok(())
}
