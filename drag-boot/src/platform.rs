use std::future::Future;
use std::time::Duration;

use crate::config::ContextConfig;

/// The host's concrete types. In the browser every one of these is a `JsValue` or a
/// DOM handle; tests plug in plain Rust values.
pub trait Platform: 'static {
    /// Target node the context renders into.
    type Node;
    /// The module's exported input buffer type, passed through to the context.
    type InputBufferType;
    /// Per-frame input snapshot produced by the context.
    type InputBuffer;
    /// Opaque drawable surface obtained from the context.
    type Grid;
    type Error;
}

/// Host page services used during boot.
pub trait Page<P: Platform> {
    /// Disables the native context menu for the whole page, for the rest of its lifetime.
    fn suppress_context_menu(&self) -> Result<(), P::Error>;

    /// Resolves the node the context is bound to.
    fn app_node(&self) -> Result<P::Node, P::Error>;
}

/// Asynchronous source of the application module.
pub trait ModuleLoader<P: Platform> {
    type Module: AppModule<P>;

    fn load(self) -> impl Future<Output = Result<Self::Module, P::Error>>;
}

/// A resolved application module.
pub trait AppModule<P: Platform> {
    type App: Application<P>;

    fn input_buffer_type(&self) -> Result<P::InputBufferType, P::Error>;

    /// Constructs the application on the given grid.
    fn instantiate(&self, grid: P::Grid) -> Result<Self::App, P::Error>;
}

pub trait Application<P: Platform>: 'static {
    fn tick(&mut self, input: &P::InputBuffer) -> Result<(), P::Error>;
}

/// Called by the context once per animation frame.
pub type FrameCallback<P> = Box<
    dyn FnMut(&<P as Platform>::InputBuffer, Period) -> Result<(), <P as Platform>::Error>,
>;

/// Rendering and input context bound to a node.
pub trait RenderContext<P: Platform>: Sized {
    fn create(config: ContextConfig<P::InputBufferType, P::Node>) -> Result<Self, P::Error>;

    fn grid(&self) -> Result<P::Grid, P::Error>;

    /// Starts the animation loop. Returns once the loop is scheduled; the loop itself runs
    /// for the page's lifetime.
    fn run_animation(self, frame: FrameCallback<P>) -> Result<(), P::Error>;
}

/// Decides whether the native context menu may open for `event`. It never may.
pub fn native_context_menu<E: ?Sized>(_event: &E) -> bool {
    false
}

/// Time elapsed between two animation frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Period(Duration);

impl Period {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// From a host timestamp delta in milliseconds. Negative, NaN and infinite
    /// values become zero.
    pub fn from_millis_f64(millis: f64) -> Self {
        Self(Duration::try_from_secs_f64(millis / 1000.0).unwrap_or_default())
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for Period {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}
