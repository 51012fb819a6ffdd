use std::fmt;

/// Step of the boot sequence that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BootStage {
    ContextMenu,
    Load,
    Node,
    Context,
    Instantiate,
    RunLoop,
}

impl fmt::Display for BootStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ContextMenu => "context menu override",
            Self::Load => "module load",
            Self::Node => "node lookup",
            Self::Context => "context construction",
            Self::Instantiate => "application construction",
            Self::RunLoop => "animation loop start",
        };
        f.write_str(label)
    }
}

/// A boot failure, carrying the host's error value untouched.
///
/// None of these are retried. The host decides how they surface.
#[derive(Debug, thiserror::Error)]
pub enum BootError<E: fmt::Debug> {
    #[error("failed to disable the native context menu")]
    ContextMenu(E),
    #[error("failed to load the application module")]
    Load(E),
    #[error("failed to resolve the application node")]
    Node(E),
    #[error("failed to construct the rendering context")]
    Context(E),
    #[error("failed to construct the application")]
    Instantiate(E),
    #[error("failed to start the animation loop")]
    RunLoop(E),
}

impl<E: fmt::Debug> BootError<E> {
    pub fn stage(&self) -> BootStage {
        match self {
            Self::ContextMenu(_) => BootStage::ContextMenu,
            Self::Load(_) => BootStage::Load,
            Self::Node(_) => BootStage::Node,
            Self::Context(_) => BootStage::Context,
            Self::Instantiate(_) => BootStage::Instantiate,
            Self::RunLoop(_) => BootStage::RunLoop,
        }
    }

    pub fn inner(&self) -> &E {
        match self {
            Self::ContextMenu(e)
            | Self::Load(e)
            | Self::Node(e)
            | Self::Context(e)
            | Self::Instantiate(e)
            | Self::RunLoop(e) => e,
        }
    }

    pub fn into_inner(self) -> E {
        match self {
            Self::ContextMenu(e)
            | Self::Load(e)
            | Self::Node(e)
            | Self::Context(e)
            | Self::Instantiate(e)
            | Self::RunLoop(e) => e,
        }
    }
}
