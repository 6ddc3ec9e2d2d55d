//! Bootstrap error taxonomy
//!
//! Every variant here is fatal: each one reports a static capability of
//! the host (missing layer, missing extension, refused instance), so none
//! of them is retried. They propagate with `?` up to `main`, which logs
//! once and exits non-zero.

use ash::vk;
use thiserror::Error;

use crate::window::WindowError;

/// Errors that can abort the bootstrap sequence
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// One or more requested validation layers are not installed on the host
    #[error("validation layers requested but not available: {missing:?}")]
    ValidationLayersUnavailable {
        /// Every requested layer name absent from the host's layer set
        missing: Vec<String>,
    },

    /// The windowing system could not report its required instance extensions
    #[error("platform error: {0}")]
    Platform(String),

    /// The Vulkan loader itself could not be loaded
    #[error("failed to load Vulkan entry: {0}")]
    EntryLoad(String),

    /// `vkCreateInstance` returned non-success
    #[error("failed to create instance: {0:?}")]
    ContextCreation(vk::Result),

    /// An extension entry point could not be resolved from the live instance
    #[error("extension not present: {0}")]
    ExtensionNotPresent(&'static str),

    /// General Vulkan API error outside instance creation
    #[error("Vulkan API error: {0:?}")]
    Api(vk::Result),

    /// Window system initialization or creation failed
    #[error(transparent)]
    Window(#[from] WindowError),
}
