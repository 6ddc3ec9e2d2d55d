//! Core bootstrap layer for the Vulkan renderer.
//!
//! This crate owns everything up to (and including) instance creation:
//! the GLFW window, validation-layer negotiation, the Vulkan instance
//! itself, and the debug-utils messenger that bridges validation output
//! into the `log` facade. Device selection and the render pipeline live
//! above this crate and are not part of it.

pub mod config;
pub mod error;
pub mod logging;
pub mod vulkan;
pub mod window;

pub use config::AppConfig;
pub use error::BootstrapError;
pub use vulkan::VulkanContext;
pub use window::Window;
