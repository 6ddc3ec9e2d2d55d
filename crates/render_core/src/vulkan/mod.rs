//! Vulkan instance bootstrap
//!
//! Split by concern: `layers` negotiates validation layers, `instance`
//! builds the instance itself, `debug` bridges validation output into
//! the `log` facade.

pub mod debug;
pub mod instance;
pub mod layers;

pub use instance::VulkanContext;
