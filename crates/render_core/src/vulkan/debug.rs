//! Debug messenger bridge
//!
//! Installs a `VK_EXT_debug_utils` messenger on a live instance and
//! routes every validation event into the `log` facade. The messenger is
//! a child of the instance: it must be destroyed before the instance,
//! which [`crate::vulkan::VulkanContext`] enforces through drop order.

use std::ffi::{c_void, CStr};

use ash::extensions::ext::DebugUtils;
use ash::{vk, Entry, Instance};

use crate::error::BootstrapError;

/// The extension the messenger belongs to, as an instance-extension name.
pub fn extension_name() -> String {
    DebugUtils::name().to_string_lossy().into_owned()
}

/// A live debug messenger with RAII cleanup.
pub struct DebugMessenger {
    loader: DebugUtils,
    messenger: vk::DebugUtilsMessengerEXT,
}

impl DebugMessenger {
    /// Install the messenger on `instance`.
    ///
    /// The creation entry point belongs to an optional extension, so it
    /// is resolved dynamically from the live instance first. A host that
    /// advertised the extension but cannot resolve the entry point is
    /// inconsistent; that is reported as [`BootstrapError::ExtensionNotPresent`]
    /// rather than silently running without diagnostics.
    pub fn install(entry: &Entry, instance: &Instance) -> Result<Self, BootstrapError> {
        let create_fn = unsafe {
            entry.get_instance_proc_addr(
                instance.handle(),
                b"vkCreateDebugUtilsMessengerEXT\0".as_ptr().cast(),
            )
        };
        if create_fn.is_none() {
            return Err(BootstrapError::ExtensionNotPresent("VK_EXT_debug_utils"));
        }

        let loader = DebugUtils::new(entry, instance);

        let create_info = vk::DebugUtilsMessengerCreateInfoEXT::builder()
            .message_severity(
                vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE
                    | vk::DebugUtilsMessageSeverityFlagsEXT::INFO
                    | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                    | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
            )
            .message_type(
                vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                    | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                    | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
            )
            .pfn_user_callback(Some(debug_callback));

        let messenger = unsafe {
            loader
                .create_debug_utils_messenger(&create_info, None)
                .map_err(BootstrapError::Api)?
        };

        Ok(Self { loader, messenger })
    }
}

impl Drop for DebugMessenger {
    fn drop(&mut self) {
        unsafe {
            self.loader
                .destroy_debug_utils_messenger(self.messenger, None);
        }
    }
}

/// The one logging level an event of `severity` maps to.
///
/// Classification is exclusive: each event produces exactly one log call,
/// at the highest severity bit the event carries.
pub(crate) fn level_for_severity(severity: vk::DebugUtilsMessageSeverityFlagsEXT) -> log::Level {
    if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
        log::Level::Error
    } else if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
        log::Level::Warn
    } else if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::INFO) {
        log::Level::Info
    } else {
        log::Level::Debug
    }
}

fn route_event(
    severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    message: &str,
) {
    match level_for_severity(severity) {
        log::Level::Error => log::error!("[Vulkan] {:?} - {}", message_type, message),
        log::Level::Warn => log::warn!("[Vulkan] {:?} - {}", message_type, message),
        log::Level::Info => log::info!("[Vulkan] {:?} - {}", message_type, message),
        _ => log::debug!("[Vulkan] {:?} - {}", message_type, message),
    }
}

/// Raw callback handed to the driver.
///
/// Invoked synchronously, possibly re-entrantly, from inside Vulkan
/// calls: it must not panic, must not call back into Vulkan, and always
/// returns `FALSE` so the triggering call is never aborted.
unsafe extern "system" fn debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut c_void,
) -> vk::Bool32 {
    if callback_data.is_null() {
        return vk::FALSE;
    }

    let message_ptr = (*callback_data).p_message;
    if message_ptr.is_null() {
        return vk::FALSE;
    }

    let message = CStr::from_ptr(message_ptr).to_string_lossy();
    route_event(message_severity, message_type, &message);

    vk::FALSE
}
