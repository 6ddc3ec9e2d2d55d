//! Instance creation
//!
//! Builds the Vulkan instance from an [`AppConfig`] and the window's
//! extension requirements, validating layers first when validation is
//! enabled and attaching the debug messenger afterwards.

use std::ffi::CString;

use ash::{vk, Entry, Instance};

use crate::config::AppConfig;
use crate::error::BootstrapError;
use crate::vulkan::debug::{self, DebugMessenger};
use crate::vulkan::layers;
use crate::window::Window;

/// Instance extensions to enable, windowing extensions first.
///
/// `window_extensions` is the windowing system's required-extension
/// report; `None` means the platform cannot support rendering to a
/// window, which is fatal here. The debug-utils extension is appended
/// last, exactly once, iff diagnostics are enabled.
pub fn resolve_extensions(
    window_extensions: Option<Vec<String>>,
    diagnostics_enabled: bool,
) -> Result<Vec<String>, BootstrapError> {
    let mut extensions = window_extensions.ok_or_else(|| {
        BootstrapError::Platform(
            "windowing system reported no required instance extensions".to_string(),
        )
    })?;

    if diagnostics_enabled {
        extensions.push(debug::extension_name());
    }

    Ok(extensions)
}

/// Layers to enable on the instance.
///
/// Empty whenever validation is disabled, regardless of what the config
/// lists: layers are strictly an opt-in debugging feature.
fn enabled_layer_names(config: &AppConfig) -> Vec<CString> {
    if config.enable_validation {
        config
            .validation_layers
            .iter()
            .map(|name| CString::new(name.as_str()).unwrap())
            .collect()
    } else {
        Vec::new()
    }
}

/// Vulkan instance with its debug messenger, RAII cleanup in child-first order.
pub struct VulkanContext {
    /// Vulkan entry point
    pub entry: Entry,
    /// Vulkan instance handle
    pub instance: Instance,
    debug_messenger: Option<DebugMessenger>,
}

impl VulkanContext {
    /// Create the instance described by `config`.
    ///
    /// When validation is enabled, every requested layer must be present
    /// on the host or this fails with
    /// [`BootstrapError::ValidationLayersUnavailable`] before any create
    /// call is attempted.
    pub fn new(config: &AppConfig, window: &Window) -> Result<Self, BootstrapError> {
        let entry =
            unsafe { Entry::load() }.map_err(|e| BootstrapError::EntryLoad(e.to_string()))?;

        if config.enable_validation {
            let available = layers::available_layers(&entry)?;
            let missing = layers::missing_layers(&config.validation_layers, &available);
            if !missing.is_empty() {
                return Err(BootstrapError::ValidationLayersUnavailable { missing });
            }
            log::info!("Validation layers found: {:?}", config.validation_layers);
        }

        let extensions = resolve_extensions(
            window.required_instance_extensions(),
            config.enable_validation,
        )?;
        log::debug!("Instance extensions: {:?}", extensions);

        let app_name = CString::new(config.app_name.as_str()).unwrap();
        let engine_name = CString::new(config.engine_name.as_str()).unwrap();
        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(config.app_version.to_vk())
            .engine_name(&engine_name)
            .engine_version(config.engine_version.to_vk())
            .api_version(vk::API_VERSION_1_0);

        // The CString vectors must stay alive until create_instance returns
        let extension_names: Vec<CString> = extensions
            .iter()
            .map(|ext| CString::new(ext.as_str()).unwrap())
            .collect();
        let extension_ptrs: Vec<*const i8> =
            extension_names.iter().map(|ext| ext.as_ptr()).collect();

        let layer_names = enabled_layer_names(config);
        let layer_ptrs: Vec<*const i8> = layer_names.iter().map(|name| name.as_ptr()).collect();

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs)
            .enabled_layer_names(&layer_ptrs);

        let instance = unsafe {
            entry
                .create_instance(&create_info, None)
                .map_err(BootstrapError::ContextCreation)?
        };

        let debug_messenger = if config.enable_validation {
            match DebugMessenger::install(&entry, &instance) {
                Ok(messenger) => Some(messenger),
                Err(e) => {
                    // Roll back the instance: nothing constructed so far
                    // may leak past a failed setup step.
                    unsafe { instance.destroy_instance(None) };
                    return Err(e);
                }
            }
        } else {
            None
        };

        Ok(Self {
            entry,
            instance,
            debug_messenger,
        })
    }
}

impl Drop for VulkanContext {
    fn drop(&mut self) {
        // Messenger first: its destroy entry point comes from the
        // instance and dies with it.
        self.debug_messenger.take();

        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_window_extensions_is_a_platform_error() {
        let result = resolve_extensions(None, false);
        assert!(matches!(result, Err(BootstrapError::Platform(_))));

        let result = resolve_extensions(None, true);
        assert!(matches!(result, Err(BootstrapError::Platform(_))));
    }

    #[test]
    fn test_diagnostics_disabled_never_adds_debug_extension() {
        let extensions = resolve_extensions(Some(names(&["VK_KHR_surface"])), false).unwrap();

        assert_eq!(extensions, names(&["VK_KHR_surface"]));
    }

    #[test]
    fn test_diagnostics_enabled_appends_debug_extension_last() {
        let extensions =
            resolve_extensions(Some(names(&["VK_KHR_surface", "VK_KHR_xcb_surface"])), true)
                .unwrap();

        assert_eq!(
            extensions,
            names(&["VK_KHR_surface", "VK_KHR_xcb_surface", "VK_EXT_debug_utils"])
        );
        assert_eq!(
            extensions
                .iter()
                .filter(|ext| *ext == "VK_EXT_debug_utils")
                .count(),
            1
        );
    }

    #[test]
    fn test_empty_window_extension_list_is_not_an_error() {
        // An empty report is still a report; only `None` is fatal.
        let extensions = resolve_extensions(Some(Vec::new()), true).unwrap();

        assert_eq!(extensions, names(&["VK_EXT_debug_utils"]));
    }

    #[test]
    fn test_layers_excluded_when_validation_disabled() {
        let config = AppConfig {
            enable_validation: false,
            validation_layers: names(&["VK_LAYER_KHRONOS_validation"]),
            ..AppConfig::default()
        };

        assert!(enabled_layer_names(&config).is_empty());
    }

    #[test]
    fn test_layers_included_when_validation_enabled() {
        let config = AppConfig {
            enable_validation: true,
            validation_layers: names(&["VK_LAYER_KHRONOS_validation"]),
            ..AppConfig::default()
        };

        let layer_names = enabled_layer_names(&config);
        assert_eq!(
            layer_names,
            vec![CString::new("VK_LAYER_KHRONOS_validation").unwrap()]
        );
    }
}
