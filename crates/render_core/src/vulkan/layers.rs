//! Validation-layer negotiation
//!
//! Layers are strictly an opt-in debugging feature: the instance builder
//! only consults this module when validation is enabled, and refuses to
//! create the instance if any requested layer is missing.

use std::ffi::CStr;

use ash::Entry;

use crate::error::BootstrapError;

/// Query the host for its installed instance layers.
///
/// An empty result is valid; it just means no layers are installed.
pub fn available_layers(entry: &Entry) -> Result<Vec<String>, BootstrapError> {
    let properties = entry
        .enumerate_instance_layer_properties()
        .map_err(BootstrapError::Api)?;

    Ok(properties
        .iter()
        .map(|layer| {
            // layer_name is a fixed-size NUL-terminated C array
            unsafe { CStr::from_ptr(layer.layer_name.as_ptr()) }
                .to_string_lossy()
                .into_owned()
        })
        .collect())
}

/// Every requested layer name that the host does not report.
///
/// Matching is exact and case-sensitive on the full name. Order and
/// duplicates in either list do not affect the result. All missing names
/// are collected so the failure report names each one, rather than just
/// the first.
pub fn missing_layers(requested: &[String], available: &[String]) -> Vec<String> {
    requested
        .iter()
        .filter(|name| !available.contains(name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_present_when_requested_subset_of_available() {
        let requested = names(&["VK_LAYER_KHRONOS_validation"]);
        let available = names(&["VK_LAYER_KHRONOS_validation", "VK_LAYER_LUNARG_api_dump"]);

        assert!(missing_layers(&requested, &available).is_empty());
    }

    #[test]
    fn test_missing_layer_reported() {
        let requested = names(&["DEBUG_X"]);
        let available = names(&["DEBUG_Y"]);

        assert_eq!(missing_layers(&requested, &available), names(&["DEBUG_X"]));
    }

    #[test]
    fn test_empty_request_always_satisfied() {
        assert!(missing_layers(&[], &[]).is_empty());
        assert!(missing_layers(&[], &names(&["DEBUG_Y"])).is_empty());
    }

    #[test]
    fn test_empty_host_fails_any_request() {
        let requested = names(&["VK_LAYER_KHRONOS_validation"]);

        assert_eq!(missing_layers(&requested, &[]), requested);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let requested = names(&["vk_layer_khronos_validation"]);
        let available = names(&["VK_LAYER_KHRONOS_validation"]);

        assert_eq!(missing_layers(&requested, &available), requested);
    }

    #[test]
    fn test_matching_is_full_string() {
        let requested = names(&["VK_LAYER_KHRONOS"]);
        let available = names(&["VK_LAYER_KHRONOS_validation"]);

        assert_eq!(missing_layers(&requested, &available), requested);
    }

    #[test]
    fn test_duplicates_do_not_change_result() {
        let requested = names(&["A", "A", "B"]);
        let available = names(&["A", "A"]);

        assert_eq!(missing_layers(&requested, &available), names(&["B"]));
    }

    #[test]
    fn test_all_missing_names_collected() {
        let requested = names(&["A", "B", "C"]);
        let available = names(&["B"]);

        assert_eq!(missing_layers(&requested, &available), names(&["A", "C"]));
    }
}
