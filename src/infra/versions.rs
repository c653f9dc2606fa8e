// ============================================================
// Layer 6 — Version Information
// ============================================================
// build.rs resolves each crate through this package's own
// dependency edges in Cargo.lock and exports one env var per crate.
// Unresolvable entries are exported as "unknown", so env! below
// never fails to compile.

use crate::domain::report::VersionInfo;

pub const BURN:    &str = env!("BURN_DOCTOR_BURN_VERSION");
pub const NDARRAY: &str = env!("BURN_DOCTOR_NDARRAY_VERSION");
pub const IMAGE:   &str = env!("BURN_DOCTOR_IMAGE_VERSION");
#[cfg(feature = "wgpu")]
pub const WGPU:    &str = env!("BURN_DOCTOR_WGPU_VERSION");
pub const RUSTC:   &str = env!("BURN_DOCTOR_RUSTC_VERSION");
pub const TARGET:  &str = env!("BURN_DOCTOR_TARGET");

/// Versions of everything this binary was linked against.
pub fn current() -> VersionInfo {
    VersionInfo {
        framework: BURN.to_string(),
        vision:    vision_version(),
        array:     NDARRAY.to_string(),
        runtime:   format!("{RUSTC} ({TARGET})"),
    }
}

fn vision_version() -> Option<String> {
    if cfg!(feature = "vision") {
        Some(IMAGE.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_mentions_target() {
        let info = current();
        assert!(info.runtime.contains(TARGET));
        assert!(!info.framework.is_empty());
    }

    // Cargo.toml asks for burn 0.16 and ndarray 0.16; older copies that
    // other crates pull in must not be reported instead.
    #[test]
    fn test_reports_directly_linked_versions() {
        assert!(NDARRAY.starts_with("0.16"), "reported ndarray {NDARRAY}");
        assert!(BURN.starts_with("0.16"), "reported burn {BURN}");
    }

    #[test]
    fn test_vision_follows_feature() {
        assert_eq!(current().vision.is_some(), cfg!(feature = "vision"));
    }
}
