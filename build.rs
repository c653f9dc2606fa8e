// Bakes the versions of the linked tensor stack into the binary so the
// version report can print them without any runtime lookup.
//
// Versions are taken from this package's own dependency edges in Cargo.lock.
// The lock often holds several versions of one crate (e.g. an older ndarray
// pulled in transitively); only the edge from the root package says which
// one this binary links directly.

use cargo_lock::Lockfile;
use std::{env, path::Path, process::Command};

const LINKED_CRATES: &[(&str, &str)] = &[
    ("burn", "BURN_DOCTOR_BURN_VERSION"),
    ("image", "BURN_DOCTOR_IMAGE_VERSION"),
    ("ndarray", "BURN_DOCTOR_NDARRAY_VERSION"),
    ("wgpu", "BURN_DOCTOR_WGPU_VERSION"),
];

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let package = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "burn-doctor".to_string());
    let lock_path = Path::new(&manifest_dir).join("Cargo.lock");
    println!("cargo:rerun-if-changed={}", lock_path.display());
    println!("cargo:rerun-if-changed=build.rs");

    let lockfile = match Lockfile::load(&lock_path) {
        Ok(lockfile) => Some(lockfile),
        Err(e) => {
            println!("cargo:warning=cannot read {}: {e}", lock_path.display());
            None
        }
    };

    for (krate, var) in LINKED_CRATES {
        let version = lockfile
            .as_ref()
            .and_then(|lock| direct_dependency_version(lock, &package, krate))
            .unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env={var}={version}");
    }

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "rustc (unknown version)".to_string());
    println!("cargo:rustc-env=BURN_DOCTOR_RUSTC_VERSION={rustc_version}");

    let target = env::var("TARGET").unwrap_or_else(|_| "unknown-target".to_string());
    println!("cargo:rustc-env=BURN_DOCTOR_TARGET={target}");
}

/// Version of `krate` as resolved for the root package `package`.
fn direct_dependency_version(lock: &Lockfile, package: &str, krate: &str) -> Option<String> {
    let root = lock.packages.iter().find(|p| p.name.as_str() == package)?;
    root.dependencies
        .iter()
        .find(|dep| dep.name.as_str() == krate)
        .map(|dep| dep.version.to_string())
}
