// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting helpers used by several layers:
//
//   versions.rs — versions of the linked stack, baked in by build.rs
//                 from Cargo.lock, plus the rustc/target triple
//
//   guard.rs    — runs a check body and turns a framework panic
//                 into an ordinary anyhow::Error so the runner
//                 can report it like any other failure

/// Build-time version information
pub mod versions;

/// Panic-to-error guard around framework calls
pub mod guard;
