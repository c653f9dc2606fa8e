// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that describe what a check
// produces and who performs it.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO printing or file I/O
//   - Only plain Rust structs, enums, and traits
//
// Keeping the framework out of this layer is what lets the
// checklist runner be tested with a fake toolkit and no GPU.

// Results and inputs of the individual checks
pub mod report;

// Toolkit, ToolkitLoader and Reporter abstractions
pub mod traits;
