// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestration only: the config that sizes each check and the
// runner that executes them in order. No tensor code and no
// direct printing; both go through Layer 3 traits.

// Check sizes, defaults, JSON loading and validation
pub mod config;

// The six-step checklist runner
pub mod checklist;
