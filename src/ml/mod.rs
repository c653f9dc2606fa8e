// ============================================================
// Layer 5 — ML Layer (Burn)
// ============================================================
// All Burn-specific check logic lives here:
//
//   model.rs       — linear → ReLU → linear regressor + MSE loss
//   trainer.rs     — the few-step SGD training check
//   tensor_ops.rs  — matmul + backward-through-sum check
//   accelerator.rs — wgpu adapter discovery and GPU matmul
//   toolkit.rs     — BurnLoader (import check) and BurnToolkit,
//                    the Toolkit the checklist runner drives
//
// Reference: Burn Book §3 (Building Blocks), §5 (Training)

/// Tiny feed-forward regressor
pub mod model;

/// SGD training check
pub mod trainer;

/// Basic tensor and autodiff check
pub mod tensor_ops;

/// GPU discovery and on-device matmul
pub mod accelerator;

/// Real ToolkitLoader / Toolkit implementations
pub mod toolkit;
