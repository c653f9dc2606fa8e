// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The checklist runner only ever talks to these traits:
//
//   ToolkitLoader → performs the import check, hands out a Toolkit
//   Toolkit       → the loaded framework handle used by checks 2–6
//   Reporter      → where progress lines go (console, or a test recorder)
//
// BurnLoader / BurnToolkit (Layer 5) are the real implementations.

use anyhow::Result;

use crate::domain::report::{
    AcceleratorReport, BatchReport, LoaderPlan, TensorOpsReport, TrainPlan, TrainReport,
    VersionInfo,
};

// ─── ToolkitLoader ────────────────────────────────────────────────────────────
/// Loads the tensor framework and its companions.
///
/// Returning an error here is the only fatal-at-start condition of a run.
pub trait ToolkitLoader {
    fn load(&self) -> Result<Box<dyn Toolkit>>;
}

// ─── Toolkit ──────────────────────────────────────────────────────────────────
/// A loaded framework able to run each smoke check.
///
/// Implementations must turn framework panics into errors; the runner
/// treats every `Err` as "this check failed" and nothing more.
pub trait Toolkit {
    /// Linked component versions. Never fails.
    fn versions(&self) -> VersionInfo;

    /// Matrix multiply plus a backward pass through a sum.
    fn tensor_ops(&self) -> Result<TensorOpsReport>;

    /// Device discovery plus a `matrix_size`² multiply on the first device.
    fn accelerator(&self, matrix_size: usize) -> AcceleratorReport;

    /// A few optimizer steps on a tiny feed-forward network.
    fn train(&self, plan: &TrainPlan) -> Result<TrainReport>;

    /// Pull exactly one shuffled batch out of a data loader.
    fn first_batch(&self, plan: &LoaderPlan) -> Result<BatchReport>;
}

// ─── Reporter ─────────────────────────────────────────────────────────────────
/// Sink for the human-readable checklist.
pub trait Reporter {
    /// Start a numbered section
    fn section(&mut self, title: &str);
    /// ✓ line
    fn pass(&mut self, message: &str);
    /// ⚠ line
    fn warn(&mut self, message: &str);
    /// ✗ line
    fn fail(&mut self, message: &str);
    /// Indented detail under the previous line
    fn detail(&mut self, message: &str);
    /// ❌ banner that ends a run
    fn fatal(&mut self, message: &str);
    /// Unmarked line
    fn note(&mut self, message: &str);
}
