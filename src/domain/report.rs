// ============================================================
// Layer 3 — Check Reports
// ============================================================
// Every check hands back one of these plain values. Shapes are
// stored as Vec<usize> so nothing here depends on tensor types.

/// Versions of the linked tensor stack and the toolchain it was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub framework: String,
    /// `None` when the vision bridge was compiled out.
    pub vision: Option<String>,
    pub array: String,
    pub runtime: String,
}

/// Shapes observed by the basic tensor check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorOpsReport {
    pub lhs:     Vec<usize>,
    pub rhs:     Vec<usize>,
    pub product: Vec<usize>,
    pub grad:    Vec<usize>,
}

/// Outcome of the accelerator query.
#[derive(Debug, Clone, PartialEq)]
pub enum AcceleratorReport {
    /// No GPU-class device, or probing was skipped or compiled out.
    Unavailable { reason: String },
    /// At least one device was found; `compute` is the on-device matmul result.
    Available {
        backend: String,
        devices: Vec<String>,
        compute: Result<(), String>,
    },
}

impl AcceleratorReport {
    /// True only when a device exists and the functional test passed.
    pub fn is_usable(&self) -> bool {
        matches!(self, AcceleratorReport::Available { compute: Ok(()), .. })
    }
}

/// Sizes and hyperparameters of the training check.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainPlan {
    pub samples:         usize,
    pub input_features:  usize,
    pub hidden_features: usize,
    pub output_features: usize,
    pub steps:           usize,
    pub learning_rate:   f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Number of optimizer updates actually applied
    pub steps:      usize,
    /// Loss observed at each step, before that step's update
    pub losses:     Vec<f32>,
    pub final_loss: f32,
}

/// Sizes of the data loading check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderPlan {
    pub samples:         usize,
    pub input_features:  usize,
    pub output_features: usize,
    pub batch_size:      usize,
}

/// Shape of the single batch pulled from the data loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub batch_size: usize,
    pub features:   usize,
    pub targets:    usize,
}
