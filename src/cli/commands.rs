// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every flag is optional: running with no arguments performs
// the full checklist with default sizes. A --config file is
// applied first, then individual flags override it.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::application::config::CheckConfig;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// JSON file with check settings (missing keys keep their defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for random tensors and shuffling, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not query or use any GPU
    #[arg(long)]
    pub skip_accelerator: bool,

    /// Side length of the square matrices multiplied on the GPU
    #[arg(long)]
    pub matrix_size: Option<usize>,

    /// Optimizer steps in the training check
    #[arg(long)]
    pub steps: Option<usize>,

    /// SGD learning rate in the training check
    #[arg(long)]
    pub lr: Option<f64>,

    /// Batch size of the data loading check
    #[arg(long)]
    pub batch_size: Option<usize>,
}

/// File first, then flags. The application layer never sees clap types.
impl TryFrom<CheckArgs> for CheckConfig {
    type Error = anyhow::Error;

    fn try_from(a: CheckArgs) -> Result<Self> {
        let mut cfg = match &a.config {
            Some(path) => CheckConfig::from_json_file(path)?,
            None       => CheckConfig::default(),
        };

        if a.seed.is_some()       { cfg.seed = a.seed; }
        if a.skip_accelerator     { cfg.skip_accelerator = true; }
        if let Some(n) = a.matrix_size { cfg.accelerator_matrix = n; }
        if let Some(n) = a.steps       { cfg.train_steps = n; }
        if let Some(lr) = a.lr         { cfg.learning_rate = lr; }
        if let Some(n) = a.batch_size  { cfg.batch_size = n; }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cfg = CheckConfig::try_from(CheckArgs::default()).unwrap();
        assert_eq!(cfg, CheckConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = CheckArgs {
            seed: Some(11),
            skip_accelerator: true,
            steps: Some(3),
            batch_size: Some(4),
            ..CheckArgs::default()
        };
        let cfg = CheckConfig::try_from(args).unwrap();
        assert_eq!(cfg.seed, Some(11));
        assert!(cfg.skip_accelerator);
        assert_eq!(cfg.train_steps, 3);
        assert_eq!(cfg.batch_size, 4);
        assert_eq!(cfg.accelerator_matrix, 1000);
    }
}
