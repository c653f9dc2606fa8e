// ============================================================
// Layer 2 — Check Configuration
// ============================================================
// Sizes and hyperparameters for every check. Defaults are the
// standard smoke-test values; a JSON file may override any
// subset of them (missing keys keep their default) and CLI
// flags override the file.
//
// Example file:
//   { "seed": 7, "skip_accelerator": true, "batch_size": 16 }

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::report::{LoaderPlan, TrainPlan};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// RNG seed for tensors and shuffling; drawn at random when absent
    pub seed:               Option<u64>,
    pub skip_accelerator:   bool,
    /// Side length of the square matrices multiplied on the GPU
    pub accelerator_matrix: usize,
    /// Rows generated for both the training and the data loading check
    pub samples:            usize,
    pub input_features:     usize,
    pub hidden_features:    usize,
    pub output_features:    usize,
    pub train_steps:        usize,
    pub learning_rate:      f64,
    pub batch_size:         usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            seed:               None,
            skip_accelerator:   false,
            accelerator_matrix: 1000,
            samples:            100,
            input_features:     10,
            hidden_features:    5,
            output_features:    1,
            train_steps:        5,
            learning_rate:      0.01,
            batch_size:         32,
        }
    }
}

impl CheckConfig {
    /// Load a (possibly partial) config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file '{}'", path.display()))?;
        let cfg = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("accelerator_matrix", self.accelerator_matrix),
            ("samples",            self.samples),
            ("input_features",     self.input_features),
            ("hidden_features",    self.hidden_features),
            ("output_features",    self.output_features),
            ("train_steps",        self.train_steps),
            ("batch_size",         self.batch_size),
        ];
        for (name, value) in sizes {
            ensure!(value > 0, "`{name}` must be greater than zero");
        }
        ensure!(
            self.learning_rate.is_finite() && self.learning_rate > 0.0,
            "`learning_rate` must be a positive number, got {}",
            self.learning_rate
        );
        Ok(())
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn train_plan(&self) -> TrainPlan {
        TrainPlan {
            samples:         self.samples,
            input_features:  self.input_features,
            hidden_features: self.hidden_features,
            output_features: self.output_features,
            steps:           self.train_steps,
            learning_rate:   self.learning_rate,
        }
    }

    pub fn loader_plan(&self) -> LoaderPlan {
        LoaderPlan {
            samples:         self.samples,
            input_features:  self.input_features,
            output_features: self.output_features,
            batch_size:      self.batch_size,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = CheckConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.train_plan().steps, 5);
        assert_eq!(cfg.loader_plan().batch_size, 32);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: CheckConfig = serde_json::from_str(r#"{ "batch_size": 8, "seed": 3 }"#).unwrap();
        assert_eq!(cfg.batch_size, 8);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.samples, 100);
        assert_eq!(cfg.learning_rate, 0.01);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let cfg = CheckConfig { batch_size: 0, ..CheckConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }

    #[test]
    fn test_bad_learning_rate_rejected() {
        for lr in [0.0, -0.1, f64::NAN] {
            let cfg = CheckConfig { learning_rate: lr, ..CheckConfig::default() };
            assert!(cfg.validate().is_err(), "lr {lr} should be rejected");
        }
    }

    #[test]
    fn test_explicit_seed_wins() {
        let cfg = CheckConfig { seed: Some(99), ..CheckConfig::default() };
        assert_eq!(cfg.resolve_seed(), 99);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = CheckConfig::from_json_file("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("burn-doctor-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "skip_accelerator": true, "train_steps": 2 }"#).unwrap();

        let cfg = CheckConfig::from_json_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(cfg.skip_accelerator);
        assert_eq!(cfg.train_steps, 2);
        assert_eq!(cfg.batch_size, 32);
    }
}
