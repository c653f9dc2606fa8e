use anyhow::{anyhow, ensure, Result};
use burn::{
    data::dataset::Dataset,
    prelude::*,
    tensor::Distribution,
};
use serde::{Deserialize, Serialize};

/// One input row and the target it should regress to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionSample {
    pub features: Vec<f32>,
    pub target:   Vec<f32>,
}

/// Fixed-size paired collection of inputs and targets.
#[derive(Debug)]
pub struct RegressionDataset {
    samples:     Vec<RegressionSample>,
    feature_dim: usize,
    target_dim:  usize,
}

impl RegressionDataset {
    /// Pair row-major `features` (`len × feature_dim`) with `targets`
    /// (`len × target_dim`). Both must describe the same number of rows.
    pub fn from_rows(
        features:    &[f32],
        feature_dim: usize,
        targets:     &[f32],
        target_dim:  usize,
    ) -> Result<Self> {
        ensure!(feature_dim > 0 && target_dim > 0, "row widths must be non-zero");
        ensure!(
            features.len() % feature_dim == 0 && targets.len() % target_dim == 0,
            "data does not divide into whole rows"
        );
        let rows = features.len() / feature_dim;
        ensure!(
            rows == targets.len() / target_dim,
            "size mismatch between inputs ({rows} rows) and targets ({} rows)",
            targets.len() / target_dim
        );

        let samples = features
            .chunks_exact(feature_dim)
            .zip(targets.chunks_exact(target_dim))
            .map(|(f, t)| RegressionSample { features: f.to_vec(), target: t.to_vec() })
            .collect();

        Ok(Self { samples, feature_dim, target_dim })
    }

    /// `len` standard-normal rows drawn with the framework's own RNG.
    pub fn random<B: Backend>(
        len:         usize,
        feature_dim: usize,
        target_dim:  usize,
        device:      &B::Device,
    ) -> Result<Self> {
        let features = Tensor::<B, 2>::random([len, feature_dim], Distribution::Normal(0.0, 1.0), device)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("reading input tensor: {e:?}"))?;
        let targets = Tensor::<B, 2>::random([len, target_dim], Distribution::Normal(0.0, 1.0), device)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("reading target tensor: {e:?}"))?;

        Self::from_rows(&features, feature_dim, &targets, target_dim)
    }

    pub fn feature_dim(&self) -> usize { self.feature_dim }

    pub fn target_dim(&self) -> usize { self.target_dim }
}

impl Dataset<RegressionSample> for RegressionDataset {
    fn get(&self, index: usize) -> Option<RegressionSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    #[test]
    fn test_rows_are_paired_in_order() {
        let features = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let targets  = [10.0, 20.0, 30.0];
        let ds = RegressionDataset::from_rows(&features, 2, &targets, 1).unwrap();

        assert_eq!(ds.len(), 3);
        let second = ds.get(1).unwrap();
        assert_eq!(second.features, vec![3.0, 4.0]);
        assert_eq!(second.target,   vec![20.0]);
        assert!(ds.get(3).is_none());
    }

    #[test]
    fn test_mismatched_row_counts_rejected() {
        let features = [0.0; 20];
        let targets  = [0.0; 3];
        let err = RegressionDataset::from_rows(&features, 10, &targets, 1).unwrap_err();
        assert!(err.to_string().contains("size mismatch"));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let features = [0.0; 7];
        let targets  = [0.0; 2];
        assert!(RegressionDataset::from_rows(&features, 2, &targets, 1).is_err());
    }

    #[test]
    fn test_random_dataset_shape() {
        let device = Default::default();
        let ds = RegressionDataset::random::<NdArray>(100, 10, 1, &device).unwrap();
        assert_eq!(ds.len(), 100);
        assert_eq!(ds.feature_dim(), 10);
        assert_eq!(ds.target_dim(), 1);
        let sample = ds.get(42).unwrap();
        assert_eq!(sample.features.len(), 10);
        assert!(sample.features.iter().all(|v| v.is_finite()));
    }
}
