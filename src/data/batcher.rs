// ============================================================
// Layer 4 — Regression Batcher
// ============================================================
// Implements Burn's Batcher trait: a Vec<RegressionSample>
// becomes two tensors whose first dimension is the batch size.
//
//   Input:  N samples, each with F features and T targets
//   Output: inputs [N, F], targets [N, T]
//
// Rows are flattened in sample order, so row i of each tensor
// belongs to items[i].

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
    tensor::TensorData,
};

use crate::data::dataset::RegressionSample;

/// A batch of samples ready for a forward pass.
#[derive(Debug, Clone)]
pub struct RegressionBatch<B: Backend> {
    /// shape: [batch_size, features]
    pub inputs:  Tensor<B, 2>,
    /// shape: [batch_size, targets]
    pub targets: Tensor<B, 2>,
}

/// Holds the device so batches are created where the model lives.
#[derive(Clone, Debug)]
pub struct RegressionBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> RegressionBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<RegressionSample, RegressionBatch<B>> for RegressionBatcher<B> {
    fn batch(&self, items: Vec<RegressionSample>) -> RegressionBatch<B> {
        let batch_size  = items.len();
        let feature_dim = items.first().map_or(0, |s| s.features.len());
        let target_dim  = items.first().map_or(0, |s| s.target.len());

        let features: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();
        let targets: Vec<f32> = items
            .iter()
            .flat_map(|s| s.target.iter().copied())
            .collect();

        let inputs = Tensor::<B, 2>::from_data(
            TensorData::new(features, [batch_size, feature_dim]),
            &self.device,
        );
        let targets = Tensor::<B, 2>::from_data(
            TensorData::new(targets, [batch_size, target_dim]),
            &self.device,
        );

        RegressionBatch { inputs, targets }
    }
}
