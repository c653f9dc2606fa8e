// ============================================================
// Layer 4 — First-Batch Loader
// ============================================================
// The data loading check: random rows go into a dataset, the
// dataset goes into a shuffling DataLoader, and exactly one
// batch is pulled out. The iterator is dropped right after, so
// the remaining batches are never materialised.
//
// No worker threads are requested. Burn's builder then returns
// its single-threaded loader, which keeps the check synchronous.

use anyhow::{ensure, Context, Result};
use burn::{data::dataloader::DataLoaderBuilder, prelude::*};

use crate::data::{batcher::RegressionBatcher, dataset::RegressionDataset};
use crate::domain::report::{BatchReport, LoaderPlan};

/// Build a shuffling loader over `plan.samples` random rows and
/// return the shape of the first batch it yields.
pub fn first_batch<B: Backend>(
    plan:   &LoaderPlan,
    device: &B::Device,
    seed:   u64,
) -> Result<BatchReport> {
    let dataset = RegressionDataset::random::<B>(
        plan.samples,
        plan.input_features,
        plan.output_features,
        device,
    )?;
    tracing::debug!(
        "Dataset ready: {} rows, {} features → {} targets",
        plan.samples, dataset.feature_dim(), dataset.target_dim()
    );

    let loader = DataLoaderBuilder::new(RegressionBatcher::<B>::new(device.clone()))
        .batch_size(plan.batch_size)
        .shuffle(seed)
        .build(dataset);

    let batch = loader
        .iter()
        .next()
        .context("data loader yielded no batches")?;

    let [batch_size, features] = batch.inputs.dims();
    let [_, targets] = batch.targets.dims();
    ensure!(
        batch_size <= plan.batch_size,
        "loader produced a batch of {batch_size}, larger than the requested {}",
        plan.batch_size
    );

    Ok(BatchReport { batch_size, features, targets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    fn plan(samples: usize, batch_size: usize) -> LoaderPlan {
        LoaderPlan { samples, input_features: 10, output_features: 1, batch_size }
    }

    #[test]
    fn test_first_batch_is_full_when_enough_rows() {
        let device = Default::default();
        let report = first_batch::<NdArray>(&plan(100, 32), &device, 42).unwrap();
        assert_eq!(report, BatchReport { batch_size: 32, features: 10, targets: 1 });
    }

    #[test]
    fn test_first_batch_never_exceeds_dataset() {
        let device = Default::default();
        let report = first_batch::<NdArray>(&plan(10, 32), &device, 7).unwrap();
        assert_eq!(report.batch_size, 10);
    }
}
