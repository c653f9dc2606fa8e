// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything the data loading check needs, plus the bridge
// from decoded images into tensors:
//
//   random tensors
//       │
//       ▼
//   RegressionDataset  → implements Burn's Dataset trait
//       │
//       ▼
//   RegressionBatcher  → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader         → shuffled batches; we pull only one
//
//   RgbImage ──► image_to_tensor ──► [3, H, W] tensor   (vision feature)
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Implements Burn's Dataset trait for input/target rows
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Builds the shuffling data loader and pulls the first batch
pub mod loader;

/// Converts decoded images into channel-first tensors
#[cfg(feature = "vision")]
pub mod vision;
