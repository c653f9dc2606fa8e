// ============================================================
// Layer 5 — Burn Toolkit
// ============================================================
// The real ToolkitLoader / Toolkit pair.
//
// "Import" for a statically linked framework means: can each
// component actually execute something? BurnLoader checks
//
//   framework → a reduction on the NdArray CPU backend
//   vision    → an image round-tripped into a tensor
//   array     → an ndarray matrix handed to Burn and reduced
//
// and only then hands out a BurnToolkit. Every check body
// runs through `guarded`, so a Burn panic becomes an Err.

use anyhow::{ensure, Result};
use burn::{
    backend::{ndarray::NdArrayDevice, Autodiff, NdArray},
    prelude::*,
    tensor::{ElementConversion, TensorData},
};

use crate::data::loader::first_batch;
use crate::domain::{
    report::{
        AcceleratorReport, BatchReport, LoaderPlan, TensorOpsReport, TrainPlan, TrainReport,
        VersionInfo,
    },
    traits::{Toolkit, ToolkitLoader},
};
use crate::infra::{guard::guarded, versions};
use crate::ml::{accelerator, tensor_ops::run_tensor_ops, trainer::run_training};

type CpuBackend   = NdArray;
type TrainBackend = Autodiff<NdArray>;

/// Probes the Burn stack and seeds its CPU backend.
pub struct BurnLoader {
    seed: u64,
}

impl BurnLoader {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ToolkitLoader for BurnLoader {
    fn load(&self) -> Result<Box<dyn Toolkit>> {
        let device = NdArrayDevice::Cpu;

        guarded(|| probe_framework(&device))
            .map_err(|e| e.context(format!("burn {} CPU backend unusable", versions::BURN)))?;
        guarded(|| probe_vision(&device))
            .map_err(|e| e.context("vision support unusable"))?;
        guarded(|| probe_array(&device))
            .map_err(|e| e.context(format!("ndarray {} unusable", versions::NDARRAY)))?;

        <TrainBackend as Backend>::seed(self.seed);
        tracing::info!("Burn CPU backend ready (seed {})", self.seed);

        Ok(Box::new(BurnToolkit { device, seed: self.seed }))
    }
}

fn probe_framework(device: &NdArrayDevice) -> Result<()> {
    let total: f32 = Tensor::<CpuBackend, 1>::from_floats([1.0, 2.0, 3.0], device)
        .sum()
        .into_scalar()
        .elem::<f32>();
    ensure!((total - 6.0).abs() < 1e-6, "1 + 2 + 3 evaluated to {total}");
    Ok(())
}

#[cfg(feature = "vision")]
fn probe_vision(device: &NdArrayDevice) -> Result<()> {
    crate::data::vision::probe::<CpuBackend>(device)
}

#[cfg(not(feature = "vision"))]
fn probe_vision(_device: &NdArrayDevice) -> Result<()> {
    anyhow::bail!("built without the `vision` feature")
}

fn probe_array(device: &NdArrayDevice) -> Result<()> {
    let identity = ndarray::Array2::<f32>::eye(3);
    let shape = identity.shape().to_vec();
    let values: Vec<f32> = identity.iter().copied().collect();

    let tensor = Tensor::<CpuBackend, 2>::from_data(TensorData::new(values, shape), device);
    let trace: f32 = tensor.sum().into_scalar().elem::<f32>();
    ensure!((trace - 3.0).abs() < 1e-6, "3×3 identity summed to {trace}");
    Ok(())
}

/// Framework handle shared by checks 2–6.
pub struct BurnToolkit {
    device: NdArrayDevice,
    seed:   u64,
}

impl Toolkit for BurnToolkit {
    fn versions(&self) -> VersionInfo {
        versions::current()
    }

    fn tensor_ops(&self) -> Result<TensorOpsReport> {
        guarded(|| run_tensor_ops::<TrainBackend>(&self.device))
    }

    fn accelerator(&self, matrix_size: usize) -> AcceleratorReport {
        match guarded(|| Ok(accelerator::probe(matrix_size, self.seed))) {
            Ok(report) => report,
            Err(e) => AcceleratorReport::Unavailable { reason: e.to_string() },
        }
    }

    fn train(&self, plan: &TrainPlan) -> Result<TrainReport> {
        guarded(|| run_training::<TrainBackend>(plan, &self.device))
    }

    fn first_batch(&self, plan: &LoaderPlan) -> Result<BatchReport> {
        guarded(|| first_batch::<CpuBackend>(plan, &self.device, self.seed))
    }
}
