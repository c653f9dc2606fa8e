// ============================================================
// Layer 5 — Accelerator Probe
// ============================================================
// Two steps, both advisory:
//
//   1. Ask wgpu for GPU-class adapters (discrete, integrated,
//      virtual). Software rasterisers report as Cpu/Other and
//      are ignored. The same card exposed through two graphics
//      APIs is listed once.
//   2. If any exist, multiply two random N×N matrices on the
//      first one through Burn's Wgpu backend and read a scalar
//      back, which forces the kernels to actually run. The
//      operands come from a StdRng seeded with the run seed, so
//      --seed reproduces them on any device.
//
// Without the `wgpu` feature the probe reports "unavailable".

use burn::{prelude::*, tensor::TensorData};
use rand::{rngs::StdRng, Rng};

use crate::domain::report::AcceleratorReport;

/// A `size × size` matrix of uniform values in `[-1, 1)` drawn from `rng`.
#[cfg_attr(not(feature = "wgpu"), allow(dead_code))]
pub fn seeded_matrix<B: Backend>(rng: &mut StdRng, size: usize, device: &B::Device) -> Tensor<B, 2> {
    let values: Vec<f32> = (0..size * size).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Tensor::from_data(TensorData::new(values, [size, size]), device)
}

#[cfg(feature = "wgpu")]
pub fn probe(matrix_size: usize, seed: u64) -> AcceleratorReport {
    let adapters = gpu::adapters();
    let Some(first) = adapters.first() else {
        return AcceleratorReport::Unavailable {
            reason: "no GPU-class adapter found".to_string(),
        };
    };

    let backend = format!("{:?} via wgpu {}", first.backend, crate::infra::versions::WGPU);
    let devices = adapters.iter().map(|info| info.name.clone()).collect();
    tracing::info!("Running GPU matmul on '{}' ({:?})", first.name, first.device_type);

    let compute = gpu::matmul_check(first, matrix_size, seed).map_err(|e| e.to_string());
    AcceleratorReport::Available { backend, devices, compute }
}

#[cfg(not(feature = "wgpu"))]
pub fn probe(_matrix_size: usize, _seed: u64) -> AcceleratorReport {
    AcceleratorReport::Unavailable {
        reason: "built without the `wgpu` feature".to_string(),
    }
}

#[cfg(feature = "wgpu")]
mod gpu {
    use anyhow::{ensure, Result};
    use burn::{
        backend::{wgpu::WgpuDevice, Wgpu},
        prelude::*,
        tensor::ElementConversion,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use wgpu::{AdapterInfo, Backends, DeviceType, Instance};

    use super::seeded_matrix;
    use crate::infra::guard::guarded;

    pub fn is_gpu(device_type: DeviceType) -> bool {
        matches!(
            device_type,
            DeviceType::DiscreteGpu | DeviceType::IntegratedGpu | DeviceType::VirtualGpu
        )
    }

    /// GPU-class adapters, one entry per physical device.
    pub fn adapters() -> Vec<AdapterInfo> {
        let instance = Instance::default();
        let found: Vec<AdapterInfo> = instance
            .enumerate_adapters(Backends::PRIMARY)
            .into_iter()
            .map(|adapter| adapter.get_info())
            .collect();
        tracing::debug!("wgpu reported {} adapter(s)", found.len());
        dedupe_gpus(found)
    }

    pub fn dedupe_gpus(found: Vec<AdapterInfo>) -> Vec<AdapterInfo> {
        let mut gpus: Vec<AdapterInfo> = Vec::new();
        for info in found.into_iter().filter(|info| is_gpu(info.device_type)) {
            let seen = gpus.iter().any(|g| {
                g.vendor == info.vendor && g.device == info.device && g.name == info.name
            });
            if !seen {
                gpus.push(info);
            }
        }
        gpus
    }

    /// The Burn device that resolves to the first adapter of this type.
    pub fn burn_device(info: &AdapterInfo) -> Option<WgpuDevice> {
        match info.device_type {
            DeviceType::DiscreteGpu   => Some(WgpuDevice::DiscreteGpu(0)),
            DeviceType::IntegratedGpu => Some(WgpuDevice::IntegratedGpu(0)),
            DeviceType::VirtualGpu    => Some(WgpuDevice::VirtualGpu(0)),
            _ => None,
        }
    }

    pub fn matmul_check(info: &AdapterInfo, size: usize, seed: u64) -> Result<()> {
        let Some(device) = burn_device(info) else {
            anyhow::bail!("adapter '{}' is not a GPU", info.name);
        };

        guarded(|| {
            let mut rng = StdRng::seed_from_u64(seed);
            let x = seeded_matrix::<Wgpu>(&mut rng, size, &device);
            let y = seeded_matrix::<Wgpu>(&mut rng, size, &device);
            let z = x.matmul(y);
            ensure!(z.dims() == [size, size], "GPU matmul produced shape {:?}", z.dims());

            let total: f32 = z.sum().into_scalar().elem::<f32>();
            ensure!(total.is_finite(), "GPU matmul produced non-finite values");
            Ok(())
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use wgpu::Backend;

        fn info(name: &str, device: u32, device_type: DeviceType, backend: Backend) -> AdapterInfo {
            AdapterInfo {
                name: name.to_string(),
                vendor: 0x10de,
                device,
                device_type,
                driver: String::new(),
                driver_info: String::new(),
                backend,
            }
        }

        #[test]
        fn test_software_adapters_are_not_gpus() {
            let found = vec![
                info("llvmpipe", 0, DeviceType::Cpu, Backend::Vulkan),
                info("Basic Render", 1, DeviceType::Other, Backend::Dx12),
            ];
            assert!(dedupe_gpus(found).is_empty());
        }

        #[test]
        fn test_same_card_on_two_apis_listed_once() {
            let found = vec![
                info("RTX Test", 0x2684, DeviceType::DiscreteGpu, Backend::Vulkan),
                info("RTX Test", 0x2684, DeviceType::DiscreteGpu, Backend::Dx12),
                info("iGPU Test", 0x9a49, DeviceType::IntegratedGpu, Backend::Vulkan),
            ];
            let gpus = dedupe_gpus(found);
            let names: Vec<&str> = gpus.iter().map(|g| g.name.as_str()).collect();
            assert_eq!(names, vec!["RTX Test", "iGPU Test"]);
        }

        #[test]
        fn test_burn_device_follows_adapter_type() {
            let discrete = info("d", 1, DeviceType::DiscreteGpu, Backend::Vulkan);
            let integrated = info("i", 2, DeviceType::IntegratedGpu, Backend::Metal);
            let cpu = info("c", 3, DeviceType::Cpu, Backend::Vulkan);

            assert_eq!(burn_device(&discrete), Some(WgpuDevice::DiscreteGpu(0)));
            assert_eq!(burn_device(&integrated), Some(WgpuDevice::IntegratedGpu(0)));
            assert_eq!(burn_device(&cpu), None);
        }
    }
}
