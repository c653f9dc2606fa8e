// ============================================================
// Layer 5 — Basic Tensor Operations Check
// ============================================================
//   x [3, 4] · y [4, 5] → z [3, 5]
//   x.require_grad(); sum(x).backward() → ∂/∂x = ones [3, 4]

use anyhow::{ensure, Context, Result};
use burn::{
    prelude::*,
    tensor::{backend::AutodiffBackend, Distribution, ElementConversion},
};

use crate::domain::report::TensorOpsReport;

pub const LHS_SHAPE: [usize; 2] = [3, 4];
pub const RHS_SHAPE: [usize; 2] = [4, 5];

pub fn run_tensor_ops<B: AutodiffBackend>(device: &B::Device) -> Result<TensorOpsReport> {
    let x = Tensor::<B, 2>::random(LHS_SHAPE, Distribution::Normal(0.0, 1.0), device);
    let y = Tensor::<B, 2>::random(RHS_SHAPE, Distribution::Normal(0.0, 1.0), device);

    let z = x.clone().matmul(y);
    let product = z.dims();
    let expected = [LHS_SHAPE[0], RHS_SHAPE[1]];
    ensure!(product == expected, "matmul produced shape {product:?}, expected {expected:?}");

    let x = x.require_grad();
    let grads = x.clone().sum().backward();
    let grad = x
        .grad(&grads)
        .context("backward pass recorded no gradient for the tracked input")?;
    let grad_dims = grad.dims();
    ensure!(grad_dims == LHS_SHAPE, "gradient has shape {grad_dims:?}, expected {LHS_SHAPE:?}");

    // d(sum)/dx is 1 everywhere
    let grad_total: f32 = grad.sum().into_scalar().elem::<f32>();
    let cells = (LHS_SHAPE[0] * LHS_SHAPE[1]) as f32;
    ensure!(
        (grad_total - cells).abs() < 1e-4,
        "gradient of a sum should be all ones (total {grad_total}, expected {cells})"
    );

    Ok(TensorOpsReport {
        lhs:     LHS_SHAPE.to_vec(),
        rhs:     RHS_SHAPE.to_vec(),
        product: product.to_vec(),
        grad:    grad_dims.to_vec(),
    })
}
