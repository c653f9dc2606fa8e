// ============================================================
// Layer 5 — Training Check
// ============================================================
// A handful of SGD steps on random data. The goal is not a
// good model, only that forward, loss, backward and the
// optimizer update all execute on this install.
//
// Burn builds a fresh gradient set on every backward() call,
// so there is nothing to zero between steps.
//
// Reference: Burn Book §5 (Training)

use anyhow::{ensure, Result};
use burn::{
    optim::{GradientsParams, Optimizer, SgdConfig},
    prelude::*,
    tensor::{backend::AutodiffBackend, Distribution, ElementConversion},
};

use crate::domain::report::{TrainPlan, TrainReport};
use crate::ml::model::{TinyRegressor, TinyRegressorConfig};

pub fn run_training<B: AutodiffBackend>(
    plan:   &TrainPlan,
    device: &B::Device,
) -> Result<TrainReport> {
    let mut model: TinyRegressor<B> = TinyRegressorConfig::new(
        plan.input_features,
        plan.hidden_features,
        plan.output_features,
    )
    .init(device);
    tracing::debug!(
        "Model ready: {} → {} → {}",
        plan.input_features, plan.hidden_features, plan.output_features
    );

    let inputs = Tensor::<B, 2>::random(
        [plan.samples, plan.input_features],
        Distribution::Normal(0.0, 1.0),
        device,
    );
    let targets = Tensor::<B, 2>::random(
        [plan.samples, plan.output_features],
        Distribution::Normal(0.0, 1.0),
        device,
    );

    // θ = θ - lr * g
    let mut optim = SgdConfig::new().init::<B, TinyRegressor<B>>();
    let mut losses = Vec::with_capacity(plan.steps);

    for step in 1..=plan.steps {
        let loss = model.forward_loss(inputs.clone(), targets.clone());
        let loss_val: f32 = loss.clone().into_scalar().elem::<f32>();

        let grads = loss.backward();
        let grads = GradientsParams::from_grads(grads, &model);
        model = optim.step(plan.learning_rate, model, grads);

        tracing::debug!("Step {}/{} | loss={:.6}", step, plan.steps, loss_val);
        losses.push(loss_val);
    }

    let final_loss = losses.last().copied().unwrap_or(f32::NAN);
    ensure!(final_loss.is_finite(), "training produced a non-finite loss ({final_loss})");

    Ok(TrainReport { steps: losses.len(), losses, final_loss })
}
