use burn::{
    nn::{
        loss::{MseLoss, Reduction},
        Linear, LinearConfig, Relu,
    },
    prelude::*,
};

// #[derive(Config)] supplies Clone, serde and the `new(..)` constructor.
#[derive(Config, Debug)]
pub struct TinyRegressorConfig {
    pub input_features:  usize,
    pub hidden_features: usize,
    pub output_features: usize,
}

impl TinyRegressorConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> TinyRegressor<B> {
        TinyRegressor {
            hidden:     LinearConfig::new(self.input_features, self.hidden_features).init(device),
            activation: Relu::new(),
            output:     LinearConfig::new(self.hidden_features, self.output_features).init(device),
        }
    }
}

/// linear → ReLU → linear
#[derive(Module, Debug)]
pub struct TinyRegressor<B: Backend> {
    pub hidden:     Linear<B>,
    pub activation: Relu,
    pub output:     Linear<B>,
}

impl<B: Backend> TinyRegressor<B> {
    /// inputs: [batch, input_features] → [batch, output_features]
    pub fn forward(&self, inputs: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.hidden.forward(inputs);
        let x = self.activation.forward(x);
        self.output.forward(x)
    }

    /// Mean squared error against `targets`, reduced to a single value.
    pub fn forward_loss(&self, inputs: Tensor<B, 2>, targets: Tensor<B, 2>) -> Tensor<B, 1> {
        let predictions = self.forward(inputs);
        MseLoss::new().forward(predictions, targets, Reduction::Mean)
    }
}
