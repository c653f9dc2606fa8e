// ============================================================
// Layer 2 — Checklist Runner
// ============================================================
// Runs the six checks in a fixed order:
//
//   1. Import           (fatal on failure)
//   2. Versions         (informational)
//   3. Tensor ops       (aborts on failure)
//   4. Accelerator      (advisory, never aborts)
//   5. Training         (aborts on failure)
//   6. Data loading     (aborts on failure)
//
// The first mandatory failure ends the run. Nothing here knows
// about Burn: the checks go through the Toolkit trait and the
// output goes through the Reporter trait.

use std::fmt;

use crate::application::config::CheckConfig;
use crate::domain::{
    report::AcceleratorReport,
    traits::{Reporter, Toolkit, ToolkitLoader},
};

/// The mandatory check that ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Import,
    TensorOps,
    Model,
    DataLoading,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Stage::Import      => "Burn is not correctly installed, please reinstall",
            Stage::TensorOps   => "Basic operations test failed",
            Stage::Model       => "Model test failed",
            Stage::DataLoading => "Data loading test failed",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed { accelerator: bool },
    Aborted(Stage),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Passed { .. } => 0,
            Outcome::Aborted(_)    => 1,
        }
    }
}

pub struct Checklist<'a> {
    config:   &'a CheckConfig,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Checklist<'a> {
    pub fn new(config: &'a CheckConfig, reporter: &'a mut dyn Reporter) -> Self {
        Self { config, reporter }
    }

    pub fn run(&mut self, loader: &dyn ToolkitLoader) -> Outcome {
        self.reporter.note("Burn Installation Test Started");

        let Some(toolkit) = self.check_import(loader) else {
            return self.abort(Stage::Import);
        };
        let toolkit = toolkit.as_ref();

        self.report_versions(toolkit);

        if !self.check_tensor_ops(toolkit) {
            return self.abort(Stage::TensorOps);
        }

        let accelerator = self.check_accelerator(toolkit);

        if !self.check_model(toolkit) {
            return self.abort(Stage::Model);
        }

        if !self.check_data_loading(toolkit) {
            return self.abort(Stage::DataLoading);
        }

        self.summarize(accelerator);
        Outcome::Passed { accelerator }
    }

    fn abort(&mut self, stage: Stage) -> Outcome {
        tracing::info!("Run aborted at {:?}", stage);
        self.reporter.fatal(&stage.to_string());
        Outcome::Aborted(stage)
    }

    // ── 1 ────────────────────────────────────────────────────────────────────
    fn check_import(&mut self, loader: &dyn ToolkitLoader) -> Option<Box<dyn Toolkit>> {
        self.reporter.section("1. Testing Burn import...");
        match loader.load() {
            Ok(toolkit) => {
                self.reporter.pass("Burn import successful");
                Some(toolkit)
            }
            Err(e) => {
                self.reporter.fail(&format!("Burn import failed: {e:#}"));
                None
            }
        }
    }

    // ── 2 ────────────────────────────────────────────────────────────────────
    fn report_versions(&mut self, toolkit: &dyn Toolkit) {
        self.reporter.section("2. Burn version information:");
        let info = toolkit.versions();
        self.reporter.detail(&format!("Burn version: {}", info.framework));
        self.reporter.detail(&format!("Rust version: {}", info.runtime));
        match info.vision {
            Some(version) => self.reporter.detail(&format!("Vision (image) version: {version}")),
            None          => self.reporter.detail("Vision (image): Not installed"),
        }
        self.reporter.detail(&format!("ndarray version: {}", info.array));
    }

    // ── 3 ────────────────────────────────────────────────────────────────────
    fn check_tensor_ops(&mut self, toolkit: &dyn Toolkit) -> bool {
        self.reporter.section("3. Testing basic tensor operations...");
        match toolkit.tensor_ops() {
            Ok(r) => {
                self.reporter.pass("Tensor creation and matrix multiplication successful");
                self.reporter.detail(&format!(
                    "x.shape = {:?}, y.shape = {:?}, z.shape = {:?}",
                    r.lhs, r.rhs, r.product
                ));
                self.reporter.pass("Gradient computation successful");
                self.reporter.detail(&format!("x.grad.shape = {:?}", r.grad));
                true
            }
            Err(e) => {
                self.reporter.fail(&format!("Basic operations failed: {e:#}"));
                false
            }
        }
    }

    // ── 4 ────────────────────────────────────────────────────────────────────
    fn check_accelerator(&mut self, toolkit: &dyn Toolkit) -> bool {
        self.reporter.section("4. Testing GPU support...");
        if self.config.skip_accelerator {
            self.reporter.warn("GPU check skipped by configuration");
            return false;
        }

        let report = toolkit.accelerator(self.config.accelerator_matrix);
        let usable = report.is_usable();
        match report {
            AcceleratorReport::Unavailable { reason } => {
                self.reporter.warn(&format!(
                    "GPU not available ({reason}); this is normal without a supported GPU"
                ));
            }
            AcceleratorReport::Available { backend, devices, compute } => {
                self.reporter.pass("GPU available");
                self.reporter.detail(&format!("GPU backend: {backend}"));
                self.reporter.detail(&format!("GPU count: {}", devices.len()));
                for (i, name) in devices.iter().enumerate() {
                    self.reporter.detail(&format!("GPU {i}: {name}"));
                }
                match compute {
                    Ok(()) => self.reporter.pass("GPU computation test successful"),
                    Err(e) => self.reporter.fail(&format!("GPU computation test failed: {e}")),
                }
            }
        }
        usable
    }

    // ── 5 ────────────────────────────────────────────────────────────────────
    fn check_model(&mut self, toolkit: &dyn Toolkit) -> bool {
        self.reporter.section("5. Testing simple neural network...");
        match toolkit.train(&self.config.train_plan()) {
            Ok(r) => {
                tracing::debug!("Losses over {} steps: {:?}", r.steps, r.losses);
                self.reporter.pass("Simple neural network training successful");
                self.reporter.detail(&format!("Final loss: {:.4}", r.final_loss));
                true
            }
            Err(e) => {
                self.reporter.fail(&format!("Neural network test failed: {e:#}"));
                false
            }
        }
    }

    // ── 6 ────────────────────────────────────────────────────────────────────
    fn check_data_loading(&mut self, toolkit: &dyn Toolkit) -> bool {
        self.reporter.section("6. Testing data loading...");
        match toolkit.first_batch(&self.config.loader_plan()) {
            Ok(r) => {
                tracing::debug!("First batch: {} features, {} targets", r.features, r.targets);
                self.reporter.pass("Data loading successful");
                self.reporter.detail(&format!("Batch size: {}", r.batch_size));
                true
            }
            Err(e) => {
                self.reporter.fail(&format!("Data loading test failed: {e:#}"));
                false
            }
        }
    }

    fn summarize(&mut self, accelerator: bool) {
        self.reporter.section("Test Summary:");
        self.reporter.pass("Burn basic functionality working");
        self.reporter.pass("Tensor operations working");
        self.reporter.pass("Neural network functionality working");
        self.reporter.pass("Data loading functionality working");
        if accelerator {
            self.reporter.pass("GPU acceleration available");
        } else {
            self.reporter.warn("GPU acceleration not available (CPU mode)");
        }
        self.reporter.note("");
        self.reporter.note(
            "🎉 Burn installation test completed! All core functions are working properly.",
        );
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use std::{cell::RefCell, rc::Rc};

    use crate::domain::report::{
        BatchReport, LoaderPlan, TensorOpsReport, TrainPlan, TrainReport, VersionInfo,
    };

    type CallLog = Rc<RefCell<Vec<&'static str>>>;

    #[derive(Default, Clone)]
    struct Faults {
        import:     bool,
        tensor_ops: bool,
        no_gpu:     bool,
        gpu_matmul: bool,
        train:      bool,
        data:       bool,
    }

    struct FakeLoader {
        faults: Faults,
        calls:  CallLog,
    }

    struct FakeToolkit {
        faults: Faults,
        calls:  CallLog,
    }

    impl ToolkitLoader for FakeLoader {
        fn load(&self) -> Result<Box<dyn Toolkit>> {
            self.calls.borrow_mut().push("load");
            if self.faults.import {
                bail!("no backend could be initialised");
            }
            Ok(Box::new(FakeToolkit { faults: self.faults.clone(), calls: self.calls.clone() }))
        }
    }

    impl Toolkit for FakeToolkit {
        fn versions(&self) -> VersionInfo {
            self.calls.borrow_mut().push("versions");
            VersionInfo {
                framework: "0.0.0-test".into(),
                vision:    None,
                array:     "0.0.0-test".into(),
                runtime:   "rustc test".into(),
            }
        }

        fn tensor_ops(&self) -> Result<TensorOpsReport> {
            self.calls.borrow_mut().push("tensor_ops");
            if self.faults.tensor_ops {
                bail!("matmul exploded");
            }
            Ok(TensorOpsReport {
                lhs:     vec![3, 4],
                rhs:     vec![4, 5],
                product: vec![3, 5],
                grad:    vec![3, 4],
            })
        }

        fn accelerator(&self, _matrix_size: usize) -> AcceleratorReport {
            self.calls.borrow_mut().push("accelerator");
            if self.faults.no_gpu {
                return AcceleratorReport::Unavailable { reason: "no GPU-class adapter found".into() };
            }
            AcceleratorReport::Available {
                backend: "Vulkan".into(),
                devices: vec!["Fake GPU".into()],
                compute: if self.faults.gpu_matmul { Err("device lost".into()) } else { Ok(()) },
            }
        }

        fn train(&self, plan: &TrainPlan) -> Result<TrainReport> {
            self.calls.borrow_mut().push("train");
            if self.faults.train {
                bail!("loss went NaN");
            }
            let losses = vec![1.0; plan.steps];
            Ok(TrainReport { steps: plan.steps, losses, final_loss: 0.25 })
        }

        fn first_batch(&self, plan: &LoaderPlan) -> Result<BatchReport> {
            self.calls.borrow_mut().push("first_batch");
            if self.faults.data {
                bail!("dataset empty");
            }
            Ok(BatchReport {
                batch_size: plan.batch_size.min(plan.samples),
                features:   plan.input_features,
                targets:    plan.output_features,
            })
        }
    }

    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl Recorder {
        fn contains(&self, needle: &str) -> bool {
            self.lines.iter().any(|l| l.contains(needle))
        }
    }

    impl Reporter for Recorder {
        fn section(&mut self, title: &str) { self.lines.push(format!("## {title}")); }
        fn pass(&mut self, message: &str)   { self.lines.push(format!("✓ {message}")); }
        fn warn(&mut self, message: &str)   { self.lines.push(format!("⚠ {message}")); }
        fn fail(&mut self, message: &str)   { self.lines.push(format!("✗ {message}")); }
        fn detail(&mut self, message: &str) { self.lines.push(format!("   {message}")); }
        fn fatal(&mut self, message: &str)  { self.lines.push(format!("❌ {message}")); }
        fn note(&mut self, message: &str)   { self.lines.push(message.to_string()); }
    }

    fn run_with(faults: Faults, config: &CheckConfig) -> (Outcome, Vec<&'static str>, Recorder) {
        let calls: CallLog = Rc::default();
        let loader = FakeLoader { faults, calls: calls.clone() };
        let mut recorder = Recorder::default();
        let outcome = Checklist::new(config, &mut recorder).run(&loader);
        let calls = calls.borrow().clone();
        (outcome, calls, recorder)
    }

    #[test]
    fn test_healthy_install_passes() {
        let (outcome, calls, out) = run_with(Faults::default(), &CheckConfig::default());

        assert_eq!(outcome, Outcome::Passed { accelerator: true });
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            calls,
            vec!["load", "versions", "tensor_ops", "accelerator", "train", "first_batch"]
        );
        assert!(out.contains("✓ Burn basic functionality working"));
        assert!(out.contains("✓ Tensor operations working"));
        assert!(out.contains("✓ Neural network functionality working"));
        assert!(out.contains("✓ Data loading functionality working"));
        assert!(out.contains("✓ GPU acceleration available"));
        assert!(out.contains("Final loss: 0.2500"));
        assert!(out.contains("Batch size: 32"));
    }

    #[test]
    fn test_import_failure_stops_everything() {
        let faults = Faults { import: true, ..Faults::default() };
        let (outcome, calls, out) = run_with(faults, &CheckConfig::default());

        assert_eq!(outcome, Outcome::Aborted(Stage::Import));
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(calls, vec!["load"]);
        assert!(out.contains("✗ Burn import failed: no backend could be initialised"));
        assert!(out.contains("❌ Burn is not correctly installed"));
        assert!(!out.contains("2. Burn version information:"));
    }

    #[test]
    fn test_tensor_ops_failure_skips_later_checks() {
        let faults = Faults { tensor_ops: true, ..Faults::default() };
        let (outcome, calls, out) = run_with(faults, &CheckConfig::default());

        assert_eq!(outcome, Outcome::Aborted(Stage::TensorOps));
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(calls, vec!["load", "versions", "tensor_ops"]);
        assert!(out.contains("✗ Basic operations failed: matmul exploded"));
        assert!(out.contains("❌ Basic operations test failed"));
    }

    #[test]
    fn test_missing_gpu_is_only_a_warning() {
        let faults = Faults { no_gpu: true, ..Faults::default() };
        let (outcome, calls, out) = run_with(faults, &CheckConfig::default());

        assert_eq!(outcome, Outcome::Passed { accelerator: false });
        assert_eq!(outcome.exit_code(), 0);
        assert!(calls.contains(&"train"));
        assert!(calls.contains(&"first_batch"));
        assert!(out.contains("⚠ GPU not available"));
        assert!(out.contains("⚠ GPU acceleration not available (CPU mode)"));
    }

    #[test]
    fn test_failed_gpu_matmul_does_not_abort() {
        let faults = Faults { gpu_matmul: true, ..Faults::default() };
        let (outcome, _, out) = run_with(faults, &CheckConfig::default());

        assert_eq!(outcome, Outcome::Passed { accelerator: false });
        assert!(out.contains("✗ GPU computation test failed: device lost"));
        assert!(out.contains("GPU 0: Fake GPU"));
    }

    #[test]
    fn test_skip_accelerator_never_queries_gpu() {
        let config = CheckConfig { skip_accelerator: true, ..CheckConfig::default() };
        let (outcome, calls, out) = run_with(Faults::default(), &config);

        assert_eq!(outcome, Outcome::Passed { accelerator: false });
        assert!(!calls.contains(&"accelerator"));
        assert!(out.contains("⚠ GPU check skipped by configuration"));
    }

    #[test]
    fn test_model_failure_skips_data_loading() {
        let faults = Faults { train: true, ..Faults::default() };
        let (outcome, calls, out) = run_with(faults, &CheckConfig::default());

        assert_eq!(outcome, Outcome::Aborted(Stage::Model));
        assert!(!calls.contains(&"first_batch"));
        assert!(out.contains("❌ Model test failed"));
    }

    #[test]
    fn test_data_failure_aborts_before_summary() {
        let faults = Faults { data: true, ..Faults::default() };
        let (outcome, _, out) = run_with(faults, &CheckConfig::default());

        assert_eq!(outcome, Outcome::Aborted(Stage::DataLoading));
        assert_eq!(outcome.exit_code(), 1);
        assert!(out.contains("✗ Data loading test failed: dataset empty"));
        assert!(!out.contains("## Test Summary:"));
    }

    #[test]
    fn test_missing_vision_reported_as_not_installed() {
        let (_, _, out) = run_with(Faults::default(), &CheckConfig::default());
        assert!(out.contains("Vision (image): Not installed"));
    }
}
