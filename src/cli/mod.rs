// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses flags with clap, builds the config, wires the real
// Burn toolkit and the console together, and turns the
// checklist outcome into the process exit code.
//
//   0 → every mandatory check passed
//   1 → a mandatory check failed (or the config was invalid)

pub mod commands;
pub mod console;

use anyhow::Result;
use clap::Parser;
use std::{
    io::{self, Write},
    process::ExitCode,
};

use crate::application::{
    checklist::{Checklist, Outcome},
    config::CheckConfig,
};
use crate::ml::toolkit::BurnLoader;
use commands::CheckArgs;
use console::Console;

#[derive(Parser, Debug)]
#[command(
    name = "burn-doctor",
    version,
    about = "Check that Burn is installed and working: tensors, autodiff, GPU, training, data loading."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: CheckArgs,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        let config = CheckConfig::try_from(self.args)?;
        config.validate()?;

        let seed = config.resolve_seed();
        tracing::info!("Using seed {} (pass --seed {} to reproduce)", seed, seed);

        let loader = BurnLoader::new(seed);
        let mut console = Console::new(io::stdout().lock());
        let outcome = Checklist::new(&config, &mut console).run(&loader);
        console.into_inner().flush()?;

        match outcome {
            Outcome::Passed { accelerator } => {
                tracing::info!("All mandatory checks passed (GPU usable: {})", accelerator)
            }
            Outcome::Aborted(stage) => tracing::info!("Stopped at {:?}", stage),
        }

        Ok(ExitCode::from(outcome.exit_code()))
    }
}
