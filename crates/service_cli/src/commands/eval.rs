//! Eval command implementation
//!
//! Evaluates a single quantity from command-line arguments.

use std::io::Write;

use clap::ValueEnum;
use pricer_analytic::analytical::Operation;
use tracing::info;

use crate::config::CliConfig;
use crate::input::PercentInputs;
use crate::Result;

/// Quantity selectable with `--operation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    Call,
    Put,
    Delta,
    Gamma,
    Vega,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Call => Operation::CallPrice,
            OperationArg::Put => Operation::PutPrice,
            OperationArg::Delta => Operation::Delta,
            OperationArg::Gamma => Operation::Gamma,
            OperationArg::Vega => Operation::Vega,
        }
    }
}

/// Run the eval command
pub fn run<W: Write>(
    operation: OperationArg,
    inputs: PercentInputs,
    config: &CliConfig,
    out: &mut W,
) -> Result<f64> {
    let operation = Operation::from(operation);
    info!("Evaluating {}", operation);

    super::evaluate_and_print(operation, &inputs.into_market_parameters(), config, out)
}
