//! Interactive menu session
//!
//! One selection, one set of inputs, one printed result.

use std::io::{BufRead, Write};

use pricer_analytic::analytical::Operation;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::input::Prompter;
use crate::Result;

/// Message printed for a selection outside the menu.
pub const WRONG_OPTION: &str = "You have entered a wrong option";

/// Print the menu and read a selection.
///
/// Returns `None` for anything that is not an integer in `[1, 5]`,
/// including end of input.
pub fn choose_operation<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Option<Operation>> {
    let out = prompter.writer();
    writeln!(out, "Please choose one of the following options:")?;
    for op in Operation::ALL {
        writeln!(out, "{}. {}", op.menu_choice(), op.menu_text())?;
    }
    out.flush()?;

    let choice = prompter
        .next_token()?
        .and_then(|token| token.parse::<i64>().ok())
        .and_then(Operation::from_menu_choice);

    if choice.is_none() {
        writeln!(prompter.writer(), "{}", WRONG_OPTION)?;
    }
    Ok(choice)
}

/// Run the interactive session
///
/// Returns the evaluated value, or `None` when the selection was rejected
/// and nothing was computed.
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CliConfig,
) -> Result<Option<f64>> {
    let Some(operation) = choose_operation(prompter)? else {
        warn!("Menu selection rejected; nothing evaluated");
        return Ok(None);
    };
    info!("Selected {}", operation);

    let params = prompter.read_market_inputs()?.into_market_parameters();
    let value = super::evaluate_and_print(operation, &params, config, prompter.writer())?;
    Ok(Some(value))
}
