//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod eval;
pub mod menu;
pub mod report;

use std::io::Write;

use pricer_analytic::analytical::{MarketParameters, Operation};
use tracing::{debug, warn};

use crate::config::CliConfig;
use crate::Result;

/// Render `value` with `digits` significant digits.
///
/// Follows the `%g` convention: fixed notation unless the decimal exponent
/// is below -4 or at least `digits`, trailing zeros removed, exponents with
/// a sign and at least two digits.
pub(crate) fn format_value(value: f64, digits: usize) -> String {
    if !value.is_finite() || value == 0.0 {
        return value.to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Applies `--strict` validation when configured.
fn check_inputs(params: &MarketParameters<f64>, config: &CliConfig) -> Result<()> {
    if config.strict_inputs {
        params.validate()?;
        debug!("strict validation passed");
    }
    Ok(())
}

/// Evaluates `operation` once and prints `"<label> is: <value>"`.
pub(crate) fn evaluate_and_print<W: Write>(
    operation: Operation,
    params: &MarketParameters<f64>,
    config: &CliConfig,
    out: &mut W,
) -> Result<f64> {
    check_inputs(params, config)?;
    debug!(?params, %operation, "evaluating");

    let value = operation.evaluate(params);
    if !value.is_finite() {
        warn!(%operation, value, "result is not finite; check volatility, expiry, spot and strike");
    }

    writeln!(
        out,
        "{} is: {}",
        operation.label(),
        format_value(value, config.precision)
    )?;
    Ok(value)
}
