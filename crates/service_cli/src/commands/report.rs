//! Report command implementation
//!
//! Prints call and put prices together with the full Greek set.

use std::io::Write;

use clap::ValueEnum;
use pricer_analytic::analytical::{Greeks, MarketParameters};
use serde::Serialize;
use tracing::info;

use super::format_value;
use crate::config::CliConfig;
use crate::input::PercentInputs;
use crate::Result;

/// Output format for `report`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Call and put figures for one parameter set
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub parameters: MarketParameters<f64>,
    pub call: Greeks<f64>,
    pub put: Greeks<f64>,
}

impl Report {
    pub fn new(parameters: MarketParameters<f64>) -> Self {
        Self {
            call: Greeks::call(&parameters),
            put: Greeks::put(&parameters),
            parameters,
        }
    }
}

/// Run the report command
pub fn run<W: Write>(
    inputs: PercentInputs,
    format: ReportFormat,
    config: &CliConfig,
    out: &mut W,
) -> Result<Report> {
    let params = inputs.into_market_parameters();
    super::check_inputs(&params, config)?;

    info!("Building report ({:?})", format);
    let report = Report::new(params);

    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        ReportFormat::Table => write_table(&report, config.precision, out)?,
    }

    Ok(report)
}

fn write_table<W: Write>(report: &Report, digits: usize, out: &mut W) -> Result<()> {
    let rows = [
        ("Price", report.call.price, report.put.price),
        ("Delta", report.call.delta, report.put.delta),
        ("Gamma", report.call.gamma, report.put.gamma),
        ("Vega", report.call.vega, report.put.vega),
        ("Theta", report.call.theta, report.put.theta),
        ("Rho", report.call.rho, report.put.rho),
    ];

    writeln!(out, "┌────────┬──────────────────┬──────────────────┐")?;
    writeln!(out, "│ {:<6} │ {:>16} │ {:>16} │", "", "Call", "Put")?;
    writeln!(out, "├────────┼──────────────────┼──────────────────┤")?;
    for (name, call, put) in rows {
        writeln!(
            out,
            "│ {:<6} │ {:>16} │ {:>16} │",
            name,
            format_value(call, digits),
            format_value(put, digits)
        )?;
    }
    writeln!(out, "└────────┴──────────────────┴──────────────────┘")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn atm() -> PercentInputs {
        PercentInputs {
            notional: 1,
            spot: 100.0,
            strike: 100.0,
            volatility_pct: 20.0,
            expiry_years: 1.0,
            rate_pct: 5.0,
            dividend_pct: 0.0,
        }
    }

    #[test]
    fn test_report_values() {
        let mut out = Vec::new();
        let report = run(atm(), ReportFormat::Table, &CliConfig::default(), &mut out).unwrap();

        assert_abs_diff_eq!(report.call.price, 10.4506, epsilon = 1e-3);
        assert_abs_diff_eq!(report.put.price, 5.5735, epsilon = 1e-3);
        assert_eq!(report.call.gamma, report.put.gamma);
    }

    #[test]
    fn test_table_layout() {
        let mut out = Vec::new();
        run(atm(), ReportFormat::Table, &CliConfig::default(), &mut out).unwrap();
        let table = String::from_utf8(out).unwrap();

        assert_eq!(table.lines().count(), 10);
        assert!(table.contains("10.4506"));
        assert!(table.contains("5.57352"));
        assert!(table.contains("0.0187"));
        assert!(table.lines().any(|line| line.starts_with("│ Theta")));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        run(atm(), ReportFormat::Json, &CliConfig::default(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["call"]["option_type"], "call");
        assert_eq!(value["put"]["option_type"], "put");
        assert_eq!(value["parameters"]["notional"], 1);
        assert_abs_diff_eq!(
            value["call"]["price"].as_f64().unwrap(),
            10.4506,
            epsilon = 1e-3
        );
    }
}
