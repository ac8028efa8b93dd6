//! User-facing inputs and their conversion to model units.
//!
//! Volatility, interest rate and dividend yield are entered as percentages
//! and divided by 100 here; the analytical layer only sees fractions.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use clap::Args;
use pricer_analytic::analytical::MarketParameters;
use tracing::debug;

use crate::{CliError, Result};

/// Market inputs as typed by the user, percentages not yet converted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentInputs {
    pub notional: i64,
    pub spot: f64,
    pub strike: f64,
    pub volatility_pct: f64,
    pub expiry_years: f64,
    pub rate_pct: f64,
    pub dividend_pct: f64,
}

impl PercentInputs {
    /// Convert percentages to fractions and build the parameter record.
    pub fn into_market_parameters(self) -> MarketParameters<f64> {
        MarketParameters::new(
            self.notional,
            self.spot,
            self.strike,
            self.volatility_pct / 100.0,
            self.expiry_years,
            self.rate_pct / 100.0,
            self.dividend_pct / 100.0,
        )
    }
}

/// Market arguments shared by the non-interactive subcommands
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    /// Number of units (contract multiplier)
    #[arg(long, allow_negative_numbers = true)]
    pub notional: i64,

    /// Underlying price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Annualised volatility in percent (20 for 20%)
    #[arg(long)]
    pub volatility: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Risk-free rate in percent
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Dividend yield in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dividend: f64,
}

impl From<MarketArgs> for PercentInputs {
    fn from(args: MarketArgs) -> Self {
        PercentInputs {
            notional: args.notional,
            spot: args.spot,
            strike: args.strike,
            volatility_pct: args.volatility,
            expiry_years: args.expiry,
            rate_pct: args.rate,
            dividend_pct: args.dividend,
        }
    }
}

/// Whitespace-token reader that writes a prompt before each value.
///
/// Several values may be typed on one line; leftover tokens answer the
/// following prompts.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    /// Output sink, for printing menus and results.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Next whitespace-separated token, or `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so such a token
    /// simply fails to parse.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Print `prompt` and parse the next token as `field`.
    pub fn ask<F: FromStr>(&mut self, field: &'static str, prompt: &str) -> Result<F> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let token = self
            .next_token()?
            .ok_or(CliError::UnexpectedEof { field })?;
        debug!(field, value = %token, "read input");

        token
            .parse()
            .map_err(|_| CliError::InvalidInput { field, value: token })
    }

    /// Prompt for all seven market inputs in menu-session order.
    pub fn read_market_inputs(&mut self) -> Result<PercentInputs> {
        let notional = self.ask("number of stocks", "Please enter a number of stocks: ")?;
        let spot = self.ask("stock price", "Please enter a stock price: ")?;
        let volatility_pct = self.ask(
            "stock volatility",
            "Please enter stock volatility (in percents): ",
        )?;
        let strike = self.ask("strike price", "Please enter a strike price: ")?;
        let expiry_years = self.ask("time to maturity", "Please enter time to maturity: ")?;
        let rate_pct = self.ask(
            "interest rate",
            "Please enter an interest rate (in percents): ",
        )?;
        let dividend_pct = self.ask(
            "dividend rate",
            "Please enter a dividend rate (in percents): ",
        )?;

        Ok(PercentInputs {
            notional,
            spot,
            strike,
            volatility_pct,
            expiry_years,
            rate_pct,
            dividend_pct,
        })
    }
}
