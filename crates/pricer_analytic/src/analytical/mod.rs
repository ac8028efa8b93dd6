//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under Black-Scholes dynamics
//! with a continuous dividend yield:
//! - Standard normal density and cumulative distribution
//! - Call and put prices
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - The five-way [`Operation`] selector used by interactive front-ends
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Silent propagation**: Division by zero and `ln` of non-positive
//!   values surface as NaN/∞ rather than as errors

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod operation;

// Re-export main types at module level
pub use black_scholes::{Greeks, MarketParameters, OptionType};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use operation::Operation;
