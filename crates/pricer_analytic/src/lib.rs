//! # Pricer Analytic (L2: Closed-Form Kernel)
//!
//! Closed-form Black-Scholes pricing with a continuous dividend yield.
//!
//! This crate provides:
//! - Standard normal density and a polynomial approximation of its CDF
//! - `MarketParameters`: the immutable set of inputs for one evaluation
//! - Call/put prices and Delta, Gamma, Vega (plus Theta, Rho, put Delta)
//! - `Operation`: a selector that evaluates exactly one of the core quantities
//!
//! ## Design Principles
//!
//! - **Pure functions**: no state is shared between evaluations
//! - **No hidden hardening**: degenerate inputs propagate as NaN/∞
//! - **Opt-in validation** via [`analytical::MarketParameters::validate`]
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_analytic::analytical::MarketParameters;
//!
//! let params = MarketParameters::new(1, 100.0_f64, 100.0, 0.2, 1.0, 0.05, 0.0);
//! let call = params.call_price();
//! let put = params.put_price();
//!
//! // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
//! let forward_gap = 100.0 - 100.0 * (-0.05_f64).exp();
//! assert!((call - put - forward_gap).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
