//! Error types for analytical pricing inputs.
//!
//! This module provides:
//! - `AnalyticalError`: Rejections raised by opt-in input validation
//!
//! The pricing functions themselves never return these errors; degenerate
//! inputs propagate as NaN/∞ through the formulas.

use thiserror::Error;

/// Analytical input validation errors.
///
/// Returned by [`MarketParameters::validate`](super::MarketParameters::validate)
/// when a caller chooses to reject inputs the closed-form formulas cannot
/// evaluate meaningfully.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidVolatility`: Non-positive volatility
/// - `InvalidExpiry`: Non-positive time to expiry
/// - `NonFiniteInput`: NaN or infinite value in any field
///
/// # Examples
/// ```
/// use pricer_analytic::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid time to expiry (non-positive).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value in years
        expiry: f64,
    },

    /// A field holds NaN or an infinite value.
    #[error("Non-finite input: {field}")]
    NonFiniteInput {
        /// Name of the offending field
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike price: K = 0");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: 0.0 };
        assert_eq!(format!("{}", err), "Invalid time to expiry: T = 0");
    }

    #[test]
    fn test_non_finite_display() {
        let err = AnalyticalError::NonFiniteInput {
            field: "risk_free_rate",
        };
        assert_eq!(format!("{}", err), "Non-finite input: risk_free_rate");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidExpiry { expiry: -1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
