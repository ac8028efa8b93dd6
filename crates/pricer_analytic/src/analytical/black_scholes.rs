//! Black-Scholes pricing with a continuous dividend yield.
//!
//! This module provides the inputs record for one evaluation and the
//! closed-form prices and Greeks of European calls and puts.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = N·(S·e^(-qT)·Φ(d₊) - K·e^(-rT)·Φ(d₋))
//! **Put Price**: P = N·(K·e^(-rT)·Φ(-d₋) - S·e^(-qT)·Φ(-d₊))
//!
//! Where:
//! - d₊ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₋ = d₊ - σ√T
//! - N is the notional (number of units)
//!
//! No limiting cases are special-cased: σ = 0 or T = 0 divide by zero and
//! S ≤ 0 or K ≤ 0 take the log of a non-positive number. The resulting
//! NaN/∞ flows through to the returned value.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Market inputs for a single Black-Scholes evaluation.
///
/// All rates are fractions (0.05 for 5%), never percentages. The record is
/// immutable once constructed and is not validated unless
/// [`validate`](Self::validate) is called.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_analytic::analytical::MarketParameters;
///
/// let params = MarketParameters::new(1, 100.0_f64, 100.0, 0.2, 1.0, 0.05, 0.0);
/// assert!((params.call_price() - 10.4506).abs() < 1e-3);
/// assert!((params.put_price() - 5.5735).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters<T: Float> {
    /// Number of units (contract multiplier)
    notional: i64,
    /// Spot price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Annualised volatility (σ)
    volatility: T,
    /// Time to expiry in years (T)
    time_to_expiry: T,
    /// Continuously-compounded risk-free rate (r)
    risk_free_rate: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
}

impl<T: Float> MarketParameters<T> {
    /// Creates a new parameter record without validation.
    ///
    /// # Arguments
    /// * `notional` - Number of units
    /// * `spot` - Current underlying price
    /// * `strike` - Exercise price
    /// * `volatility` - Annualised volatility as a fraction
    /// * `time_to_expiry` - Time to maturity in years
    /// * `risk_free_rate` - Continuously-compounded rate as a fraction (may be negative)
    /// * `dividend_yield` - Continuous dividend yield as a fraction
    pub fn new(
        notional: i64,
        spot: T,
        strike: T,
        volatility: T,
        time_to_expiry: T,
        risk_free_rate: T,
        dividend_yield: T,
    ) -> Self {
        Self {
            notional,
            spot,
            strike,
            volatility,
            time_to_expiry,
            risk_free_rate,
            dividend_yield,
        }
    }

    /// Returns the notional.
    #[inline]
    pub fn notional(&self) -> i64 {
        self.notional
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn time_to_expiry(&self) -> T {
        self.time_to_expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> T {
        self.risk_free_rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Checks that the inputs lie inside the formulas' domain.
    ///
    /// The pricing methods never call this. Rates and dividend yields are
    /// not sign-checked: negative rates are allowed and negative dividend
    /// yields are passed through unchanged.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any field is NaN or infinite
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    /// - `AnalyticalError::InvalidExpiry` if time_to_expiry <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_analytic::analytical::MarketParameters;
    ///
    /// let ok = MarketParameters::new(1, 100.0_f64, 100.0, 0.2, 1.0, -0.01, 0.0);
    /// assert!(ok.validate().is_ok());
    ///
    /// let flat = MarketParameters::new(1, 100.0_f64, 100.0, 0.0, 1.0, 0.05, 0.0);
    /// assert!(flat.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("volatility", self.volatility),
            ("time_to_expiry", self.time_to_expiry),
            ("risk_free_rate", self.risk_free_rate),
            ("dividend_yield", self.dividend_yield),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(AnalyticalError::NonFiniteInput { field });
            }
        }

        let zero = T::zero();
        let as_f64 = |value: T| value.to_f64().unwrap_or(0.0);

        if self.spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: as_f64(self.spot),
            });
        }
        if self.strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: as_f64(self.strike),
            });
        }
        if self.volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: as_f64(self.volatility),
            });
        }
        if self.time_to_expiry <= zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: as_f64(self.time_to_expiry),
            });
        }

        Ok(())
    }

    /// Computes the d₊ term.
    ///
    /// d₊ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d_plus(&self) -> T {
        let half = T::from(0.5).unwrap();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.risk_free_rate - self.dividend_yield
            + half * self.volatility * self.volatility)
            * self.time_to_expiry;

        (log_moneyness + drift) / self.vol_sqrt_t()
    }

    /// Computes the d₋ term.
    ///
    /// d₋ = d₊ - σ√T
    #[inline]
    pub fn d_minus(&self) -> T {
        self.d_plus() - self.vol_sqrt_t()
    }

    /// Returns `(d₊, d₋)` from a single evaluation of d₊.
    #[inline]
    pub fn moneyness(&self) -> (T, T) {
        let d_plus = self.d_plus();
        (d_plus, d_plus - self.vol_sqrt_t())
    }

    #[inline]
    fn vol_sqrt_t(&self) -> T {
        self.volatility * self.time_to_expiry.sqrt()
    }

    /// Notional as `T`; NaN if the integer cannot be represented.
    #[inline]
    fn scale(&self) -> T {
        T::from(self.notional).unwrap_or_else(T::nan)
    }

    /// e^(-qT)
    #[inline]
    fn dividend_discount(&self) -> T {
        (-self.dividend_yield * self.time_to_expiry).exp()
    }

    /// e^(-rT)
    #[inline]
    fn discount(&self) -> T {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }

    /// Computes the European call price.
    ///
    /// C = N·(S·e^(-qT)·Φ(d₊) - K·e^(-rT)·Φ(d₋))
    ///
    /// The result is not clamped and may be negative or NaN for
    /// pathological inputs.
    #[inline]
    pub fn call_price(&self) -> T {
        let (d_plus, d_minus) = self.moneyness();

        self.scale()
            * (self.spot * self.dividend_discount() * norm_cdf(d_plus)
                - self.strike * self.discount() * norm_cdf(d_minus))
    }

    /// Computes the European put price.
    ///
    /// P = N·(-S·e^(-qT)·Φ(-d₊) + K·e^(-rT)·Φ(-d₋))
    #[inline]
    pub fn put_price(&self) -> T {
        let (d_plus, d_minus) = self.moneyness();

        self.scale()
            * (-self.spot * self.dividend_discount() * norm_cdf(-d_plus)
                + self.strike * self.discount() * norm_cdf(-d_minus))
    }

    /// Computes the call Delta (∂C/∂S).
    ///
    /// Delta = N·e^(-qT)·Φ(d₊)
    #[inline]
    pub fn delta(&self) -> T {
        self.scale() * self.dividend_discount() * norm_cdf(self.d_plus())
    }

    /// Computes the put Delta (∂P/∂S).
    ///
    /// Put Delta = -N·e^(-qT)·Φ(-d₊)
    #[inline]
    pub fn put_delta(&self) -> T {
        -self.scale() * self.dividend_discount() * norm_cdf(-self.d_plus())
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = N·e^(-qT)·φ(d₊) / (σ·S·√T)
    ///
    /// Gamma is the same for both calls and puts.
    #[inline]
    pub fn gamma(&self) -> T {
        self.scale() * self.dividend_discount() * norm_pdf(self.d_plus())
            / (self.volatility * self.spot * self.time_to_expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ) per unit of volatility.
    ///
    /// Vega = N·e^(-qT)·S·φ(d₊)·√T
    ///
    /// Vega is the same for both calls and puts.
    #[inline]
    pub fn vega(&self) -> T {
        self.scale()
            * self.dividend_discount()
            * self.spot
            * norm_pdf(self.d_plus())
            * self.time_to_expiry.sqrt()
    }

    /// Computes Theta (∂V/∂t) per year.
    ///
    /// - Call Theta = N·(-S·e^(-qT)·φ(d₊)·σ/(2√T) - r·K·e^(-rT)·Φ(d₋) + q·S·e^(-qT)·Φ(d₊))
    /// - Put Theta = N·(-S·e^(-qT)·φ(d₊)·σ/(2√T) + r·K·e^(-rT)·Φ(-d₋) - q·S·e^(-qT)·Φ(-d₊))
    #[inline]
    pub fn theta(&self, option_type: OptionType) -> T {
        let (d_plus, d_minus) = self.moneyness();
        let two = T::from(2.0).unwrap();
        let carried_spot = self.spot * self.dividend_discount();
        let discounted_strike = self.strike * self.discount();

        let decay = -carried_spot * norm_pdf(d_plus) * self.volatility
            / (two * self.time_to_expiry.sqrt());

        let theta = match option_type {
            OptionType::Call => {
                decay - self.risk_free_rate * discounted_strike * norm_cdf(d_minus)
                    + self.dividend_yield * carried_spot * norm_cdf(d_plus)
            }
            OptionType::Put => {
                decay + self.risk_free_rate * discounted_strike * norm_cdf(-d_minus)
                    - self.dividend_yield * carried_spot * norm_cdf(-d_plus)
            }
        };

        self.scale() * theta
    }

    /// Computes Rho (∂V/∂r) per unit of rate.
    ///
    /// - Call Rho = N·K·T·e^(-rT)·Φ(d₋)
    /// - Put Rho = -N·K·T·e^(-rT)·Φ(-d₋)
    #[inline]
    pub fn rho(&self, option_type: OptionType) -> T {
        let d_minus = self.d_minus();
        let weight = self.scale() * self.strike * self.time_to_expiry * self.discount();

        match option_type {
            OptionType::Call => weight * norm_cdf(d_minus),
            OptionType::Put => -weight * norm_cdf(-d_minus),
        }
    }
}

/// Option type for the type-dependent Greeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// European call
    Call,
    /// European put
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Price and full Greek set for one option type.
///
/// # Examples
/// ```
/// use pricer_analytic::analytical::{Greeks, MarketParameters, OptionType};
///
/// let params = MarketParameters::new(1, 100.0_f64, 100.0, 0.2, 1.0, 0.05, 0.0);
/// let call = Greeks::compute(&params, OptionType::Call);
/// let put = Greeks::compute(&params, OptionType::Put);
///
/// assert_eq!(call.gamma, put.gamma);
/// assert!(call.delta > 0.0 && put.delta < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Option type these values belong to
    pub option_type: OptionType,
    /// Present value
    pub price: T,
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t
    pub theta: T,
    /// ∂V/∂r
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// Evaluates the price and every Greek for `option_type`.
    pub fn compute(params: &MarketParameters<T>, option_type: OptionType) -> Self {
        let (price, delta) = match option_type {
            OptionType::Call => (params.call_price(), params.delta()),
            OptionType::Put => (params.put_price(), params.put_delta()),
        };

        Self {
            option_type,
            price,
            delta,
            gamma: params.gamma(),
            vega: params.vega(),
            theta: params.theta(option_type),
            rho: params.rho(option_type),
        }
    }

    /// Shorthand for `Greeks::compute(params, OptionType::Call)`.
    pub fn call(params: &MarketParameters<T>) -> Self {
        Self::compute(params, OptionType::Call)
    }

    /// Shorthand for `Greeks::compute(params, OptionType::Put)`.
    pub fn put(params: &MarketParameters<T>) -> Self {
        Self::compute(params, OptionType::Put)
    }
}
