//! Single-quantity selector for menu-driven front-ends.
//!
//! An [`Operation`] names exactly one of the five core quantities and
//! evaluates it once against a [`MarketParameters`] record.

use num_traits::Float;

use super::black_scholes::MarketParameters;

/// One of the five closed-form quantities a caller can request.
///
/// Menu numbering is 1-based and follows declaration order.
///
/// # Examples
/// ```
/// use pricer_analytic::analytical::{MarketParameters, Operation};
///
/// let params = MarketParameters::new(1, 100.0_f64, 100.0, 0.2, 1.0, 0.05, 0.0);
/// let op = Operation::from_menu_choice(2).unwrap();
///
/// assert_eq!(op, Operation::PutPrice);
/// assert_eq!(op.evaluate(&params), params.put_price());
/// assert!(Operation::from_menu_choice(6).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// European call price
    CallPrice,
    /// European put price
    PutPrice,
    /// Call Delta
    Delta,
    /// Gamma
    Gamma,
    /// Vega
    Vega,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 5] = [
        Operation::CallPrice,
        Operation::PutPrice,
        Operation::Delta,
        Operation::Gamma,
        Operation::Vega,
    ];

    /// Maps a 1-based menu selection to an operation.
    ///
    /// Returns `None` for anything outside `[1, 5]`.
    pub fn from_menu_choice(choice: i64) -> Option<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The 1-based menu number of this operation.
    pub fn menu_choice(&self) -> i64 {
        match self {
            Operation::CallPrice => 1,
            Operation::PutPrice => 2,
            Operation::Delta => 3,
            Operation::Gamma => 4,
            Operation::Vega => 5,
        }
    }

    /// Menu entry text.
    pub fn menu_text(&self) -> &'static str {
        match self {
            Operation::CallPrice => "Evaluate call option price.",
            Operation::PutPrice => "Evaluate put option price.",
            Operation::Delta => "Evaluate Delta Greek.",
            Operation::Gamma => "Evaluate Gamma Greek.",
            Operation::Vega => "Evaluate Vega Greek.",
        }
    }

    /// Label printed in front of the result.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::CallPrice => "Call option price",
            Operation::PutPrice => "Put option price",
            Operation::Delta => "Delta Greek value",
            Operation::Gamma => "Gamma Greek value",
            Operation::Vega => "Vega Greek value",
        }
    }

    /// Evaluates the selected quantity.
    #[inline]
    pub fn evaluate<T: Float>(&self, params: &MarketParameters<T>) -> T {
        match self {
            Operation::CallPrice => params.call_price(),
            Operation::PutPrice => params.put_price(),
            Operation::Delta => params.delta(),
            Operation::Gamma => params.gamma(),
            Operation::Vega => params.vega(),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_menu_choice(op.menu_choice()), Some(op));
        }
    }

    #[test]
    fn test_out_of_range_choices_rejected() {
        for choice in [0, -1, 6, 42, i64::MIN, i64::MAX] {
            assert!(
                Operation::from_menu_choice(choice).is_none(),
                "choice {} should be rejected",
                choice
            );
        }
    }

    #[test]
    fn test_menu_order() {
        assert_eq!(Operation::from_menu_choice(1), Some(Operation::CallPrice));
        assert_eq!(Operation::from_menu_choice(3), Some(Operation::Delta));
        assert_eq!(Operation::from_menu_choice(5), Some(Operation::Vega));
    }

    #[test]
    fn test_evaluate_dispatches_to_single_formula() {
        let p = MarketParameters::new(3, 95.0_f64, 100.0, 0.3, 0.5, 0.04, 0.01);
        assert_eq!(Operation::CallPrice.evaluate(&p), p.call_price());
        assert_eq!(Operation::PutPrice.evaluate(&p), p.put_price());
        assert_eq!(Operation::Delta.evaluate(&p), p.delta());
        assert_eq!(Operation::Gamma.evaluate(&p), p.gamma());
        assert_eq!(Operation::Vega.evaluate(&p), p.vega());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::CallPrice.label(), "Call option price");
        assert_eq!(format!("{}", Operation::Vega), "Vega Greek value");
        assert_eq!(Operation::Gamma.menu_text(), "Evaluate Gamma Greek.");
    }
}
