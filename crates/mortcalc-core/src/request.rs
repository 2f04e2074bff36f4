//! Validated calculation request.

use std::fmt;

use serde::Serialize;

/// How a one-time prepayment is applied by the calculation service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepaymentStrategy {
    /// Keep the payment, shorten the loan.
    #[default]
    ReduceTerm,
    /// Keep the term, lower the payment.
    ReducePayment,
}

impl PrepaymentStrategy {
    /// Both strategies, in display order.
    pub const ALL: [PrepaymentStrategy; 2] = [Self::ReduceTerm, Self::ReducePayment];

    /// Wire name of the strategy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReduceTerm => "reduce_term",
            Self::ReducePayment => "reduce_payment",
        }
    }

    /// Parse a raw form value. Blank or unrecognized input falls back to
    /// [`PrepaymentStrategy::ReduceTerm`].
    #[must_use]
    pub fn from_form_value(raw: &str) -> Self {
        match raw.trim() {
            "reduce_payment" => Self::ReducePayment,
            "" | "reduce_term" => Self::ReduceTerm,
            other => {
                tracing::debug!(value = other, "unknown prepayment strategy, using reduce_term");
                Self::ReduceTerm
            }
        }
    }

    /// The other strategy.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::ReduceTerm => Self::ReducePayment,
            Self::ReducePayment => Self::ReduceTerm,
        }
    }
}

impl fmt::Display for PrepaymentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated request for the calculation service.
///
/// Only [`crate::validation::validate`] constructs this type, so every
/// instance satisfies all input constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRequest {
    pub(crate) loan_amount: f64,
    pub(crate) down_payment: f64,
    pub(crate) years: u32,
    pub(crate) interest_rate: f64,
    pub(crate) is_installment: bool,
    pub(crate) prepayment_amount: f64,
    pub(crate) prepayment_month: Option<u32>,
    pub(crate) prepayment_strategy: PrepaymentStrategy,
}

impl CalculationRequest {
    /// Property price.
    #[must_use]
    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    /// Down payment, strictly below the loan amount.
    #[must_use]
    pub fn down_payment(&self) -> f64 {
        self.down_payment
    }

    /// Loan term in years.
    #[must_use]
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Annual interest rate in percent; zero in installment mode.
    #[must_use]
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Whether this is an interest-free installment plan.
    #[must_use]
    pub fn is_installment(&self) -> bool {
        self.is_installment
    }

    /// One-time prepayment amount (0 when none).
    #[must_use]
    pub fn prepayment_amount(&self) -> f64 {
        self.prepayment_amount
    }

    /// Month index of the prepayment, if given.
    #[must_use]
    pub fn prepayment_month(&self) -> Option<u32> {
        self.prepayment_month
    }

    /// Prepayment strategy.
    #[must_use]
    pub fn prepayment_strategy(&self) -> PrepaymentStrategy {
        self.prepayment_strategy
    }

    /// Amount actually borrowed.
    #[must_use]
    pub fn financed_amount(&self) -> f64 {
        self.loan_amount - self.down_payment
    }
}
