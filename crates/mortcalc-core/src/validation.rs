//! Validation and normalization of raw form input.
//!
//! Rules are checked in a fixed order and the first failure is reported,
//! so the message for a given input is always the same.

use crate::constants::{MAX_INTEREST_RATE, MAX_YEARS, MIN_YEARS};
use crate::fields::{Field, FormSnapshot};
use crate::request::{CalculationRequest, PrepaymentStrategy};

/// Rejected form input. The display text is shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Loan amount missing, unparsable, or not positive.
    #[error("invalid property amount")]
    InvalidLoanAmount,

    /// Down payment below zero.
    #[error("down payment cannot be negative")]
    NegativeDownPayment,

    /// Down payment equal to or above the loan amount.
    #[error("down payment must be less than property amount")]
    DownPaymentTooLarge,

    /// Term not an integer in the accepted range.
    #[error("loan term must be 1–50 years")]
    TermOutOfRange,

    /// Interest rate not a number in the accepted range.
    #[error("interest rate must be 0–100%")]
    RateOutOfRange,

    /// Prepayment amount below zero.
    #[error("prepayment amount cannot be negative")]
    NegativePrepayment,
}

/// Turn a form snapshot into a calculation request.
///
/// Pure: the same snapshot always yields the same outcome. The prepayment
/// month is not checked against the loan term; the calculation service owns
/// that rule.
pub fn validate(form: &FormSnapshot) -> Result<CalculationRequest, ValidationError> {
    let loan_amount = match parse_decimal(form.get(Field::LoanAmount)) {
        Some(v) if v > 0.0 => v,
        _ => return Err(ValidationError::InvalidLoanAmount),
    };

    let down_payment = parse_decimal(form.get(Field::DownPayment)).unwrap_or(0.0);
    if down_payment < 0.0 {
        return Err(ValidationError::NegativeDownPayment);
    }
    if down_payment >= loan_amount {
        return Err(ValidationError::DownPaymentTooLarge);
    }

    let years = match form.get(Field::Years).trim().parse::<i64>() {
        Ok(y) if (i64::from(MIN_YEARS)..=i64::from(MAX_YEARS)).contains(&y) => {
            u32::try_from(y).map_err(|_| ValidationError::TermOutOfRange)?
        }
        _ => return Err(ValidationError::TermOutOfRange),
    };

    let is_installment = form.installment();
    let interest_rate = if is_installment {
        0.0
    } else {
        match parse_decimal(form.get(Field::InterestRate)) {
            Some(r) if (0.0..=MAX_INTEREST_RATE).contains(&r) => r,
            _ => return Err(ValidationError::RateOutOfRange),
        }
    };

    let prepayment_amount = parse_decimal(form.get(Field::PrepaymentAmount)).unwrap_or(0.0);
    if prepayment_amount < 0.0 {
        return Err(ValidationError::NegativePrepayment);
    }

    let prepayment_month = parse_month(form.get(Field::PrepaymentMonth));
    let prepayment_strategy =
        PrepaymentStrategy::from_form_value(form.get(Field::PrepaymentStrategy));

    Ok(CalculationRequest {
        loan_amount,
        down_payment,
        years,
        interest_rate,
        is_installment,
        prepayment_amount,
        prepayment_month,
        prepayment_strategy,
    })
}

/// Parse a decimal, accepting a decimal comma. Blank, unparsable and
/// non-finite input yields `None`.
fn parse_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// A month index is only kept when it is a positive integer.
fn parse_month(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u32>() {
        Ok(m) if m > 0 => Some(m),
        _ => {
            tracing::warn!(value = raw, "prepayment month is not a positive integer, ignoring");
            None
        }
    }
}

/// The entered prepayment month when validation will drop it, so callers
/// can tell the user it was not sent.
#[must_use]
pub fn ignored_prepayment_month(form: &FormSnapshot) -> Option<&str> {
    let raw = form.get(Field::PrepaymentMonth).trim();
    match raw.parse::<u32>() {
        _ if raw.is_empty() => None,
        Ok(m) if m > 0 => None,
        _ => Some(raw),
    }
}
