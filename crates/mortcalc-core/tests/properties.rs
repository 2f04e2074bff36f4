//! Property-based tests for input validation, formatting, and counters.

use std::time::{Duration, Instant};

use proptest::prelude::*;

use mortcalc_core::animation::CounterAnimation;
use mortcalc_core::fields::{Field, FormSnapshot};
use mortcalc_core::format::{Locale, NumberFormatter};
use mortcalc_core::result::principal_share_percent;
use mortcalc_core::validation::{validate, ValidationError};

fn form(loan: f64, down: f64, years: i64, rate: f64) -> FormSnapshot {
    FormSnapshot::new()
        .with(Field::LoanAmount, loan.to_string())
        .with(Field::DownPayment, down.to_string())
        .with(Field::Years, years.to_string())
        .with(Field::InterestRate, rate.to_string())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A non-positive loan amount is always the first reported problem.
    #[test]
    fn non_positive_loan_rejected(loan in -1.0e9f64..=0.0, down in -1.0e6f64..1.0e6, years in -5i64..80) {
        prop_assert_eq!(
            validate(&form(loan, down, years, 5.0)),
            Err(ValidationError::InvalidLoanAmount)
        );
    }

    /// A down payment at or above the loan amount is rejected.
    #[test]
    fn down_payment_not_below_loan_rejected(loan in 1.0f64..1.0e9, extra in 0.0f64..1.0e9) {
        prop_assert_eq!(
            validate(&form(loan, loan + extra, 10, 5.0)),
            Err(ValidationError::DownPaymentTooLarge)
        );
    }

    /// Terms outside [1, 50] are rejected.
    #[test]
    fn term_out_of_range_rejected(
        years in prop_oneof![-1000i64..=0, 51i64..1000],
    ) {
        prop_assert_eq!(
            validate(&form(1_000_000.0, 0.0, years, 5.0)),
            Err(ValidationError::TermOutOfRange)
        );
    }

    /// Installment mode always yields a zero rate, whatever the rate field holds.
    #[test]
    fn installment_zeroes_rate(rate in ".*") {
        let snapshot = FormSnapshot::prefilled()
            .with(Field::InterestRate, rate)
            .with_installment(true);
        let request = validate(&snapshot).unwrap();
        prop_assert!(request.interest_rate() == 0.0);
        prop_assert!(request.is_installment());
    }

    /// Validating the same input twice gives equal outcomes.
    #[test]
    fn validation_is_idempotent(loan in ".*", down in ".*", years in ".*", rate in ".*", installment: bool) {
        let snapshot = FormSnapshot::new()
            .with(Field::LoanAmount, loan)
            .with(Field::DownPayment, down)
            .with(Field::Years, years)
            .with(Field::InterestRate, rate)
            .with_installment(installment);
        prop_assert_eq!(validate(&snapshot), validate(&snapshot.clone()));
    }

    /// The principal share is never NaN and stays within [0, 100] for non-negative inputs.
    #[test]
    fn principal_share_bounded(principal in 0.0f64..1.0e10, overpayment in 0.0f64..1.0e10) {
        let share = principal_share_percent(principal, overpayment);
        prop_assert!(!share.is_nan());
        prop_assert!((0.0..=100.0).contains(&share));
    }

    /// The final frame of a counter formats exactly like its target.
    #[test]
    fn counter_end_state_is_exact(target in 0.0f64..1.0e10, sample_ms in 1000u64..5000) {
        let t0 = Instant::now();
        let counter = CounterAnimation::new(target, t0, Duration::from_secs(1));
        let fmt = NumberFormatter::new(Locale::RuRu);
        let shown = fmt.format_currency(counter.sample(t0 + Duration::from_millis(sample_ms)));
        prop_assert_eq!(shown, fmt.format_currency(target));
    }

    /// Intermediate counter values never overshoot the target.
    #[test]
    fn counter_never_overshoots(target in 0.0f64..1.0e10, sample_ms in 0u64..1000) {
        let t0 = Instant::now();
        let counter = CounterAnimation::new(target, t0, Duration::from_secs(1));
        let v = counter.sample(t0 + Duration::from_millis(sample_ms));
        prop_assert!(v >= 0.0 && v <= target);
    }
}
