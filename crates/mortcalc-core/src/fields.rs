//! Form fields, raw form snapshots, and live input sanitizing.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{CURRENCY_INPUT_MAX_DIGITS, MAX_INTEREST_RATE};

/// How a field's text is cleaned up while the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Whole currency units, digits only.
    Currency,
    /// Percentage with an optional decimal part, capped at 100.
    Percentage,
    /// Integer count (years, month index), left as typed.
    Integer,
    /// One of a fixed set of choices.
    Choice,
}

/// A named field of the loan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    LoanAmount,
    DownPayment,
    Years,
    InterestRate,
    PrepaymentAmount,
    PrepaymentMonth,
    PrepaymentStrategy,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 7] = [
        Field::LoanAmount,
        Field::DownPayment,
        Field::Years,
        Field::InterestRate,
        Field::PrepaymentAmount,
        Field::PrepaymentMonth,
        Field::PrepaymentStrategy,
    ];

    /// Wire name of the field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LoanAmount => "loan_amount",
            Self::DownPayment => "down_payment",
            Self::Years => "years",
            Self::InterestRate => "interest_rate",
            Self::PrepaymentAmount => "prepayment_amount",
            Self::PrepaymentMonth => "prepayment_month",
            Self::PrepaymentStrategy => "prepayment_strategy",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LoanAmount => "Property price",
            Self::DownPayment => "Down payment",
            Self::Years => "Term (years)",
            Self::InterestRate => "Interest rate (%)",
            Self::PrepaymentAmount => "Prepayment amount",
            Self::PrepaymentMonth => "Prepayment month",
            Self::PrepaymentStrategy => "Prepayment strategy",
        }
    }

    /// Input sanitizing policy of the field.
    #[must_use]
    pub fn input_kind(self) -> InputKind {
        match self {
            Self::LoanAmount | Self::DownPayment | Self::PrepaymentAmount => InputKind::Currency,
            Self::InterestRate => InputKind::Percentage,
            Self::Years | Self::PrepaymentMonth => InputKind::Integer,
            Self::PrepaymentStrategy => InputKind::Choice,
        }
    }

    /// Look a field up by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw form contents at the moment the user triggered an action.
///
/// Text fields are kept exactly as entered. The installment flag comes from
/// the toggle control and is never parsed from text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: BTreeMap<Field, String>,
    installment: bool,
}

impl FormSnapshot {
    /// An empty snapshot with installment mode off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The example values the form starts with.
    #[must_use]
    pub fn prefilled() -> Self {
        Self::new()
            .with(Field::LoanAmount, "3000000")
            .with(Field::DownPayment, "600000")
            .with(Field::Years, "20")
            .with(Field::InterestRate, "7.5")
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builder-style installment toggle.
    #[must_use]
    pub fn with_installment(mut self, installment: bool) -> Self {
        self.installment = installment;
        self
    }

    /// Set the raw text of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Set the installment toggle state.
    pub fn set_installment(&mut self, installment: bool) {
        self.installment = installment;
    }

    /// Raw text of a field; missing fields read as empty.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Whether the installment toggle is pressed.
    #[must_use]
    pub fn installment(&self) -> bool {
        self.installment
    }

    /// Build a snapshot from `(name, value)` pairs, ignoring unknown names.
    pub fn from_pairs<'a, I>(pairs: I, installment: bool) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut snapshot = Self::new().with_installment(installment);
        for (name, value) in pairs {
            match Field::from_name(name) {
                Some(field) => snapshot.set(field, value),
                None => tracing::debug!(name, "ignoring unknown form field"),
            }
        }
        snapshot
    }
}

/// Clean up a field's text as it is typed.
///
/// Currency fields keep digits only and at most
/// [`CURRENCY_INPUT_MAX_DIGITS`] of them. The percentage field accepts a
/// decimal comma and snaps anything above 100 to `"100"`. Other kinds are
/// returned unchanged.
#[must_use]
pub fn sanitize_input(kind: InputKind, raw: &str) -> String {
    match kind {
        InputKind::Currency => raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(CURRENCY_INPUT_MAX_DIGITS)
            .collect(),
        InputKind::Percentage => {
            let kept: String = raw
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
                .collect();
            let value = kept.replacen(',', ".", 1);
            match leading_number(&value) {
                Some(n) if n > MAX_INTEREST_RATE => "100".to_string(),
                _ => value,
            }
        }
        InputKind::Integer | InputKind::Choice => raw.to_string(),
    }
}

/// Parse the longest numeric prefix (`digits[.digits]`) of `s`.
fn leading_number(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("is_installment"), None);
    }

    #[test]
    fn snapshot_missing_field_is_empty() {
        let snapshot = FormSnapshot::new();
        assert_eq!(snapshot.get(Field::DownPayment), "");
        assert!(!snapshot.installment());
    }

    #[test]
    fn prefilled_values() {
        let snapshot = FormSnapshot::prefilled();
        assert_eq!(snapshot.get(Field::LoanAmount), "3000000");
        assert_eq!(snapshot.get(Field::DownPayment), "600000");
        assert_eq!(snapshot.get(Field::Years), "20");
        assert_eq!(snapshot.get(Field::InterestRate), "7.5");
        assert_eq!(snapshot.get(Field::PrepaymentMonth), "");
    }

    #[test]
    fn from_pairs_skips_unknown() {
        let snapshot =
            FormSnapshot::from_pairs([("loan_amount", "100"), ("colour", "blue")], true);
        assert_eq!(snapshot.get(Field::LoanAmount), "100");
        assert!(snapshot.installment());
    }

    #[test]
    fn currency_keeps_digits_only() {
        assert_eq!(sanitize_input(InputKind::Currency, "3 000 000 ₽"), "3000000");
        assert_eq!(sanitize_input(InputKind::Currency, "12.5"), "125");
        assert_eq!(sanitize_input(InputKind::Currency, "-500"), "500");
    }

    #[test]
    fn currency_caps_length() {
        assert_eq!(
            sanitize_input(InputKind::Currency, "12345678901234567"),
            "123456789012"
        );
    }

    #[test]
    fn percentage_accepts_decimal_comma() {
        assert_eq!(sanitize_input(InputKind::Percentage, "7,5"), "7.5");
        assert_eq!(sanitize_input(InputKind::Percentage, "abc7.25%"), "7.25");
    }

    #[test]
    fn percentage_clamps_above_hundred() {
        assert_eq!(sanitize_input(InputKind::Percentage, "150"), "100");
        assert_eq!(sanitize_input(InputKind::Percentage, "100"), "100");
        assert_eq!(sanitize_input(InputKind::Percentage, "100.5"), "100");
    }

    #[test]
    fn percentage_keeps_partial_input() {
        assert_eq!(sanitize_input(InputKind::Percentage, ""), "");
        assert_eq!(sanitize_input(InputKind::Percentage, "."), ".");
        assert_eq!(sanitize_input(InputKind::Percentage, "7."), "7.");
    }

    #[test]
    fn integer_left_untouched() {
        assert_eq!(sanitize_input(InputKind::Integer, " 20 "), " 20 ");
    }

    #[test]
    fn leading_number_prefix() {
        assert_eq!(leading_number("1.2.3"), Some(1.2));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number(""), None);
    }
}
