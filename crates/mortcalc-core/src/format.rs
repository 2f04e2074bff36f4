//! Locale-aware number and currency formatting.
//!
//! Amounts are shown with whole-currency-unit granularity: every value is
//! rounded half away from zero before grouping.

use std::fmt;
use std::str::FromStr;

/// No-break space, the group separator of the Russian locale.
const NBSP: char = '\u{a0}';

/// Display locale for numbers and amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Russian: `3 000 000 ₽`.
    #[default]
    RuRu,
    /// US English: `RUB 3,000,000`.
    EnUs,
}

impl Locale {
    /// Separator inserted between digit groups.
    #[must_use]
    pub fn group_separator(self) -> char {
        match self {
            Self::RuRu => NBSP,
            Self::EnUs => ',',
        }
    }

    /// Smallest number of digits in the leading group before grouping kicks in.
    ///
    /// Russian leaves four-digit numbers ungrouped (`1000`, `10 000`).
    #[must_use]
    pub fn min_grouping_digits(self) -> usize {
        match self {
            Self::RuRu => 2,
            Self::EnUs => 1,
        }
    }

    /// BCP 47 tag of this locale.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::RuRu => "ru-RU",
            Self::EnUs => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" | "ru_ru" => Ok(Self::RuRu),
            "en" | "en-us" | "en_us" => Ok(Self::EnUs),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Formats plain numbers, RUB amounts and percentages for one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormatter {
    locale: Locale,
}

impl NumberFormatter {
    /// Create a formatter for the given locale.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The active locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Group-separated integer representation of `value`.
    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        let (negative, digits) = rounded_digits(value);
        let grouped = group_digits(&digits, self.locale);
        if negative {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    /// Currency representation of `value` with no fractional digits.
    #[must_use]
    pub fn format_currency(&self, value: f64) -> String {
        let (negative, digits) = rounded_digits(value);
        let grouped = group_digits(&digits, self.locale);
        let sign = if negative { "-" } else { "" };
        match self.locale {
            Locale::RuRu => format!("{sign}{grouped}{NBSP}₽"),
            Locale::EnUs => format!("{sign}RUB{NBSP}{grouped}"),
        }
    }

    /// Percentage with one fractional digit, e.g. `76.4%`.
    #[must_use]
    pub fn format_percent(&self, value: f64) -> String {
        format!("{value:.1}%")
    }
}

/// Round half away from zero and split into sign and decimal digits.
///
/// A value that rounds to zero is never reported as negative.
fn rounded_digits(value: f64) -> (bool, String) {
    debug_assert!(value.is_finite(), "formatting a non-finite amount");
    let rounded = value.round();
    if rounded == 0.0 {
        return (false, "0".to_string());
    }
    (rounded < 0.0, format!("{:.0}", rounded.abs()))
}

fn group_digits(digits: &str, locale: Locale) -> String {
    if digits.len() < 3 + locale.min_grouping_digits() {
        return digits.to_string();
    }
    let sep = locale.group_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len_utf8());
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i >= lead && (i - lead) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
