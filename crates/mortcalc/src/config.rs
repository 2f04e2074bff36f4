//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use mortcalc_core::fields::{Field, FormSnapshot};
use mortcalc_core::format::{Locale, NumberFormatter};

use crate::errors::ConfigError;

/// mortcalc: loan amortization calculator client.
///
/// Collects loan parameters, validates them locally and asks the
/// calculation service for a monthly repayment schedule.
#[derive(Parser, Debug)]
#[command(name = "mortcalc", version, about)]
pub struct AppConfig {
    /// Base URL of the calculation service.
    #[arg(
        long,
        default_value = "http://127.0.0.1:5000",
        env = "MORTCALC_SERVICE_URL"
    )]
    pub service_url: String,

    /// Request timeout (e.g. "30s", "1m", "500ms").
    #[arg(long, default_value = "30s", env = "MORTCALC_TIMEOUT")]
    pub timeout: String,

    /// Number formatting locale: ru or en.
    #[arg(long, default_value = "ru", env = "MORTCALC_LOCALE")]
    pub locale: String,

    /// Launch the interactive dashboard.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Property price.
    #[arg(long, allow_hyphen_values = true)]
    pub loan_amount: Option<String>,

    /// Down payment.
    #[arg(long, allow_hyphen_values = true)]
    pub down_payment: Option<String>,

    /// Loan term in years (1-50).
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Annual interest rate in percent.
    #[arg(long, allow_hyphen_values = true)]
    pub interest_rate: Option<String>,

    /// Interest-free installment plan; the rate is ignored.
    #[arg(long)]
    pub installment: bool,

    /// One-off prepayment amount.
    #[arg(long, allow_hyphen_values = true)]
    pub prepayment_amount: Option<String>,

    /// Month the prepayment is made in.
    #[arg(long, allow_hyphen_values = true)]
    pub prepayment_month: Option<String>,

    /// What the prepayment reduces: reduce_term or reduce_payment.
    #[arg(long)]
    pub prepayment_strategy: Option<String>,

    /// Save the CSV schedule to this file or directory.
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Print the full schedule table.
    #[arg(short, long)]
    pub schedule: bool,

    /// Quiet mode (only the monthly payment).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the timeout flag.
    pub fn timeout_duration(&self) -> Result<Duration, ConfigError> {
        parse_duration(&self.timeout).ok_or_else(|| ConfigError::Timeout(self.timeout.clone()))
    }

    /// Formatter for the selected locale.
    pub fn formatter(&self) -> Result<NumberFormatter, ConfigError> {
        let locale: Locale = self.locale.parse().map_err(ConfigError::Locale)?;
        Ok(NumberFormatter::new(locale))
    }

    /// Form contents: the prefilled example overlaid with any loan flags given.
    #[must_use]
    pub fn to_form(&self) -> FormSnapshot {
        let overrides = [
            (Field::LoanAmount, &self.loan_amount),
            (Field::DownPayment, &self.down_payment),
            (Field::Years, &self.years),
            (Field::InterestRate, &self.interest_rate),
            (Field::PrepaymentAmount, &self.prepayment_amount),
            (Field::PrepaymentMonth, &self.prepayment_month),
            (Field::PrepaymentStrategy, &self.prepayment_strategy),
        ];
        let mut form = FormSnapshot::prefilled().with_installment(self.installment);
        for (field, value) in overrides {
            if let Some(value) = value {
                form.set(field, value.as_str());
            }
        }
        form
    }
}

/// Log filter from `RUST_LOG`-style `directives`.
///
/// Without directives the CLI logs warnings and the dashboard, which owns
/// the terminal, logs nothing.
#[must_use]
pub fn log_filter(tui: bool, directives: &str) -> EnvFilter {
    let default_level = if tui { LevelFilter::OFF } else { LevelFilter::WARN };
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(directives)
}

/// Parse a duration string like "1m", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["mortcalc"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("1m"), Some(Duration::from_secs(60)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration("15"), Some(Duration::from_secs(15)));
    }

    #[test]
    fn parse_duration_rejects_garbage() {
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration("5h"), None);
    }

    #[test]
    fn defaults_are_the_prefilled_example() {
        let cfg = config(&[]);
        assert_eq!(cfg.service_url, "http://127.0.0.1:5000");
        assert_eq!(cfg.timeout_duration().unwrap(), Duration::from_secs(30));
        let form = cfg.to_form();
        assert_eq!(form, FormSnapshot::prefilled());
        assert!(!form.installment());
    }

    #[test]
    fn loan_flags_override_form() {
        let cfg = config(&[
            "--loan-amount",
            "1000000",
            "--years",
            "10",
            "--installment",
            "--prepayment-month",
            "12",
        ]);
        let form = cfg.to_form();
        assert_eq!(form.get(Field::LoanAmount), "1000000");
        assert_eq!(form.get(Field::Years), "10");
        assert_eq!(form.get(Field::DownPayment), "600000");
        assert_eq!(form.get(Field::PrepaymentMonth), "12");
        assert!(form.installment());
    }

    #[test]
    fn negative_values_reach_the_validator() {
        let cfg = config(&["--down-payment", "-5"]);
        assert_eq!(cfg.to_form().get(Field::DownPayment), "-5");
    }

    #[test]
    fn bad_locale_and_timeout_are_config_errors() {
        let cfg = config(&["--locale", "fr", "--timeout", "never"]);
        assert!(matches!(cfg.formatter(), Err(ConfigError::Locale(_))));
        assert!(matches!(
            cfg.timeout_duration(),
            Err(ConfigError::Timeout(_))
        ));
    }

    #[test]
    fn log_filter_defaults_per_mode() {
        assert_eq!(log_filter(false, "").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(true, "").max_level_hint(), Some(LevelFilter::OFF));
    }

    #[test]
    fn log_filter_env_level_wins() {
        assert_eq!(log_filter(false, "debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(true, "trace").max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn english_locale() {
        let cfg = config(&["--locale", "en"]);
        assert_eq!(cfg.formatter().unwrap().locale(), Locale::EnUs);
    }
}
