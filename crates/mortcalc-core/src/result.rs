//! Calculation results as returned by the calculation service.

use serde::{Deserialize, Serialize};

/// One payment period of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based month index, strictly increasing within a schedule.
    pub month: u32,
    /// Total paid this month (`interest + principal`).
    pub payment: f64,
    /// Interest part of the payment.
    pub interest: f64,
    /// Principal part of the payment, including any prepayment.
    pub principal: f64,
    /// Balance left after this payment.
    pub remaining: f64,
}

/// Successful calculation response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub monthly_payment: f64,
    pub principal: f64,
    pub total_amount_payments: f64,
    pub overpayment: f64,
    pub cash_total: f64,
    #[serde(default)]
    pub schedule: Vec<ScheduleRow>,
    /// Echo of the request, when the service includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
}

impl CalculationResult {
    /// Share of the principal in everything paid to the lender, in percent.
    #[must_use]
    pub fn principal_share_percent(&self) -> f64 {
        principal_share_percent(self.principal, self.overpayment)
    }

    /// Value of one summary figure.
    #[must_use]
    pub fn figure(&self, figure: SummaryFigure) -> f64 {
        match figure {
            SummaryFigure::MonthlyPayment => self.monthly_payment,
            SummaryFigure::Principal => self.principal,
            SummaryFigure::TotalPaid => self.total_amount_payments,
            SummaryFigure::Overpayment => self.overpayment,
            SummaryFigure::CashTotal => self.cash_total,
        }
    }
}

/// `principal / (principal + overpayment)` as a percentage, or 0 when
/// nothing is owed.
#[must_use]
pub fn principal_share_percent(principal: f64, overpayment: f64) -> f64 {
    let total = principal + overpayment;
    if total > 0.0 {
        principal / total * 100.0
    } else {
        0.0
    }
}

/// The five headline figures of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SummaryFigure {
    MonthlyPayment,
    Principal,
    TotalPaid,
    Overpayment,
    CashTotal,
}

impl SummaryFigure {
    /// All figures in display order.
    pub const ALL: [SummaryFigure; 5] = [
        Self::MonthlyPayment,
        Self::Principal,
        Self::TotalPaid,
        Self::Overpayment,
        Self::CashTotal,
    ];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MonthlyPayment => "Monthly payment",
            Self::Principal => "Loan principal",
            Self::TotalPaid => "Total paid",
            Self::Overpayment => "Overpayment",
            Self::CashTotal => "Total incl. down payment",
        }
    }
}
