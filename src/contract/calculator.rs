//! Fixed-rate amortization figures printed on contracts and simulations.

use serde::Serialize;
use utoipa::ToSchema;

/// Annual rate applied to every contract issued by the platform.
pub const DEFAULT_ANNUAL_RATE: f64 = 0.035;

/// Monthly payment that fully amortizes `principal` over `term_months`.
///
/// Callers must pass `term_months >= 1`; a zero rate falls back to
/// straight-line repayment.
pub fn monthly_payment(principal: f64, term_months: u32, annual_rate: f64) -> f64 {
    let n = term_months as f64;
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return principal / n;
    }

    let growth = (1.0 + r).powf(n);
    principal * r * growth / (growth - 1.0)
}

/// Derived repayment figures for one loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct LoanTerms {
    pub principal: f64,
    pub term_months: u32,
    pub annual_rate: f64,
    pub monthly_payment: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, term_months: u32, annual_rate: f64) -> Self {
        let monthly_payment = monthly_payment(principal, term_months, annual_rate);
        let total_repayment = monthly_payment * term_months as f64;
        Self {
            principal,
            term_months,
            annual_rate,
            monthly_payment,
            total_repayment,
            total_interest: total_repayment - principal,
        }
    }

    pub fn with_default_rate(principal: f64, term_months: u32) -> Self {
        Self::new(principal, term_months, DEFAULT_ANNUAL_RATE)
    }
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Installment {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining_balance: f64,
}

/// Month-by-month split of each payment into interest and principal.
///
/// The last installment settles whatever balance is left, so the schedule
/// always ends at exactly zero.
pub fn amortization_schedule(terms: &LoanTerms) -> Vec<Installment> {
    let monthly_rate = terms.annual_rate / 12.0;
    let mut balance = terms.principal;
    let mut schedule = Vec::with_capacity(terms.term_months as usize);

    for month in 1..=terms.term_months {
        let interest = balance * monthly_rate;
        let (payment, principal) = if month == terms.term_months {
            (balance + interest, balance)
        } else {
            (terms.monthly_payment, terms.monthly_payment - interest)
        };
        balance -= principal;
        if month == terms.term_months {
            balance = 0.0;
        }

        schedule.push(Installment {
            month,
            payment,
            interest,
            principal,
            remaining_balance: balance,
        });
    }

    schedule
}
