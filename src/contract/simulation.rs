//! Loan simulation: the figures a contract would carry, plus the full schedule.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::calculator::{amortization_schedule, Installment, LoanTerms, DEFAULT_ANNUAL_RATE};
use super::common::{format_duration, format_eur, format_rate};
use super::traits::Validator;
use super::validation::{validate_amount, validate_duration, validate_rate, ValidationErrors};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SimulationRequest {
    pub amount: f64,
    pub duration: u32,
    /// Annual rate as a fraction; defaults to the platform rate
    #[serde(default)]
    pub annual_rate: Option<f64>,
}

impl Validator for SimulationRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();
        validate_amount(self.amount, "amount", &mut errors);
        validate_duration(self.duration, "duration", &mut errors);
        if let Some(rate) = self.annual_rate {
            validate_rate(rate, "annual_rate", &mut errors);
        }
        errors.into_result()
    }
}

/// Figures formatted exactly as printed on a contract.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormattedTerms {
    pub amount: String,
    pub duration: String,
    pub annual_rate: String,
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_repayment: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoanSimulation {
    pub terms: LoanTerms,
    pub formatted: FormattedTerms,
    pub schedule: Vec<Installment>,
}

pub fn simulate(request: &SimulationRequest) -> Result<LoanSimulation, String> {
    request.validate()?;

    let rate = request.annual_rate.unwrap_or(DEFAULT_ANNUAL_RATE);
    let terms = LoanTerms::new(request.amount, request.duration, rate);

    Ok(LoanSimulation {
        formatted: FormattedTerms {
            amount: format_eur(terms.principal),
            duration: format_duration(terms.term_months),
            annual_rate: format_rate(terms.annual_rate),
            monthly_payment: format_eur(terms.monthly_payment),
            total_interest: format_eur(terms.total_interest),
            total_repayment: format_eur(terms.total_repayment),
        },
        schedule: amortization_schedule(&terms),
        terms,
    })
}
