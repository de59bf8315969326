//! Loan request records consumed by the contract generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Kind of financing requested.
///
/// Unknown values are kept verbatim in `Other` and are laid out with the
/// civil template, so deserializing a loan request never fails on this field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanType {
    Personal,
    Auto,
    HomeImprovement,
    Business,
    Consolidation,
    Project,
    Other(String),
}

impl LoanType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "personal" => Self::Personal,
            "auto" => Self::Auto,
            "home_improvement" => Self::HomeImprovement,
            "business" => Self::Business,
            "consolidation" => Self::Consolidation,
            "project" => Self::Project,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Personal => "personal",
            Self::Auto => "auto",
            Self::HomeImprovement => "home_improvement",
            Self::Business => "business",
            Self::Consolidation => "consolidation",
            Self::Project => "project",
            Self::Other(raw) => raw,
        }
    }

    /// Default French label shown on the public site for this loan type.
    pub fn default_label(&self) -> String {
        match self {
            Self::Personal => "Prêt personnel".to_string(),
            Self::Auto => "Prêt auto".to_string(),
            Self::HomeImprovement => "Prêt travaux".to_string(),
            Self::Business => "Prêt professionnel".to_string(),
            Self::Consolidation => "Rachat de crédits".to_string(),
            Self::Project => "Financement de projet".to_string(),
            Self::Other(raw) => raw.clone(),
        }
    }
}

impl From<String> for LoanType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<LoanType> for String {
    fn from(value: LoanType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loan request as stored by the brokerage platform.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanContractInput {
    /// Loan request identifier; its first 8 characters are the document reference
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[schema(value_type = String, example = "personal")]
    pub loan_type: LoanType,
    /// Principal in euros
    pub amount: f64,
    /// Duration in months
    pub duration: u32,
    pub created_at: DateTime<Utc>,
}

impl LoanContractInput {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Phone number, if one was given and is not blank.
    pub fn phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }
}

/// Request for one contract document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanContractRequest {
    pub contract: LoanContractInput,
    /// Localized loan-type label; defaults to the platform label for the loan type
    #[serde(default)]
    pub loan_type_label: Option<String>,
}

impl LoanContractRequest {
    pub fn new(contract: LoanContractInput, loan_type_label: impl Into<String>) -> Self {
        Self {
            contract,
            loan_type_label: Some(loan_type_label.into()),
        }
    }

    pub fn label(&self) -> String {
        self.loan_type_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.contract.loan_type.default_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_type_parses_known_values() {
        assert_eq!(LoanType::parse("home_improvement"), LoanType::HomeImprovement);
        assert_eq!(LoanType::parse(" Business "), LoanType::Business);
        assert_eq!(
            LoanType::parse("leasing"),
            LoanType::Other("leasing".to_string())
        );
    }

    #[test]
    fn test_request_deserialization_with_unknown_type() {
        let json = r#"{
            "contract": {
                "id": "abc12345-0000",
                "first_name": "Jean",
                "last_name": "Dupont",
                "email": "jean@example.com",
                "phone": null,
                "loan_type": "student",
                "amount": 5000,
                "duration": 24,
                "created_at": "2026-03-02T12:00:00Z"
            }
        }"#;

        let request: LoanContractRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.contract.loan_type,
            LoanType::Other("student".to_string())
        );
        assert_eq!(request.label(), "student");
        assert!(request.contract.phone().is_none());
    }

    #[test]
    fn test_explicit_label_wins() {
        let json = r#"{
            "contract": {
                "id": "x", "first_name": "A", "last_name": "B", "email": "a@b.fr",
                "phone": "  ", "loan_type": "auto", "amount": 1, "duration": 1,
                "created_at": "2026-03-02T12:00:00Z"
            },
            "loan_type_label": "Crédit auto"
        }"#;

        let request: LoanContractRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.label(), "Crédit auto");
        assert!(request.contract.phone().is_none());
    }
}
