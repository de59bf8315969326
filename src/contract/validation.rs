//! Precondition checks run before any contract layout starts.
//!
//! Every problem in a request is reported at once, each with a hint on how to
//! fix it, so that both API clients and MCP tool callers can correct the
//! record in a single round trip.

use std::fmt;

/// Upper bound on the repayment duration accepted by the platform (30 years).
pub const MAX_DURATION_MONTHS: u32 = 360;

/// Validation error with a user-facing message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message in French
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} ne peut pas être vide", label))
            .with_suggestion(format!("Renseignez {} de la demande de prêt", label.to_lowercase()))
    }

    pub fn invalid_amount(field: &str, value: f64) -> Self {
        Self::new(
            field,
            format!("Le montant '{}' doit être un nombre strictement positif", value),
        )
        .with_suggestion("Indiquez le capital emprunté en euros, par exemple 20000")
    }

    pub fn invalid_duration(field: &str, value: u32) -> Self {
        Self::new(
            field,
            format!(
                "La durée '{}' doit être comprise entre 1 et {} mois",
                value, MAX_DURATION_MONTHS
            ),
        )
        .with_suggestion("Indiquez la durée de remboursement en mois, par exemple 48")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Numbered summary of every error, suitable for API and tool responses.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validation échouée : {} erreur(s) détectée(s)\n",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.join("\n")
    }

    /// Ok if no errors were collected, Err with the formatted summary otherwise.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate that an amount is finite and strictly positive
pub fn validate_amount(value: f64, field: &str, errors: &mut ValidationErrors) {
    if !value.is_finite() || value <= 0.0 {
        errors.add(ValidationError::invalid_amount(field, value));
    }
}

/// Validate a repayment duration in months
pub fn validate_duration(value: u32, field: &str, errors: &mut ValidationErrors) {
    if value == 0 || value > MAX_DURATION_MONTHS {
        errors.add(ValidationError::invalid_duration(field, value));
    }
}

/// Validate an annual interest rate expressed as a fraction (0.035 for 3.5%)
pub fn validate_rate(value: f64, field: &str, errors: &mut ValidationErrors) {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        errors.add(
            ValidationError::new(field, format!("Le taux '{}' est hors limites", value))
                .with_suggestion("Exprimez le taux annuel en fraction, par exemple 0.035 pour 3,5 %"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_error() {
        let mut errors = ValidationErrors::new();
        validate_required("  ", "contract.id", "L'identifiant", &mut errors);
        validate_amount(-1.0, "contract.amount", &mut errors);
        validate_duration(0, "contract.duration", &mut errors);

        assert_eq!(errors.len(), 3);
        let message = errors.to_message();
        assert!(message.contains("3 erreur(s)"));
        assert!(message.contains("[contract.amount]"));
        assert!(message.contains("1 et 360 mois"));
    }

    #[test]
    fn test_nan_amount_rejected() {
        let mut errors = ValidationErrors::new();
        validate_amount(f64::NAN, "amount", &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_valid_values_pass() {
        let mut errors = ValidationErrors::new();
        validate_amount(20_000.0, "amount", &mut errors);
        validate_duration(48, "duration", &mut errors);
        validate_rate(0.035, "rate", &mut errors);
        assert!(errors.into_result().is_ok());
    }
}
