//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use loan_contracts_server::contract::{LoanContractInput, LoanContractRequest, LoanType};

pub fn loan_input(loan_type: &str, amount: f64, duration: u32) -> LoanContractInput {
    LoanContractInput {
        id: "abc12345-6789-4def-8123-456789abcdef".to_string(),
        first_name: "Jean".to_string(),
        last_name: "Dupont".to_string(),
        email: "jean.dupont@example.com".to_string(),
        phone: None,
        loan_type: LoanType::parse(loan_type),
        amount,
        duration,
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 10, 30, 0).unwrap(),
    }
}

pub fn loan_request(loan_type: &str, amount: f64, duration: u32) -> LoanContractRequest {
    LoanContractRequest {
        contract: loan_input(loan_type, amount, duration),
        loan_type_label: None,
    }
}

/// JSON body accepted by `POST /api/contracts` and the MCP tool.
pub fn loan_request_json(loan_type: &str, amount: f64, duration: u32) -> Value {
    json!({
        "contract": {
            "id": "abc12345-6789-4def-8123-456789abcdef",
            "first_name": "Jean",
            "last_name": "Dupont",
            "email": "jean.dupont@example.com",
            "loan_type": loan_type,
            "amount": amount,
            "duration": duration,
            "created_at": "2026-08-01T10:30:00Z"
        }
    })
}
