//! Contract module - business logic for producing loan contract documents.
//!
//! The pipeline runs in four stages:
//! - `selector` - picks the template variant and its annexes
//! - `calculator` - derives the repayment terms
//! - `composer` - lays every section out into a paginated [`layout::Layout`]
//! - `finisher` - stamps page footers once the page total is known
//!
//! The finished layout is handed to a [`traits::RenderBackend`]; the default
//! one is [`PdfRenderEngine`]. `simulation` reuses the calculator for quotes
//! that never become documents.

pub mod calculator;
pub mod common;
pub mod composer;
pub mod engine;
pub mod finisher;
pub mod layout;
pub mod model;
pub mod sections;
pub mod selector;
pub mod simulation;
pub mod text;
pub mod traits;
pub mod validation;
pub mod variants;

pub use calculator::{amortization_schedule, monthly_payment, Installment, LoanTerms};
pub use composer::{ComposedContract, ContractGenerator};
pub use engine::PdfRenderEngine;
pub use model::{LoanContractInput, LoanContractRequest, LoanType};
pub use selector::{select_variant, ContractMeta, ContractVariant};
pub use simulation::{simulate, LoanSimulation, SimulationRequest};
pub use traits::{Generator, RenderBackend, Validator};

use thiserror::Error;

/// Errors that can occur during contract generation.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("invalid contract request: {0}")]
    InvalidInput(String),
    #[error("failed to encode page content: {0}")]
    PdfEncode(String),
    #[error("failed to write PDF document: {0}")]
    PdfWrite(String),
}

/// Platform identity printed in the header and footers of every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub name: String,
    pub website: String,
    pub address: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "Horizon Crédit".to_string(),
            website: "www.horizon-credit.fr".to_string(),
            address: "12 rue de la Paix, 75002 Paris".to_string(),
        }
    }
}

/// Result of a successful contract generation.
#[derive(Debug)]
pub struct GeneratedContract {
    pub filename: String,
    /// Short uppercase reference printed on the document
    pub reference: String,
    /// Transient handle for the rendered bytes, not persisted anywhere
    pub reference_url: String,
    pub mime_type: &'static str,
    pub pdf: Vec<u8>,
    pub meta: ContractMeta,
    pub terms: LoanTerms,
    pub layout: layout::Layout,
}
