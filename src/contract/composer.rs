//! Contract composer and generator.
//!
//! `ContractGenerator` validates a loan request, picks the template, lays out
//! every section through a single [`PageWriter`], stamps the footers and
//! hands the finished layout to a render backend.

use log::{info, warn};
use uuid::Uuid;

use super::calculator::LoanTerms;
use super::common::{format_french_timestamp, sanitize_filename, short_reference};
use super::engine::PdfRenderEngine;
use super::finisher::stamp_footers;
use super::layout::{Layout, PageWriter};
use super::model::LoanContractRequest;
use super::sections::{
    write_article, write_header, write_party_block, write_signature_block, write_summary_table,
};
use super::selector::{select_variant, ContractMeta};
use super::traits::{Generator, RenderBackend, Validator};
use super::variants::{contract_body, ArticleContext};
use super::{Branding, ContractError, GeneratedContract};

impl Validator for LoanContractRequest {
    /// Check every precondition of the layout and report all failures at once.
    fn validate(&self) -> Result<(), String> {
        use super::validation::*;

        let mut errors = ValidationErrors::new();
        let contract = &self.contract;

        validate_required(&contract.id, "contract.id", "L'identifiant de la demande", &mut errors);
        validate_required(&contract.first_name, "contract.first_name", "Le prénom", &mut errors);
        validate_required(&contract.last_name, "contract.last_name", "Le nom", &mut errors);
        validate_required(&contract.email, "contract.email", "L'adresse email", &mut errors);
        validate_amount(contract.amount, "contract.amount", &mut errors);
        validate_duration(contract.duration, "contract.duration", &mut errors);

        errors.into_result()
    }
}

/// Everything known about a contract before it is rendered to bytes.
#[derive(Debug, Clone)]
pub struct ComposedContract {
    pub reference: String,
    pub filename: String,
    pub loan_type_label: String,
    pub meta: ContractMeta,
    pub terms: LoanTerms,
    pub layout: Layout,
}

/// Generator for loan contract documents.
#[derive(Debug, Clone)]
pub struct ContractGenerator<B = PdfRenderEngine> {
    branding: Branding,
    annual_rate: f64,
    backend: B,
}

impl ContractGenerator<PdfRenderEngine> {
    /// Create a generator rendering PDF documents.
    pub fn new(branding: Branding) -> Self {
        let backend = PdfRenderEngine::with_title(format!("Contrat de prêt – {}", branding.name));
        Self::with_backend(branding, backend)
    }
}

impl<B: RenderBackend> ContractGenerator<B> {
    pub fn with_backend(branding: Branding, backend: B) -> Self {
        Self {
            branding,
            annual_rate: super::calculator::DEFAULT_ANNUAL_RATE,
            backend,
        }
    }

    /// Validate the request and lay the contract out, without rendering it.
    pub fn compose(&self, request: &LoanContractRequest) -> Result<ComposedContract, ContractError> {
        if let Err(message) = Validator::validate(request) {
            warn!(
                "rejected loan contract request {}: {}",
                request.contract.id,
                message.replace('\n', " ")
            );
            return Err(ContractError::InvalidInput(message));
        }

        let contract = &request.contract;
        let meta = select_variant(&contract.loan_type, contract.amount);
        let terms = LoanTerms::new(contract.amount, contract.duration, self.annual_rate);
        let reference = short_reference(&contract.id);
        let loan_type_label = request.label();
        let borrower = contract.full_name();

        let mut writer = PageWriter::new();
        write_header(
            &mut writer,
            &self.branding,
            meta.variant.document_title(),
            &reference,
        );
        write_party_block(
            &mut writer,
            &meta.variant,
            contract,
            &format_french_timestamp(&contract.created_at),
        );
        write_summary_table(&mut writer, &loan_type_label, &terms);

        let ctx = ArticleContext::new(
            borrower.clone(),
            self.branding.name.clone(),
            loan_type_label.clone(),
            &terms,
        );
        let (articles, annexes) = contract_body(&meta.variant, &ctx);
        for article in articles.iter().chain(annexes.iter()) {
            write_article(&mut writer, &article.title, &article.body);
        }
        write_signature_block(&mut writer, &meta.variant, &borrower);

        let mut layout = writer.finish();
        stamp_footers(&mut layout, &self.branding);

        let filename = format!(
            "contrat-{}-{}-{}.pdf",
            meta.variant.name(),
            sanitize_filename(&borrower, "emprunteur"),
            reference.to_lowercase()
        );

        Ok(ComposedContract {
            reference,
            filename,
            loan_type_label,
            meta,
            terms,
            layout,
        })
    }
}

impl<B: RenderBackend> Generator<LoanContractRequest> for ContractGenerator<B> {
    type Output = GeneratedContract;

    fn generate(&self, request: LoanContractRequest) -> Result<GeneratedContract, ContractError> {
        let composed = self.compose(&request)?;
        let pdf = self.backend.render(&composed.layout)?;
        let reference_url = format!("blob:{}/{}", self.branding.website, Uuid::new_v4());

        info!(
            "generated {} contract {} ({} pages, {} bytes)",
            composed.meta.variant.name(),
            composed.reference,
            composed.layout.page_count(),
            pdf.len()
        );

        Ok(GeneratedContract {
            filename: composed.filename,
            reference: composed.reference,
            reference_url,
            mime_type: self.backend.mime_type(),
            pdf,
            meta: composed.meta,
            terms: composed.terms,
            layout: composed.layout,
        })
    }
}

// Inherent impl for ease of use
impl<B: RenderBackend> ContractGenerator<B> {
    pub fn generate(&self, request: LoanContractRequest) -> Result<GeneratedContract, ContractError> {
        Generator::generate(self, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::model::{LoanContractInput, LoanType};
    use chrono::{TimeZone, Utc};

    /// Backend that records nothing and returns a fixed payload.
    struct NullBackend;

    impl RenderBackend for NullBackend {
        fn mime_type(&self) -> &'static str {
            "application/octet-stream"
        }

        fn render(&self, layout: &Layout) -> Result<Vec<u8>, ContractError> {
            Ok(vec![layout.page_count() as u8])
        }
    }

    fn request(loan_type: &str, amount: f64, duration: u32) -> LoanContractRequest {
        LoanContractRequest {
            contract: LoanContractInput {
                id: "abc12345-xxxx".to_string(),
                first_name: "Jean".to_string(),
                last_name: "Dupont".to_string(),
                email: "jean@example.com".to_string(),
                phone: Some("06 12 34 56 78".to_string()),
                loan_type: LoanType::parse(loan_type),
                amount,
                duration,
                created_at: Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
            },
            loan_type_label: None,
        }
    }

    #[test]
    fn test_compose_professional_with_guarantee() {
        let generator = ContractGenerator::new(Branding::default());
        let composed = generator.compose(&request("business", 35_000.0, 60)).unwrap();

        let titles = composed.layout.section_titles();
        assert_eq!(titles.iter().filter(|t| t.starts_with("Article ")).count(), 10);
        assert!(titles.contains(&"Annexe 1 – Caution personnelle du dirigeant"));
        assert!(composed.layout.contains_text("L'Investisseur"));
        assert!(composed.layout.contains_text("Téléphone : 06 12 34 56 78"));
        assert_eq!(composed.filename, "contrat-professional-jean-dupont-abc12345.pdf");
    }

    #[test]
    fn test_invalid_request_rejected_before_layout() {
        let generator = ContractGenerator::with_backend(Branding::default(), NullBackend);
        let err = generator.generate(request("personal", 0.0, 0)).unwrap_err();

        match err {
            ContractError::InvalidInput(message) => {
                assert!(message.contains("contract.amount"));
                assert!(message.contains("contract.duration"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_backend_receives_layout() {
        let generator = ContractGenerator::with_backend(Branding::default(), NullBackend);
        let contract = generator.generate(request("consolidation", 12_000.0, 24)).unwrap();

        assert_eq!(contract.mime_type, "application/octet-stream");
        assert_eq!(contract.pdf, vec![contract.layout.page_count() as u8]);
        assert!(contract.reference_url.starts_with("blob:"));
    }
}
