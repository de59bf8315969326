use serde::Serialize;
use utoipa::ToSchema;

use crate::contract::{ComposedContract, ContractMeta, LoanTerms};

/// Layout summary of a contract, returned without rendering the PDF.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContractPreview {
    pub reference: String,
    /// `civil`, `professional` or `consolidation`
    pub variant: String,
    pub loan_type_label: String,
    pub annexes: Vec<String>,
    pub terms: LoanTerms,
    pub page_count: usize,
    pub filename: String,
    /// Section titles in reading order
    pub sections: Vec<String>,
}

impl From<&ComposedContract> for ContractPreview {
    fn from(composed: &ComposedContract) -> Self {
        Self {
            reference: composed.reference.clone(),
            variant: composed.meta.variant.name().to_string(),
            loan_type_label: composed.loan_type_label.clone(),
            annexes: annex_names(&composed.meta),
            terms: composed.terms,
            page_count: composed.layout.page_count(),
            filename: composed.filename.clone(),
            sections: composed
                .layout
                .section_titles()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Machine names of the annexes a contract carries.
pub fn annex_names(meta: &ContractMeta) -> Vec<String> {
    [
        (meta.include_debt_acknowledgement(), "debt_acknowledgement"),
        (meta.include_enhanced_guarantee(), "enhanced_guarantee"),
        (meta.include_executive_guarantee(), "executive_guarantee"),
    ]
    .into_iter()
    .filter(|(included, _)| *included)
    .map(|(_, name)| name.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{select_variant, LoanType};

    #[test]
    fn test_annex_names() {
        let meta = select_variant(&LoanType::Personal, 45_000.0);
        assert_eq!(annex_names(&meta), vec!["debt_acknowledgement", "enhanced_guarantee"]);

        let meta = select_variant(&LoanType::Business, 31_000.0);
        assert_eq!(annex_names(&meta), vec!["executive_guarantee"]);

        let meta = select_variant(&LoanType::Consolidation, 90_000.0);
        assert!(annex_names(&meta).is_empty());
    }
}
