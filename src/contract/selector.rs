//! Contract template selection.

use serde::Serialize;

use super::model::LoanType;

/// Above this amount a civil contract carries a debt acknowledgement annex.
pub const DEBT_ACKNOWLEDGEMENT_THRESHOLD: f64 = 15_000.0;
/// Above this amount a professional contract carries an executive guarantee annex.
pub const EXECUTIVE_GUARANTEE_THRESHOLD: f64 = 30_000.0;
/// Above this amount a civil contract carries an enhanced guarantee annex.
pub const ENHANCED_GUARANTEE_THRESHOLD: f64 = 40_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CivilAnnexes {
    pub debt_acknowledgement: bool,
    pub enhanced_guarantee: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProfessionalAnnexes {
    pub executive_guarantee: bool,
}

/// Legal template of a contract, with the annexes it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum ContractVariant {
    Civil(CivilAnnexes),
    Professional(ProfessionalAnnexes),
    Consolidation,
}

impl ContractVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Civil(_) => "civil",
            Self::Professional(_) => "professional",
            Self::Consolidation => "consolidation",
        }
    }

    pub fn document_title(&self) -> &'static str {
        match self {
            Self::Civil(_) => "CONTRAT DE PRÊT ENTRE PARTICULIERS",
            Self::Professional(_) => "CONTRAT DE FINANCEMENT PROFESSIONNEL",
            Self::Consolidation => "CONTRAT DE RACHAT ET REGROUPEMENT DE CRÉDITS",
        }
    }

    /// Labels of the two parties, counterpart first and borrower second.
    pub fn party_labels(&self) -> (&'static str, &'static str) {
        match self {
            Self::Civil(_) => ("Le Prêteur", "L'Emprunteur"),
            Self::Professional(_) => ("L'Investisseur", "Le Bénéficiaire professionnel"),
            Self::Consolidation => ("Le Prêteur", "Le Bénéficiaire"),
        }
    }
}

/// Template decision for one contract, computed once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractMeta {
    pub variant: ContractVariant,
}

impl ContractMeta {
    pub fn include_debt_acknowledgement(&self) -> bool {
        matches!(
            self.variant,
            ContractVariant::Civil(CivilAnnexes {
                debt_acknowledgement: true,
                ..
            })
        )
    }

    pub fn include_enhanced_guarantee(&self) -> bool {
        matches!(
            self.variant,
            ContractVariant::Civil(CivilAnnexes {
                enhanced_guarantee: true,
                ..
            })
        )
    }

    pub fn include_executive_guarantee(&self) -> bool {
        matches!(
            self.variant,
            ContractVariant::Professional(ProfessionalAnnexes {
                executive_guarantee: true,
            })
        )
    }

    pub fn annex_count(&self) -> usize {
        [
            self.include_debt_acknowledgement(),
            self.include_enhanced_guarantee(),
            self.include_executive_guarantee(),
        ]
        .into_iter()
        .filter(|included| *included)
        .count()
    }
}

/// Pick the contract template and its annexes from the loan type and amount.
pub fn select_variant(loan_type: &LoanType, amount: f64) -> ContractMeta {
    let variant = match loan_type {
        LoanType::Consolidation => ContractVariant::Consolidation,
        LoanType::Business | LoanType::Project => {
            ContractVariant::Professional(ProfessionalAnnexes {
                executive_guarantee: amount > EXECUTIVE_GUARANTEE_THRESHOLD,
            })
        }
        LoanType::Personal
        | LoanType::Auto
        | LoanType::HomeImprovement
        | LoanType::Other(_) => ContractVariant::Civil(CivilAnnexes {
            debt_acknowledgement: amount > DEBT_ACKNOWLEDGEMENT_THRESHOLD,
            enhanced_guarantee: amount > ENHANCED_GUARANTEE_THRESHOLD,
        }),
    };

    ContractMeta { variant }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(loan_type: &str, amount: f64) -> ContractMeta {
        select_variant(&LoanType::parse(loan_type), amount)
    }

    #[test]
    fn test_selection_table() {
        let consolidation = select("consolidation", 1.0);
        assert_eq!(consolidation.variant, ContractVariant::Consolidation);
        assert_eq!(consolidation.annex_count(), 0);

        let business = select("business", 31_000.0);
        assert_eq!(business.variant.name(), "professional");
        assert!(business.include_executive_guarantee());

        let boundary = select("business", 30_000.0);
        assert_eq!(boundary.variant.name(), "professional");
        assert!(!boundary.include_executive_guarantee());

        let personal = select("personal", 15_001.0);
        assert_eq!(personal.variant.name(), "civil");
        assert!(personal.include_debt_acknowledgement());
        assert!(!personal.include_enhanced_guarantee());

        let large = select("personal", 40_001.0);
        assert!(large.include_debt_acknowledgement());
        assert!(large.include_enhanced_guarantee());

        let unknown = select("unknown_type", 100.0);
        assert_eq!(unknown.variant, ContractVariant::Civil(CivilAnnexes::default()));
    }

    #[test]
    fn test_project_is_professional() {
        let meta = select("project", 50_000.0);
        assert_eq!(
            meta.variant,
            ContractVariant::Professional(ProfessionalAnnexes {
                executive_guarantee: true
            })
        );
        assert!(!meta.include_debt_acknowledgement());
    }

    #[test]
    fn test_consolidation_ignores_amount() {
        let meta = select("consolidation", 1_000_000.0);
        assert_eq!(meta.annex_count(), 0);
    }
}
