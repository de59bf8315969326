//! Article and annex wording of the three contract templates.

use super::calculator::LoanTerms;
use super::common::{format_duration, format_eur, format_rate};
use super::selector::{CivilAnnexes, ContractVariant, ProfessionalAnnexes};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub body: String,
}

impl Article {
    fn numbered(number: usize, heading: &str, body: String) -> Self {
        Self {
            title: format!("Article {number} – {heading}"),
            body,
        }
    }

    fn annex(number: usize, heading: &str, body: String) -> Self {
        Self {
            title: format!("Annexe {number} – {heading}"),
            body,
        }
    }
}

/// Values interpolated into the legal wording.
#[derive(Debug, Clone)]
pub struct ArticleContext {
    pub borrower: String,
    pub platform: String,
    pub loan_type_label: String,
    pub amount: String,
    pub duration: String,
    pub rate: String,
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_repayment: String,
}

impl ArticleContext {
    pub fn new(borrower: String, platform: String, loan_type_label: String, terms: &LoanTerms) -> Self {
        Self {
            borrower,
            platform,
            loan_type_label,
            amount: format_eur(terms.principal),
            duration: format_duration(terms.term_months),
            rate: format_rate(terms.annual_rate),
            monthly_payment: format_eur(terms.monthly_payment),
            total_interest: format_eur(terms.total_interest),
            total_repayment: format_eur(terms.total_repayment),
        }
    }
}

/// Articles then annexes for the selected template, in document order.
pub fn contract_body(variant: &ContractVariant, ctx: &ArticleContext) -> (Vec<Article>, Vec<Article>) {
    match variant {
        ContractVariant::Civil(annexes) => (civil_articles(ctx), civil_annexes(ctx, annexes)),
        ContractVariant::Professional(annexes) => {
            (professional_articles(ctx), professional_annexes(ctx, annexes))
        }
        ContractVariant::Consolidation => (consolidation_articles(ctx), Vec::new()),
    }
}

fn civil_articles(ctx: &ArticleContext) -> Vec<Article> {
    let sections = [
        (
            "Nature juridique",
            format!(
                "Le présent contrat est un prêt d'argent entre particuliers régi par les articles 1892 \
                 et suivants du Code civil. Il est conclu au titre d'un {} et ne constitue pas une \
                 opération de crédit à la consommation réalisée par un établissement de crédit.",
                ctx.loan_type_label.to_lowercase()
            ),
        ),
        (
            "Montant et mise à disposition des fonds",
            format!(
                "Le Prêteur consent à l'Emprunteur, qui l'accepte, un prêt d'un montant de {}. Les fonds \
                 sont versés par virement bancaire sur le compte désigné par l'Emprunteur dans un délai \
                 de quinze jours suivant la signature du présent contrat par les deux Parties.",
                ctx.amount
            ),
        ),
        (
            "Durée",
            format!(
                "Le prêt est consenti pour une durée de {} à compter de la date de mise à disposition \
                 des fonds. L'Emprunteur peut rembourser tout ou partie du capital restant dû par \
                 anticipation, sans frais ni pénalité.",
                ctx.duration
            ),
        ),
        (
            "Modalités de remboursement",
            format!(
                "L'Emprunteur rembourse le prêt par mensualités constantes de {}, prélevées le cinq de \
                 chaque mois. Le montant total dû au terme du contrat s'élève à {}.",
                ctx.monthly_payment, ctx.total_repayment
            ),
        ),
        (
            "Intérêts",
            format!(
                "Le prêt porte intérêt au taux annuel fixe de {}, calculé sur le capital restant dû. \
                 Le coût total des intérêts sur la durée du prêt s'élève à {}. Le taux reste inchangé \
                 pendant toute la durée du contrat.",
                ctx.rate, ctx.total_interest
            ),
        ),
        (
            "Exigibilité anticipée",
            "En cas de défaut de paiement de deux mensualités consécutives, resté sans effet trente \
             jours après une mise en demeure adressée par lettre recommandée avec accusé de réception, \
             le Prêteur peut exiger le remboursement immédiat du capital restant dû, des intérêts \
             échus et des accessoires."
                .to_string(),
        ),
        (
            "Clause pénale",
            "Toute somme restée impayée à son échéance porte de plein droit intérêt au taux légal \
             majoré de trois points, sans préjudice de l'indemnité forfaitaire de recouvrement, \
             limitée à huit pour cent des sommes dues."
                .to_string(),
        ),
        (
            "Garanties",
            "L'Emprunteur déclare ne faire l'objet d'aucune procédure de surendettement et s'engage \
             à informer le Prêteur de toute modification significative de sa situation financière \
             ou professionnelle pendant la durée du prêt."
                .to_string(),
        ),
        (
            "Indépendance de la plateforme",
            format!(
                "{} agit exclusivement en qualité de plateforme de mise en relation. Elle n'est pas \
                 partie au présent contrat, ne reçoit pas les fonds prêtés et ne saurait être tenue \
                 responsable de l'exécution des obligations des Parties.",
                ctx.platform
            ),
        ),
        (
            "Droit applicable et juridiction",
            "Le présent contrat est soumis au droit français. Tout différend relatif à sa validité, \
             son interprétation ou son exécution relève de la compétence des tribunaux du ressort \
             du domicile de l'Emprunteur."
                .to_string(),
        ),
    ];

    number_articles(sections)
}

fn civil_annexes(ctx: &ArticleContext, annexes: &CivilAnnexes) -> Vec<Article> {
    let mut sections = Vec::new();
    if annexes.debt_acknowledgement {
        sections.push((
            "Reconnaissance de dette",
            format!(
                "Je soussigné(e) {}, reconnais devoir au Prêteur la somme de {} au titre du présent \
                 prêt, augmentée des intérêts au taux annuel fixe de {}, soit un montant total de {} \
                 remboursable sur {} par mensualités de {}. Cette reconnaissance de dette est établie \
                 conformément à l'article 1376 du Code civil.",
                ctx.borrower, ctx.amount, ctx.rate, ctx.total_repayment, ctx.duration, ctx.monthly_payment
            ),
        ));
    }
    if annexes.enhanced_guarantee {
        sections.push((
            "Garantie renforcée",
            format!(
                "Compte tenu du montant emprunté, supérieur à 40 000,00 €, l'Emprunteur s'engage à \
                 fournir au Prêteur, avant le déblocage des fonds, une caution personnelle ou une \
                 garantie réelle couvrant au minimum le capital de {}, ainsi que ses trois derniers \
                 avis d'imposition.",
                ctx.amount
            ),
        ));
    }

    number_annexes(sections)
}

fn professional_articles(ctx: &ArticleContext) -> Vec<Article> {
    let sections = [
        (
            "Objet du financement",
            format!(
                "Le présent contrat a pour objet le financement de l'activité professionnelle du \
                 Bénéficiaire au titre d'un {}, à hauteur de {}.",
                ctx.loan_type_label.to_lowercase(),
                ctx.amount
            ),
        ),
        (
            "Déclaration de capacité professionnelle",
            "Le Bénéficiaire déclare agir pour les besoins de son activité professionnelle, être \
             régulièrement immatriculé et disposer des pouvoirs nécessaires pour engager l'entreprise \
             au titre du présent contrat."
                .to_string(),
        ),
        (
            "Montant du financement",
            format!(
                "L'Investisseur met à la disposition du Bénéficiaire la somme de {}, versée en une \
                 seule fois par virement sur le compte professionnel du Bénéficiaire.",
                ctx.amount
            ),
        ),
        (
            "Affectation des fonds",
            "Les fonds sont affectés exclusivement au projet professionnel décrit dans la demande \
             de financement. Le Bénéficiaire s'engage à justifier de leur utilisation sur simple \
             demande de l'Investisseur."
                .to_string(),
        ),
        (
            "Rémunération de l'Investisseur",
            format!(
                "Le financement est rémunéré au taux annuel fixe de {}. Il est remboursé en {} par \
                 échéances constantes de {}, soit un coût total des intérêts de {} et un montant total \
                 dû de {}.",
                ctx.rate, ctx.duration, ctx.monthly_payment, ctx.total_interest, ctx.total_repayment
            ),
        ),
        (
            "Garanties",
            "Le Bénéficiaire déclare que son entreprise n'est soumise à aucune procédure collective \
             et s'engage à communiquer ses comptes annuels à l'Investisseur pendant toute la durée \
             du financement."
                .to_string(),
        ),
        (
            "Autonomie de l'Investisseur",
            format!(
                "L'Investisseur reconnaît avoir pris sa décision de financement de manière autonome. \
                 {} n'a fourni aucun conseil en investissement et n'intervient qu'en qualité de \
                 plateforme de mise en relation.",
                ctx.platform
            ),
        ),
        (
            "Exigibilité anticipée",
            "Le défaut de paiement d'une échéance, resté sans effet quinze jours après une mise en \
             demeure, ou l'ouverture d'une procédure collective à l'encontre du Bénéficiaire rend \
             immédiatement exigible l'intégralité des sommes restant dues."
                .to_string(),
        ),
        (
            "Clause résolutoire",
            "En cas d'inexécution par le Bénéficiaire de l'une quelconque de ses obligations, le \
             présent contrat sera résolu de plein droit un mois après une mise en demeure restée \
             infructueuse, sans préjudice de tous dommages et intérêts."
                .to_string(),
        ),
        (
            "Droit applicable et juridiction",
            "Le présent contrat est soumis au droit français. Tout litige relève de la compétence \
             exclusive du tribunal de commerce du siège du Bénéficiaire."
                .to_string(),
        ),
    ];

    number_articles(sections)
}

fn professional_annexes(ctx: &ArticleContext, annexes: &ProfessionalAnnexes) -> Vec<Article> {
    let mut sections = Vec::new();
    if annexes.executive_guarantee {
        sections.push((
            "Caution personnelle du dirigeant",
            format!(
                "Le dirigeant soussigné, {}, se porte caution personnelle et solidaire des engagements \
                 du Bénéficiaire envers l'Investisseur, dans la limite de {} en principal, intérêts \
                 et accessoires, pour la durée du financement augmentée de six mois.",
                ctx.borrower, ctx.total_repayment
            ),
        ));
    }

    number_annexes(sections)
}

fn consolidation_articles(ctx: &ArticleContext) -> Vec<Article> {
    let sections = [
        (
            "Objet du regroupement",
            format!(
                "Le présent contrat a pour objet le rachat et le regroupement des crédits en cours du \
                 Bénéficiaire au moyen d'un financement unique de {}.",
                ctx.amount
            ),
        ),
        (
            "Déclarations du Bénéficiaire",
            "Le Bénéficiaire déclare avoir communiqué la liste exhaustive de ses crédits en cours \
             ainsi que les tableaux d'amortissement correspondants, et certifie l'exactitude des \
             informations transmises."
                .to_string(),
        ),
        (
            "Conditions du nouveau financement",
            format!(
                "Le nouveau financement est consenti pour une durée de {} au taux annuel fixe de {}. \
                 Le coût total des intérêts s'élève à {}.",
                ctx.duration, ctx.rate, ctx.total_interest
            ),
        ),
        (
            "Modalités de remboursement",
            format!(
                "Le Bénéficiaire rembourse le financement par mensualités constantes de {}, pour un \
                 montant total dû de {}. Les fonds sont versés directement aux créanciers des crédits \
                 rachetés.",
                ctx.monthly_payment, ctx.total_repayment
            ),
        ),
        (
            "Garanties",
            "Le Bénéficiaire s'engage à ne pas souscrire de nouveau crédit sans en informer \
             préalablement le Prêteur pendant toute la durée du financement."
                .to_string(),
        ),
        (
            "Absence d'intermédiation",
            format!(
                "{} n'exerce aucune activité d'intermédiaire en opérations de banque. Elle met \
                 uniquement les Parties en relation et ne perçoit aucune somme au titre du rachat.",
                ctx.platform
            ),
        ),
        (
            "Droit applicable et juridiction",
            "Le présent contrat est soumis au droit français. Tout différend relève de la \
             compétence des tribunaux du domicile du Bénéficiaire."
                .to_string(),
        ),
    ];

    number_articles(sections)
}

fn number_articles<I>(sections: I) -> Vec<Article>
where
    I: IntoIterator<Item = (&'static str, String)>,
{
    sections
        .into_iter()
        .enumerate()
        .map(|(i, (heading, body))| Article::numbered(i + 1, heading, body))
        .collect()
}

fn number_annexes(sections: Vec<(&'static str, String)>) -> Vec<Article> {
    sections
        .into_iter()
        .enumerate()
        .map(|(i, (heading, body))| Article::annex(i + 1, heading, body))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ArticleContext {
        ArticleContext::new(
            "Jean Dupont".to_string(),
            "Horizon Crédit".to_string(),
            "Prêt personnel".to_string(),
            &LoanTerms::with_default_rate(20_000.0, 48),
        )
    }

    #[test]
    fn test_article_counts() {
        let ctx = context();
        let civil = ContractVariant::Civil(CivilAnnexes::default());
        let professional = ContractVariant::Professional(ProfessionalAnnexes::default());

        assert_eq!(contract_body(&civil, &ctx).0.len(), 10);
        assert_eq!(contract_body(&professional, &ctx).0.len(), 10);
        assert_eq!(contract_body(&ContractVariant::Consolidation, &ctx).0.len(), 7);
    }

    #[test]
    fn test_annex_gating_and_numbering() {
        let ctx = context();
        let both = ContractVariant::Civil(CivilAnnexes {
            debt_acknowledgement: true,
            enhanced_guarantee: true,
        });
        let (_, annexes) = contract_body(&both, &ctx);
        assert_eq!(annexes.len(), 2);
        assert_eq!(annexes[0].title, "Annexe 1 – Reconnaissance de dette");
        assert_eq!(annexes[1].title, "Annexe 2 – Garantie renforcée");

        let enhanced_only = ContractVariant::Civil(CivilAnnexes {
            debt_acknowledgement: false,
            enhanced_guarantee: true,
        });
        let (_, annexes) = contract_body(&enhanced_only, &ctx);
        assert_eq!(annexes[0].title, "Annexe 1 – Garantie renforcée");
    }

    #[test]
    fn test_values_are_interpolated() {
        let ctx = context();
        let (articles, _) = contract_body(&ContractVariant::Civil(CivilAnnexes::default()), &ctx);

        assert_eq!(articles[0].title, "Article 1 – Nature juridique");
        assert!(articles[1].body.contains("20 000,00 €"));
        assert!(articles[2].body.contains("48 mois"));
        assert!(articles[8].body.contains("Horizon Crédit"));
    }
}
