//! Section writers shared by every contract variant.

use super::calculator::LoanTerms;
use super::common::{format_duration, format_eur, format_rate};
use super::layout::{Color, PageWriter, CONTENT_WIDTH, MARGIN_X, PAGE_WIDTH};
use super::model::LoanContractInput;
use super::selector::ContractVariant;
use super::text::{fit_text, text_width, Font};
use super::Branding;

pub const HEADER_HEIGHT: f32 = 90.0;
/// Cursor advance of a section heading (title and rule).
pub const HEADING_ADVANCE: f32 = 24.0;
/// Cursor advance of an article title.
pub const ARTICLE_TITLE_ADVANCE: f32 = 17.0;
/// Room an article needs before its title: the title plus the first body line.
pub const TITLE_BLOCK: f32 = ARTICLE_TITLE_ADVANCE + BODY_LINE;
/// Room the signature block needs, closing sentence included.
pub const SIGNATURE_BLOCK: f32 = 96.0;

const BODY_SIZE: f32 = 9.5;
const BODY_LINE: f32 = 13.0;
const PARTY_LABEL_LINE: f32 = 14.0;
const ROW_HEIGHT: f32 = 20.0;
const CELL_PADDING: f32 = 8.0;
const SIGNATURE_BOX_HEIGHT: f32 = 70.0;

/// Banner at the top of the first page.
pub fn write_header(writer: &mut PageWriter, branding: &Branding, title: &str, reference: &str) {
    writer.rect(0.0, 0.0, PAGE_WIDTH, HEADER_HEIGHT, Some(Color::BRAND), None);
    writer.text_at(
        MARGIN_X,
        36.0,
        fit_text(&branding.name, Font::Bold, 20.0, CONTENT_WIDTH),
        Font::Bold,
        20.0,
        Color::WHITE,
    );
    writer.text_at(MARGIN_X, 58.0, title, Font::Bold, 12.0, Color::WHITE);
    writer.text_at(
        MARGIN_X,
        76.0,
        format!("Référence : {reference}"),
        Font::Regular,
        9.0,
        Color::WHITE,
    );
    writer.set_cursor(HEADER_HEIGHT + 25.0);
}

/// Bold heading with a rule underneath, recorded in the outline.
///
/// `first_block` is the height of whatever follows the heading; both move to
/// the next page together when they do not fit.
pub fn write_section_heading(writer: &mut PageWriter, title: &str, first_block: f32) {
    writer.ensure_space(HEADING_ADVANCE + first_block);
    writer.mark_section(title);
    let top = writer.cursor();
    writer.text_at(MARGIN_X, top + 11.0, title, Font::Bold, 11.0, Color::BRAND);
    writer.rule(top + 16.0, Color::BRAND);
    writer.advance(HEADING_ADVANCE);
}

pub fn write_party_block(
    writer: &mut PageWriter,
    variant: &ContractVariant,
    input: &LoanContractInput,
    established_on: &str,
) {
    writer.ensure_space(22.0);
    let top = writer.cursor();
    writer.text_right(
        top + 10.0,
        &format!("Établi le {established_on}"),
        Font::Regular,
        10.0,
        Color::GREY,
    );
    writer.advance(22.0);

    write_section_heading(writer, "ENTRE LES SOUSSIGNÉS", PARTY_LABEL_LINE);

    let (counterpart, borrower) = variant.party_labels();
    writer.line(&format!("{counterpart} :"), Font::Bold, 10.0, PARTY_LABEL_LINE, 0.0);
    writer.line("Identité à compléter", Font::Regular, BODY_SIZE, BODY_LINE, 12.0);
    writer.line("Adresse : à compléter", Font::Regular, BODY_SIZE, BODY_LINE, 12.0);
    writer.advance(6.0);

    writer.line(&format!("{borrower} :"), Font::Bold, 10.0, PARTY_LABEL_LINE, 0.0);
    writer.paragraph(&input.full_name(), Font::Regular, BODY_SIZE, BODY_LINE, 12.0);

    let contact_width = CONTENT_WIDTH - 12.0;
    let mut contacts = vec![format!("Email : {}", input.email)];
    if let Some(phone) = input.phone() {
        contacts.push(format!("Téléphone : {phone}"));
    }
    for contact in contacts {
        let contact = fit_text(&contact, Font::Regular, BODY_SIZE, contact_width);
        writer.line(&contact, Font::Regular, BODY_SIZE, BODY_LINE, 12.0);
    }
    writer.advance(6.0);
    writer.paragraph(
        "Ci-après dénommés ensemble « les Parties ».",
        Font::Regular,
        BODY_SIZE,
        BODY_LINE,
        0.0,
    );
    writer.advance(10.0);
}

/// Key/value rows of the financing terms.
pub fn summary_rows(loan_type_label: &str, terms: &LoanTerms) -> Vec<(&'static str, String)> {
    vec![
        ("Type de prêt", loan_type_label.to_string()),
        ("Montant emprunté", format_eur(terms.principal)),
        ("Durée", format_duration(terms.term_months)),
        ("Taux annuel fixe", format_rate(terms.annual_rate)),
        ("Mensualité", format_eur(terms.monthly_payment)),
        ("Coût total des intérêts", format_eur(terms.total_interest)),
        ("Montant total dû", format_eur(terms.total_repayment)),
    ]
}

pub fn write_summary_table(writer: &mut PageWriter, loan_type_label: &str, terms: &LoanTerms) {
    write_section_heading(writer, "RÉCAPITULATIF DU FINANCEMENT", ROW_HEIGHT);

    for (i, (key, value)) in summary_rows(loan_type_label, terms).into_iter().enumerate() {
        writer.ensure_space(ROW_HEIGHT);
        let top = writer.cursor();
        let fill = (i % 2 == 0).then_some(Color::LIGHT);
        writer.rect(MARGIN_X, top, CONTENT_WIDTH, ROW_HEIGHT, fill, Some(Color::GREY));
        writer.text_at(
            MARGIN_X + CELL_PADDING,
            top + 13.5,
            key,
            Font::Regular,
            BODY_SIZE,
            Color::BLACK,
        );

        // value column starts one padding past the key
        let key_width = text_width(key, Font::Regular, BODY_SIZE);
        let value_room = CONTENT_WIDTH - 3.0 * CELL_PADDING - key_width;
        let value = fit_text(&value, Font::Bold, BODY_SIZE, value_room);
        let value_x =
            MARGIN_X + CONTENT_WIDTH - CELL_PADDING - text_width(&value, Font::Bold, BODY_SIZE);
        writer.text_at(value_x, top + 13.5, value, Font::Bold, BODY_SIZE, Color::BLACK);
        writer.advance(ROW_HEIGHT);
    }

    writer.advance(14.0);
}

/// Numbered article or annex: bold title, then the wrapped body.
pub fn write_article(writer: &mut PageWriter, title: &str, body: &str) {
    writer.ensure_space(TITLE_BLOCK);
    writer.mark_section(title);
    let top = writer.cursor();
    writer.text_at(MARGIN_X, top + 10.5, title, Font::Bold, 10.5, Color::BLACK);
    writer.advance(ARTICLE_TITLE_ADVANCE);

    writer.paragraph(body, Font::Regular, BODY_SIZE, BODY_LINE, 0.0);
    writer.advance(8.0);
}

/// Two signature boxes side by side: counterpart on the left, borrower on the right.
pub fn write_signature_block(writer: &mut PageWriter, variant: &ContractVariant, borrower_name: &str) {
    writer.ensure_space(SIGNATURE_BLOCK);
    writer.mark_section("Signatures");

    let top = writer.cursor();
    writer.text_at(
        MARGIN_X,
        top + 10.0,
        "Fait en deux exemplaires originaux.",
        Font::Regular,
        BODY_SIZE,
        Color::BLACK,
    );
    writer.advance(16.0);

    let (counterpart, borrower) = variant.party_labels();
    let box_width = (CONTENT_WIDTH - 20.0) / 2.0;
    let top = writer.cursor();
    let left = MARGIN_X;
    let right = MARGIN_X + box_width + 20.0;

    writer.rect(left, top, box_width, SIGNATURE_BOX_HEIGHT, None, Some(Color::GREY));
    writer.text_at(left + 8.0, top + 14.0, counterpart, Font::Bold, 10.0, Color::BLACK);
    writer.text_at(left + 8.0, top + 32.0, "Date : ____/____/______", Font::Regular, 9.0, Color::BLACK);
    writer.text_at(left + 8.0, top + 48.0, "Signature :", Font::Regular, 9.0, Color::GREY);

    writer.rect(right, top, box_width, SIGNATURE_BOX_HEIGHT, None, Some(Color::GREY));
    writer.text_at(right + 8.0, top + 14.0, borrower, Font::Bold, 10.0, Color::BLACK);
    writer.text_at(
        right + 8.0,
        top + 28.0,
        fit_text(borrower_name, Font::Regular, 9.0, box_width - 16.0),
        Font::Regular,
        9.0,
        Color::BLACK,
    );
    writer.text_at(right + 8.0, top + 44.0, "Date : ____/____/______", Font::Regular, 9.0, Color::BLACK);
    writer.text_at(
        right + 8.0,
        top + 60.0,
        "Signature précédée de « Lu et approuvé »",
        Font::Regular,
        8.0,
        Color::GREY,
    );

    writer.advance(SIGNATURE_BOX_HEIGHT + 10.0);
}
