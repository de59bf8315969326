//! Common utilities for contract generation.
//!
//! Shared helpers for French date and money formatting, document references
//! and file names.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Format a date the long French way (e.g., "2 mars 2026").
pub fn format_french_date(date: NaiveDate) -> String {
    let month = FRENCH_MONTHS[(date.month0() as usize).min(FRENCH_MONTHS.len() - 1)];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Long French date of a timestamp, taken on the UTC calendar so every host
/// prints the same day.
pub fn format_french_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_french_date(timestamp.date_naive())
}

/// Format an amount in euros: two decimals, grouped thousands, trailing symbol
/// (e.g., "20 000,00 €").
pub fn format_eur(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped},{:02} €", cents % 100)
}

/// Format an annual rate as a percentage (e.g., 0.035 -> "3.50%").
pub fn format_rate(annual_rate: f64) -> String {
    format!("{:.2}%", annual_rate * 100.0)
}

pub fn format_duration(months: u32) -> String {
    format!("{months} mois")
}

/// Human-readable document reference: first 8 characters of the id, uppercased.
pub fn short_reference(id: &str) -> String {
    id.trim().chars().take(8).collect::<String>().to_uppercase()
}

/// Sanitize a string for use in filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        let ch = fold_accent(ch);
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || ch == '-' || ch == '_' || ch == '\'')
            && !last_dash
            && !result.is_empty()
        {
            result.push('-');
            last_dash = true;
        }
    }

    let result = result.trim_matches('-');
    if result.is_empty() {
        return fallback.to_string();
    }

    result.to_string()
}

fn fold_accent(ch: char) -> char {
    match ch {
        'à' | 'â' | 'ä' | 'À' | 'Â' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'î' | 'ï' | 'Î' | 'Ï' => 'i',
        'ô' | 'ö' | 'Ô' | 'Ö' => 'o',
        'ù' | 'û' | 'ü' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(20_000.0), "20 000,00 €");
        assert_eq!(format_eur(293.0244), "293,02 €");
        assert_eq!(format_eur(1_234_567.891), "1 234 567,89 €");
        assert_eq!(format_eur(0.0), "0,00 €");
        assert_eq!(format_eur(-15.5), "-15,50 €");
    }

    #[test]
    fn test_format_french_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        assert_eq!(format_french_date(date), "1 août 2026");
    }

    #[test]
    fn test_format_french_timestamp_uses_utc_day() {
        use chrono::TimeZone;

        let late = Utc.with_ymd_and_hms(2026, 7, 31, 23, 30, 0).unwrap();
        assert_eq!(format_french_timestamp(&late), "31 juillet 2026");
        let early = Utc.with_ymd_and_hms(2026, 8, 1, 0, 15, 0).unwrap();
        assert_eq!(format_french_timestamp(&early), "1 août 2026");
    }

    #[test]
    fn test_short_reference() {
        assert_eq!(short_reference("abc12345-xxxx"), "ABC12345");
        assert_eq!(short_reference("ab"), "AB");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Hélène D'Arc", "x"), "helene-d-arc");
        assert_eq!(sanitize_filename("???", "contrat"), "contrat");
    }

    #[test]
    fn test_format_rate_and_duration() {
        assert_eq!(format_rate(0.035), "3.50%");
        assert_eq!(format_duration(48), "48 mois");
    }
}
