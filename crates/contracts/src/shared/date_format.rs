//! Spanish date rendering for article timestamps.
//!
//! The backend sends `created_at` as ISO-8601, with or without offset and
//! fractional seconds, sometimes with a space instead of `T`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

const MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const MONTHS_LONG: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Parse a backend timestamp into a naive local date-time
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Short form used in the article list, e.g. `"15 mar 2024, 14:02"`.
/// Unparseable input is returned unchanged.
pub fn format_short(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{} {} {}, {:02}:{:02}",
            dt.day(),
            MONTHS_SHORT[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => raw.to_string(),
    }
}

/// Long form used in the review header, e.g. `"15 de marzo de 2024, 14:02"`.
/// Unparseable input renders as `"Fecha inválida"`.
pub fn format_long(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{} de {} de {}, {:02}:{:02}",
            dt.day(),
            MONTHS_LONG[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => "Fecha inválida".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert!(parse_timestamp("2024-03-15T14:02:26.123456").is_some());
        assert!(parse_timestamp("2024-03-15 14:02:26").is_some());
        assert!(parse_timestamp("2024-03-15T14:02:26Z").is_some());
        assert!(parse_timestamp("2024-03-15").is_some());
        assert!(parse_timestamp("ayer").is_none());
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short("2024-03-15T14:02:26.123"), "15 mar 2024, 14:02");
        assert_eq!(format_short("2024-12-01"), "1 dic 2024, 00:00");
        assert_eq!(format_short("invalid"), "invalid");
    }

    #[test]
    fn test_format_long() {
        assert_eq!(
            format_long("2024-09-05T08:30:00+02:00"),
            "5 de septiembre de 2024, 08:30"
        );
        assert_eq!(format_long(""), "Fecha inválida");
    }
}
