use chrono::NaiveDate;

/// Parses a user-supplied entry date.
/// Accepts ISO dates ("2026-01-15"), Brazilian day-first dates
/// ("15/01/2026", "15-01-2026"), and falls back to dateparser for anything
/// else it can make sense of.
pub fn parse_entry_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }

    dateparser::parse(input).ok().map(|dt| dt.date_naive())
}

/// Formats a monetary value the way the original UI did ("R$ 123.45").
pub fn format_brl(value: f64) -> String {
    format!("R$ {:.2}", value)
}

/// Formats a distance in kilometers with one decimal place.
pub fn format_km(value: f64) -> String {
    format!("{:.1} km", value)
}

/// Formats a fuel efficiency value with two decimal places.
pub fn format_km_per_liter(value: f64) -> String {
    format!("{:.2} km/L", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_date_iso() {
        assert_eq!(
            parse_entry_date("2026-01-15"),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
    }

    #[test]
    fn test_parse_entry_date_brazilian_slash() {
        assert_eq!(
            parse_entry_date("15/01/2026"),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
    }

    #[test]
    fn test_parse_entry_date_brazilian_dash() {
        assert_eq!(
            parse_entry_date("15-01-2026"),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
    }

    #[test]
    fn test_parse_entry_date_trims_whitespace() {
        assert_eq!(
            parse_entry_date("  2026-01-15  "),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
    }

    #[test]
    fn test_parse_entry_date_empty() {
        assert_eq!(parse_entry_date(""), None);
        assert_eq!(parse_entry_date("   "), None);
    }

    #[test]
    fn test_parse_entry_date_garbage() {
        assert_eq!(parse_entry_date("not-a-date"), None);
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(220.0), "R$ 220.00");
        assert_eq!(format_brl(5.5), "R$ 5.50");
        assert_eq!(format_brl(0.0), "R$ 0.00");
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(400.0), "400.0 km");
        assert_eq!(format_km(123.45), "123.5 km");
    }

    #[test]
    fn test_format_km_per_liter() {
        assert_eq!(format_km_per_liter(40.0), "40.00 km/L");
        assert_eq!(format_km_per_liter(12.345), "12.35 km/L");
    }
}
