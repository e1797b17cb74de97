use thiserror::Error;

/// Error returned when text cannot be used as a numeric input value.
#[derive(Debug, Error, PartialEq)]
pub enum ParseNumberError {
    #[error("invalid number '{input}'")]
    Invalid { input: String },

    #[error("number '{input}' is not finite")]
    NotFinite { input: String },
}

/// Parses numeric field text. Surrounding whitespace is ignored; `inf` and
/// `NaN` are rejected.
pub fn parse_number(s: &str) -> Result<f64, ParseNumberError> {
    let trimmed = s.trim();
    let value: f64 = trimmed.parse().map_err(|_| ParseNumberError::Invalid {
        input: s.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseNumberError::NotFinite {
            input: s.to_string(),
        });
    }
    Ok(value)
}

/// Parses numeric field text, returning `None` (and logging at debug) when
/// the text is not a usable number.
pub fn parse_optional_number(s: &str) -> Option<f64> {
    parse_number(s).map_or_else(
        |e| {
            tracing::debug!(input = %s, "ignoring numeric input: {}", e);
            None
        },
        Some,
    )
}

/// Parses a toggle value such as `on`, `off`, `true`, `0`.
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_trims_whitespace() {
        assert_eq!(parse_number("  12.5 "), Ok(12.5));
    }

    #[test]
    fn parse_number_accepts_negative_and_exponent() {
        assert_eq!(parse_number("-3"), Ok(-3.0));
        assert_eq!(parse_number("1e3"), Ok(1000.0));
    }

    #[test]
    fn parse_number_rejects_text() {
        assert!(matches!(
            parse_number("12a"),
            Err(ParseNumberError::Invalid { .. })
        ));
        assert!(parse_number("").is_err());
    }

    #[test]
    fn parse_number_rejects_decimal_comma() {
        assert!(parse_number("1,5").is_err());
    }

    #[test]
    fn parse_number_rejects_non_finite_values() {
        assert!(matches!(
            parse_number("inf"),
            Err(ParseNumberError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_number("NaN"),
            Err(ParseNumberError::NotFinite { .. })
        ));
    }

    #[test]
    fn parse_optional_number_maps_errors_to_none() {
        assert_eq!(parse_optional_number("7"), Some(7.0));
        assert_eq!(parse_optional_number("seven"), None);
    }

    #[test]
    fn parse_flag_understands_common_spellings() {
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
