use gradecase_core::format::OutputFormat;
use gradecase_core::test_case::{is_valid_difficulty, MAX_DIFFICULTY, MIN_DIFFICULTY};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a difficulty label (1-5)
pub fn parse_difficulty(s: &str) -> std::result::Result<u8, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("difficulty must be a number between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got '{s}'"))?;

    if !is_valid_difficulty(value) {
        return Err(format!(
            "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {value}"
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty_bounds() {
        assert_eq!(parse_difficulty("1"), Ok(1));
        assert_eq!(parse_difficulty("5"), Ok(5));
        assert!(parse_difficulty("0").is_err());
        assert!(parse_difficulty("6").is_err());
        assert!(parse_difficulty("hard").is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json"), Ok(OutputFormat::Json));
        assert!(parse_format("yaml").unwrap_err().contains("unknown format"));
    }
}
