use std::{fmt::Display, str::FromStr};

/// Parses a strictly positive integer for flags where zero has no meaning.
fn parse_positive<T>(s: &str) -> Result<T, String>
where
    T: FromStr + PartialEq + Default + Display,
    T::Err: Display,
{
    let value: T = s.trim().parse().map_err(|e| format!("invalid number '{s}': {e}"))?;
    if value == T::default() {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_positive(s)
}

pub fn parse_positive_u64(s: &str) -> Result<u64, String> {
    parse_positive(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(parse_positive_usize("5"), Ok(5));
        assert_eq!(parse_positive_u64(" 200 "), Ok(200));
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(parse_positive_usize("0").is_err());
        assert!(parse_positive_u64("-3").unwrap_err().contains("invalid number"));
        assert!(parse_positive_u64("many").is_err());
    }
}
