use crate::error::{Error, Result};
use rust_decimal::Decimal;

/// Letters, digits and spaces only. Used for product and category names.
pub fn plain_name(field: &str, value: &str) -> Result<()> {
    if !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ')
    {
        Ok(())
    } else {
        Err(Error::BadRequest(format!(
            "{} must not contain special characters",
            field
        )))
    }
}

/// Letters, digits, spaces and light punctuation. Used for descriptions.
pub fn plain_text(field: &str, value: &str) -> Result<()> {
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '.' | '!' | '?' | '-'))
    {
        Ok(())
    } else {
        Err(Error::BadRequest(format!(
            "{} must not contain special characters",
            field
        )))
    }
}

pub fn positive_price(value: Decimal) -> Result<()> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(Error::BadRequest(
            "price must be greater than zero".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_accepts_alphanumerics_and_spaces() {
        assert!(plain_name("name", "Espresso Machine 3000").is_ok());
    }

    #[test]
    fn plain_name_rejects_special_characters_and_empty_input() {
        assert!(plain_name("name", "coffee;DROP TABLE").is_err());
        assert!(plain_name("name", "").is_err());
    }

    #[test]
    fn plain_text_allows_basic_punctuation() {
        assert!(plain_text("description", "Brews fast. Really fast!").is_ok());
        assert!(plain_text("description", "no <script> here").is_err());
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        assert!(positive_price(Decimal::new(1999, 2)).is_ok());
        assert!(positive_price(Decimal::ZERO).is_err());
        assert!(positive_price(Decimal::new(-100, 2)).is_err());
    }
}
