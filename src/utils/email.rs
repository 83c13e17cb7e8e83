use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Lower-case and trim an address before it is used as a lookup/join key.
/// Every read and write of a player email goes through this.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::ValidationError("Email is required".to_string()));
    }
    if !email_re().is_match(email) {
        return Err(AppError::ValidationError(format!(
            "Invalid email address: {email}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("A@B.com"), "a@b.com");
        assert_eq!(normalize_email(" a@b.com "), "a@b.com");
        assert_eq!(normalize_email("Jane.Doe@Example.COM"), "jane.doe@example.com");
    }

    #[test]
    fn test_normalized_variants_collide() {
        // "A@B.com" and "a@b.com " must resolve to the same player key.
        assert_eq!(normalize_email("A@B.com"), normalize_email("a@b.com "));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@x.com").is_ok());
        assert!(validate_email("first.last@sub.domain.org").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("two@@x.com").is_err());
        assert!(validate_email("spaces in@x.com").is_err());
    }
}
