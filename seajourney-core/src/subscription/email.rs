use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// Same shape the browser enforces for `<input type="email">`.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r##"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"##,
    )
    .expect("email shape regex should compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email address is empty")]
    Empty,
    #[error("{0:?} is not a valid email address")]
    Malformed(String),
}

/// A trimmed email address with a plausible shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !EMAIL_SHAPE.is_match(trimmed) {
            return Err(ValidationError::Malformed(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part after the `@`, safe to log.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(SubscriberEmail::parse(""), Err(ValidationError::Empty));
        assert_eq!(SubscriberEmail::parse("   \t"), Err(ValidationError::Empty));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let email = SubscriberEmail::parse("  traveller@example.com ").unwrap();
        assert_eq!(email.as_str(), "traveller@example.com");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn browser_accepts_dotless_domains() {
        assert!(SubscriberEmail::parse("root@localhost").is_ok());
        assert!(SubscriberEmail::parse("first.last+sea@mail.example.co.th").is_ok());
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for raw in [
            "no-at-sign.example.com",
            "@example.com",
            "traveller@",
            "two@@example.com",
            "traveller@-example.com",
            "spaced out@example.com",
        ] {
            assert!(
                matches!(SubscriberEmail::parse(raw), Err(ValidationError::Malformed(_))),
                "{raw} should be rejected"
            );
        }
    }
}
