/*
[INPUT]:  User-entered access token text
[OUTPUT]: Validated bearer token ready for the Authorization header
[POS]:    Auth layer - bearer token value type
[UPDATE]: When changing token validation or header format
*/

use std::fmt;

/// Non-empty, trimmed bearer token.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Trim the input; blank input yields `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(<{} chars>)", self.0.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_token() {
        let token = AccessToken::parse("  abc.def  ").expect("token");
        assert_eq!(token.as_str(), "abc.def");
        assert_eq!(token.authorization_value(), "Bearer abc.def");
    }

    #[test]
    fn test_blank_token_is_rejected() {
        assert!(AccessToken::parse("").is_none());
        assert!(AccessToken::parse(" \t\n").is_none());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let token = AccessToken::parse("secret-value").expect("token");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("secret"));
    }
}
