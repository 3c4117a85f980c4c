use serde::{Deserialize, Serialize};

/// An opaque account activation token, taken verbatim from the confirmation URL.
///
/// The only client-side check is that the token is present and non-empty;
/// everything else is up to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActivationToken {
    token: String,
}

impl ActivationToken {
    /// Returns `None` when the route carried no token or an empty one.
    pub fn from_route(token: Option<&str>) -> Option<Self> {
        match token {
            Some(token) if !token.is_empty() => Some(Self {
                token: token.to_owned(),
            }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for ActivationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_token_is_kept_verbatim() {
        let token = ActivationToken::from_route(Some(" abc.DEF-123 ")).unwrap();
        assert_eq!(token.as_str(), " abc.DEF-123 ");
    }

    #[test]
    fn missing_or_empty_token_is_rejected() {
        assert_eq!(ActivationToken::from_route(None), None);
        assert_eq!(ActivationToken::from_route(Some("")), None);
    }
}
