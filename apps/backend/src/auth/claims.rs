//! Claims carried by identity-provider tokens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    /// Stable subject identifier
    pub sub: String,
    /// Human-readable name, when the provider supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl IdentityClaims {
    /// The `name` claim, or `sub` when the name is absent or blank.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.sub,
        }
    }
}
