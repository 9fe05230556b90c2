use std::time::{Duration, SystemTime};

use backend::auth::jwt::mint_access_token;
use backend::state::security_config::SecurityConfig;

use super::state::test_security;

/// `Authorization` header value for a freshly minted token.
pub fn bearer(sub: &str, name: Option<&str>) -> String {
    bearer_with(sub, name, SystemTime::now(), &test_security())
}

/// A token that expired well past the default leeway.
pub fn expired_bearer(sub: &str) -> String {
    let issued = SystemTime::now() - Duration::from_secs(60 * 60);
    bearer_with(sub, None, issued, &test_security())
}

/// A token signed with a secret the app does not know.
pub fn foreign_bearer(sub: &str) -> String {
    bearer_with(
        sub,
        None,
        SystemTime::now(),
        &SecurityConfig::new(b"someone-else".to_vec()),
    )
}

fn bearer_with(
    sub: &str,
    name: Option<&str>,
    now: SystemTime,
    security: &SecurityConfig,
) -> String {
    let token = mint_access_token(sub, name, now, security).expect("token should mint");
    format!("Bearer {token}")
}
