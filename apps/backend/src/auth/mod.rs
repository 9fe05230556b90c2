pub mod claims;
pub mod jwt;

pub use claims::IdentityClaims;
pub use jwt::{decode_claims, mint_access_token, verify_access_token};
