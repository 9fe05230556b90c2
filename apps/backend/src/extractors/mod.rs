pub mod current_user;
pub mod jwt;
pub mod validated_query;

pub use current_user::CurrentUser;
pub use jwt::JwtClaims;
pub use validated_query::ValidatedQuery;
