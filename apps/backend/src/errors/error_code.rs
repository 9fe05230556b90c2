//! Error codes for the pub golf API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that
//! appears in HTTP responses.

use core::fmt;

/// Centralized error codes for the pub golf API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,

    // Request Validation
    /// Player name fails the naming rule
    InvalidPlayerName,
    /// Hole number outside 1..=9
    InvalidHole,
    /// Score outside the configured bound
    InvalidScore,
    /// Malformed request (unparseable query, wrong types)
    BadRequest,

    // Resource Not Found
    /// General not found error
    NotFound,

    // Conflicts
    /// A score card already exists for this name
    PlayerExists,
    /// Unique constraint violation
    UniqueViolation,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidHole => "INVALID_HOLE",
            Self::InvalidScore => "INVALID_SCORE",
            Self::BadRequest => "BAD_REQUEST",

            Self::NotFound => "NOT_FOUND",

            Self::PlayerExists => "PLAYER_EXISTS",
            Self::UniqueViolation => "UNIQUE_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
