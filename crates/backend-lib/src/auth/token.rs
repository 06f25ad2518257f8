// ============================
// crates/backend-lib/src/auth/token.rs
// ============================
/** Session token issuing, parsing and refresh.

Tokens are derived deterministically from the username and carry no
signature, expiry, or server-side record. Validity is purely structural:
whoever presents a string with the issuance prefix holds a valid token.
WARNING: this is a prototype contract, not suitable for production use. */
use crate::error::AppError;

/// Prefix every issued token starts with
pub const TOKEN_PREFIX: &str = "token_for_";

/// Suffix appended on every refresh
pub const REFRESH_SUFFIX: &str = "_refreshed";

/// Stateless token mint and parser.
pub struct TokenAuthority;

impl TokenAuthority {
    /// Issue a token for the given username.
    pub fn issue(username: &str) -> String {
        format!("{TOKEN_PREFIX}{username}")
    }

    /// Extract the username a token was issued for.
    ///
    /// Succeeds iff the token carries the issuance prefix. No lookup against
    /// the credential store happens here.
    pub fn parse(token: &str) -> Option<&str> {
        token.strip_prefix(TOKEN_PREFIX)
    }

    /// Refresh a token by appending the refresh suffix.
    ///
    /// Refreshed tokens keep the issuance prefix, so they stay parseable.
    /// Suffixes accumulate across repeated refreshes.
    pub fn refresh(token: &str) -> Result<String, AppError> {
        if token.starts_with(TOKEN_PREFIX) {
            Ok(format!("{token}{REFRESH_SUFFIX}"))
        } else {
            Err(AppError::InvalidToken)
        }
    }
}
