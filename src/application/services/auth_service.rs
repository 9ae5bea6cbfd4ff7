//! Admin capability check.

use serde_json::json;

use crate::error::AppError;

/// Guards the admin surface with a single configured bearer token.
///
/// Catalog mutations are an operator capability, not a user feature, so a
/// static token from configuration is the whole story; there is no token
/// store or lifecycle behind it.
pub struct AuthService {
    admin_token: String,
}

impl AuthService {
    /// Creates the capability check around the configured token.
    pub fn new(admin_token: String) -> Self {
        Self { admin_token }
    }

    /// Validates a presented bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        if token != self.admin_token {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid admin token" }),
            ));
        }

        Ok(())
    }
}
