use std::error::Error;

use thiserror::Error;

use crate::configuration::ConfigurationError;
use crate::nonce::EntropyError;

/// Reasons the login option cannot be offered.
#[derive(Debug, Error)]
pub enum LoginError {
    /// Setup problem, meant for administrators rather than users.
    #[error("OAuth authentication is not configured")]
    Configuration(#[from] ConfigurationError),
    /// The runtime is broken; retrying will not help.
    #[error("OAuth authentication is unavailable")]
    Environment(#[from] EntropyError),
}

impl LoginError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, LoginError::Configuration(_))
    }
}

pub fn build_report<E>(err: &E) -> String
where
    E: std::error::Error,
    E: Send + Sync,
{
    let mut count = 0;
    let mut current_err: &dyn Error = err;
    let mut report = format!("[ERROR] - {}", current_err);
    if current_err.source().is_some() {
        report.push_str("\nCaused by:");
    }
    while let Some(cause) = current_err.source() {
        count += 1;
        report.push_str(&format!("\n    {}: {}", count, cause));
        current_err = cause;
    }
    report
}

#[cfg(test)]
mod tests {
    use crate::configuration::{ConfigurationError, OAuthProperty};
    use crate::error::{build_report, LoginError};

    #[test]
    fn test_report_includes_causes() {
        let err = LoginError::from(ConfigurationError::missing(OAuthProperty::ClientId));

        assert_eq!(
            "[ERROR] - OAuth authentication is not configured\nCaused by:\n    1: Missing required property oauth-client-id",
            build_report(&err)
        );
        assert!(err.is_configuration());
    }
}
