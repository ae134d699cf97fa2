use getset::Getters;

use oauth_types::claim_type::ClaimName;
use oauth_types::issuer::Issuer;

use crate::configuration::{ConfigurationError, ConfigurationService};

/// Values the token validation component checks a returned ID token
/// against. Loaded together so a partially configured extension is caught
/// before any token arrives.
#[derive(Debug, Clone, Eq, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct TokenValidationSettings {
    issuer: Issuer,
    jwks_endpoint: String,
    username_claim: ClaimName,
}

impl TokenValidationSettings {
    pub fn load(configuration: &ConfigurationService) -> Result<Self, ConfigurationError> {
        Ok(Self {
            issuer: configuration.issuer()?,
            jwks_endpoint: configuration.jwks_endpoint()?,
            username_claim: configuration.username_claim_type()?,
        })
    }
}
