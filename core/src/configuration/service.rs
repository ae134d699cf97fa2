use std::sync::Arc;

use tracing::warn;

use oauth_types::claim_type::ClaimName;
use oauth_types::client::{ClientID, RedirectUri};
use oauth_types::issuer::Issuer;

use crate::configuration::{ConfigurationError, OAuthProperty, PropertyStore};

/// Typed access to the OAuth properties. Every getter fails with
/// [`ConfigurationError`] when the store cannot be read or the property is
/// absent; blank values count as absent.
#[derive(Clone)]
pub struct ConfigurationService {
    store: Arc<dyn PropertyStore>,
}

impl ConfigurationService {
    pub fn new<S: PropertyStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn required(&self, property: OAuthProperty) -> Result<String, ConfigurationError> {
        match self.store.property(property)? {
            Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
            _ => {
                warn!("Required property {} is not set", property);
                Err(ConfigurationError::missing(property))
            }
        }
    }

    pub fn authorization_endpoint(&self) -> Result<String, ConfigurationError> {
        self.required(OAuthProperty::AuthorizationEndpoint)
    }

    pub fn client_id(&self) -> Result<ClientID, ConfigurationError> {
        self.required(OAuthProperty::ClientId).map(ClientID::new)
    }

    /// Must be the URL a user would type to reach this application.
    pub fn redirect_uri(&self) -> Result<RedirectUri, ConfigurationError> {
        self.required(OAuthProperty::RedirectUri)
            .map(RedirectUri::new)
    }

    pub fn issuer(&self) -> Result<Issuer, ConfigurationError> {
        self.required(OAuthProperty::Issuer).map(Issuer::new)
    }

    pub fn jwks_endpoint(&self) -> Result<String, ConfigurationError> {
        self.required(OAuthProperty::JwksEndpoint)
    }

    pub fn username_claim_type(&self) -> Result<ClaimName, ConfigurationError> {
        self.required(OAuthProperty::UsernameClaimType)
            .map(ClaimName::new)
    }
}
