use getset::Getters;
use indexmap::IndexMap;
use tracing::debug;

use oauth_types::client::{ClientID, RedirectUri};
use oauth_types::nonce::Nonce;
use oauth_types::response_type;
use oauth_types::response_type::{ResponseType, ResponseTypeValue};
use oauth_types::scopes;
use oauth_types::scopes::Scopes;
use oauth_types::url_encodable::UrlEncodable;

use crate::nonce::{EntropyError, NonceGenerator};

/// HTTP parameter carrying the identity token once the identity provider
/// redirects back.
pub const ID_TOKEN_PARAMETER: &str = "id_token";

/// Query parameters of an implicit-flow authorisation request.
///
/// Rendered as `scope`, `response_type`, `client_id`, `redirect_uri`,
/// `nonce`, always in that order.
#[derive(Debug, Clone)]
pub struct AuthorisationParameters {
    pub scopes: Scopes,
    pub response_type: ResponseType,
    pub client_id: ClientID,
    pub redirect_uri: RedirectUri,
    pub nonce: Nonce,
}

impl UrlEncodable for AuthorisationParameters {
    fn params(self) -> IndexMap<String, String> {
        let mut parameters = (self.scopes, self.response_type, self.client_id).params();
        parameters.extend((self.redirect_uri, self.nonce).params());
        parameters
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Getters)]
pub struct AuthorisationRequest {
    #[getset(get = "pub")]
    authorization_uri: String,
    #[getset(get = "pub")]
    nonce: Nonce,
}

impl AuthorisationRequest {
    pub fn response_field_name(&self) -> &'static str {
        ID_TOKEN_PARAMETER
    }
}

/// Builds the URI that sends a browser to the identity provider's
/// authorization endpoint.
#[derive(Clone, Default)]
pub struct AuthorisationRequestBuilder {
    nonce_generator: NonceGenerator,
}

impl AuthorisationRequestBuilder {
    pub fn new(nonce_generator: NonceGenerator) -> Self {
        Self { nonce_generator }
    }

    /// The endpoint is used verbatim. A malformed endpoint yields a malformed
    /// URI rather than an error.
    pub fn build(
        &self,
        authorization_endpoint: &str,
        client_id: ClientID,
        redirect_uri: RedirectUri,
    ) -> Result<AuthorisationRequest, EntropyError> {
        let nonce = self.nonce_generator.generate()?;
        debug!(
            "Building authorisation request for client {} at {}",
            client_id, authorization_endpoint
        );

        let parameters = AuthorisationParameters {
            scopes: scopes!("openid"),
            response_type: response_type!(ResponseTypeValue::IdToken),
            client_id,
            redirect_uri,
            nonce: nonce.clone(),
        };
        let authorization_uri = format!(
            "{}?{}",
            authorization_endpoint,
            parameters.to_query_string()
        );

        Ok(AuthorisationRequest {
            authorization_uri,
            nonce,
        })
    }
}
