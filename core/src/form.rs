use serde::Serialize;

use crate::authorisation_request::{AuthorisationRequest, ID_TOKEN_PARAMETER};

/// Field type understood by the login form renderer.
pub const FIELD_TYPE: &str = "GUAC_OAUTH_TOKEN";

/// Login form field that links to the identity provider. The browser comes
/// back with the token in the URI fragment; the rendering layer moves it into
/// the `id_token` parameter.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct OAuthTokenField {
    name: &'static str,
    #[serde(rename = "type")]
    field_type: &'static str,
    #[serde(rename = "authorizationURI")]
    authorization_uri: String,
}

impl OAuthTokenField {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn field_type(&self) -> &str {
        self.field_type
    }

    pub fn authorization_uri(&self) -> &str {
        &self.authorization_uri
    }
}

impl From<AuthorisationRequest> for OAuthTokenField {
    fn from(request: AuthorisationRequest) -> Self {
        Self {
            name: ID_TOKEN_PARAMETER,
            field_type: FIELD_TYPE,
            authorization_uri: request.authorization_uri().to_owned(),
        }
    }
}
