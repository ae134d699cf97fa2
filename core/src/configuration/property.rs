use std::fmt::{Display, Formatter};

/// The properties read by the OAuth extension. None has a default.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OAuthProperty {
    AuthorizationEndpoint,
    ClientId,
    RedirectUri,
    Issuer,
    JwksEndpoint,
    UsernameClaimType,
}

impl OAuthProperty {
    pub const ALL: [OAuthProperty; 6] = [
        OAuthProperty::AuthorizationEndpoint,
        OAuthProperty::ClientId,
        OAuthProperty::RedirectUri,
        OAuthProperty::Issuer,
        OAuthProperty::JwksEndpoint,
        OAuthProperty::UsernameClaimType,
    ];

    /// Name as written in a properties file.
    pub fn name(&self) -> &'static str {
        match self {
            OAuthProperty::AuthorizationEndpoint => "oauth-authorization-endpoint",
            OAuthProperty::ClientId => "oauth-client-id",
            OAuthProperty::RedirectUri => "oauth-redirect-uri",
            OAuthProperty::Issuer => "oauth-issuer",
            OAuthProperty::JwksEndpoint => "oauth-jwks-endpoint",
            OAuthProperty::UsernameClaimType => "oauth-username-claim-type",
        }
    }

    /// Name as an environment variable, e.g. `OAUTH_CLIENT_ID`.
    pub fn env_name(&self) -> String {
        self.name().to_uppercase().replace('-', "_")
    }
}

impl Display for OAuthProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
