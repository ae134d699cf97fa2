use derive_new::new;
use tracing::{error, info};

use crate::authorisation_request::AuthorisationRequestBuilder;
use crate::configuration::ConfigurationService;
use crate::error::{build_report, LoginError};
use crate::form::OAuthTokenField;

/// Produces the "log in with ..." field offered on the login form.
#[derive(new, Clone)]
pub struct LoginService {
    configuration: ConfigurationService,
    request_builder: AuthorisationRequestBuilder,
}

impl LoginService {
    /// Builds a new field, with a new nonce, for each rendering of the login
    /// form. When configuration is incomplete no field is produced, so a
    /// broken link is never offered.
    pub fn token_field(&self) -> Result<OAuthTokenField, LoginError> {
        let result = self.build_field();
        if let Err(err) = &result {
            error!("{}", build_report(err));
        }
        result
    }

    fn build_field(&self) -> Result<OAuthTokenField, LoginError> {
        let authorization_endpoint = self.configuration.authorization_endpoint()?;
        let client_id = self.configuration.client_id()?;
        let redirect_uri = self.configuration.redirect_uri()?;

        let request =
            self.request_builder
                .build(&authorization_endpoint, client_id, redirect_uri)?;
        info!("Offering OAuth login via {}", authorization_endpoint);
        Ok(OAuthTokenField::from(request))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::authorisation_request::AuthorisationRequestBuilder;
    use crate::configuration::{ConfigurationService, MapPropertyStore};
    use crate::error::LoginError;
    use crate::nonce::{BrokenSource, NonceGenerator};
    use crate::services::login::LoginService;

    fn configured() -> ConfigurationService {
        ConfigurationService::new(
            MapPropertyStore::new()
                .with("oauth-authorization-endpoint", "https://idp.example.com/authorize")
                .with("oauth-client-id", "guacamole")
                .with("oauth-redirect-uri", "https://guac.example.com/"),
        )
    }

    #[test]
    fn test_offers_token_field() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let service = LoginService::new(configured(), AuthorisationRequestBuilder::default());

        let field = service.token_field().unwrap();

        assert_eq!("id_token", field.name());
        assert!(field.authorization_uri().starts_with(
            "https://idp.example.com/authorize?scope=openid&response_type=id_token\
             &client_id=guacamole&redirect_uri=https%3A%2F%2Fguac.example.com%2F&nonce="
        ));
    }

    #[test]
    fn test_each_field_has_its_own_nonce() {
        let service = LoginService::new(configured(), AuthorisationRequestBuilder::default());

        let first = service.token_field().unwrap();
        let second = service.token_field().unwrap();

        assert_ne!(first.authorization_uri(), second.authorization_uri());
    }

    #[test]
    fn test_missing_configuration_offers_nothing() {
        let configuration = ConfigurationService::new(
            MapPropertyStore::new().with("oauth-client-id", "guacamole"),
        );
        let service = LoginService::new(configuration, AuthorisationRequestBuilder::default());

        let err = service.token_field().unwrap_err();

        assert!(err.is_configuration());
    }

    #[test]
    fn test_broken_random_source_is_not_a_configuration_error() {
        let builder =
            AuthorisationRequestBuilder::new(NonceGenerator::new(Arc::new(BrokenSource)));
        let service = LoginService::new(configured(), builder);

        let err = service.token_field().unwrap_err();

        assert!(matches!(err, LoginError::Environment(_)));
    }
}
