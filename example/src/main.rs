use std::env;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use oauth_core::authorisation_request::AuthorisationRequestBuilder;
use oauth_core::configuration::{
    ConfigurationService, EnvironmentPropertyStore, PropertiesFile,
};
use oauth_core::error::build_report;
use oauth_core::services::login::LoginService;
use oauth_core::validation::TokenValidationSettings;

const DEFAULT_PROPERTIES: &str = "oauth.env";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PROPERTIES.to_owned());
    let configuration = if Path::new(&path).exists() {
        info!("Reading OAuth properties from {}", path);
        ConfigurationService::new(PropertiesFile::new(&path))
    } else {
        warn!("{} not found, reading OAuth properties from the environment", path);
        ConfigurationService::new(EnvironmentPropertyStore)
    };

    match TokenValidationSettings::load(&configuration) {
        Ok(settings) => info!(
            "ID tokens will be checked against issuer {} using keys from {}",
            settings.issuer(),
            settings.jwks_endpoint()
        ),
        Err(err) => warn!("{}", build_report(&err)),
    }

    let service = LoginService::new(configuration, AuthorisationRequestBuilder::default());
    let field = service
        .token_field()
        .context("OAuth login cannot be offered")?;

    println!("{}", serde_json::to_string_pretty(&field)?);
    Ok(())
}
