use thiserror::Error;

use crate::configuration::OAuthProperty;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Missing required property {}", .name)]
    MissingProperty { name: &'static str },
    #[error("Unable to read configuration from {}", .origin)]
    Unreadable {
        origin: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ConfigurationError {
    pub fn missing(property: OAuthProperty) -> Self {
        ConfigurationError::MissingProperty {
            name: property.name(),
        }
    }

    pub fn unreadable<O: Into<String>, E: Into<anyhow::Error>>(origin: O, source: E) -> Self {
        ConfigurationError::Unreadable {
            origin: origin.into(),
            source: source.into(),
        }
    }
}
