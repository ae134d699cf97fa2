pub mod authorisation_request;
pub mod configuration;
pub mod error;
pub mod form;
pub mod nonce;
pub mod services;
pub mod validation;
