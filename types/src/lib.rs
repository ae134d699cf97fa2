pub mod claim_type;
pub mod client;
pub mod issuer;
pub mod nonce;
pub mod response_type;
pub mod scopes;
pub mod url_encodable;
mod utils;
