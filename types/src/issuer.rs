use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Expected `iss` claim of received ID tokens.
///
/// Kept as configured; comparison against the token is exact.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Issuer(String);

impl Issuer {
    pub fn new<T: Into<String>>(identifier: T) -> Self {
        Issuer(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Issuer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Issuer> for String {
    fn from(iss: Issuer) -> Self {
        iss.0
    }
}
