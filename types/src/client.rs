use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::url_encodable::UrlEncodable;

/// Identifier issued to this relying party by the identity provider.
///
/// Opaque: it may contain characters that need percent-encoding.
#[derive(Serialize, Deserialize, Clone, Debug, Hash, Eq, PartialEq)]
pub struct ClientID(String);

impl ClientID {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }
}

impl From<ClientID> for String {
    fn from(id: ClientID) -> Self {
        id.0
    }
}

impl Display for ClientID {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl UrlEncodable for ClientID {
    fn params(self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("client_id".to_owned(), self.0);
        map
    }
}

/// Where the identity provider sends the browser back after login.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct RedirectUri(String);

impl RedirectUri {
    pub fn new<T: Into<String>>(uri: T) -> Self {
        Self(uri.into())
    }
}

impl Display for RedirectUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl UrlEncodable for RedirectUri {
    fn params(self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("redirect_uri".to_owned(), self.0);
        map
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{ClientID, RedirectUri};
    use crate::url_encodable::UrlEncodable;

    #[test]
    fn test_client_id_is_percent_encoded() {
        assert_eq!("client_id=abc%20123", ClientID::new("abc 123").to_query_string())
    }

    #[test]
    fn test_redirect_uri_is_percent_encoded() {
        assert_eq!(
            "redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback%3Fx%3D1",
            RedirectUri::new("https://app.example.com/callback?x=1").to_query_string()
        )
    }
}
