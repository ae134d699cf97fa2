use serde::Deserialize;
use serde::Serialize;
use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::url_encodable::UrlEncodable;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub struct Nonce(String);

impl From<Nonce> for String {
    fn from(nonce: Nonce) -> Self {
        nonce.0
    }
}

impl Nonce {
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Nonce {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl UrlEncodable for Nonce {
    fn params(self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("nonce".to_owned(), self.0);
        map
    }
}

#[cfg(test)]
mod tests {
    use crate::nonce::Nonce;
    use crate::url_encodable::UrlEncodable;

    #[test]
    fn test_nonce_is_encoded_under_nonce_param() {
        let params = Nonce::new("abc").params();

        assert_eq!(Some(&"abc".to_owned()), params.get("nonce"));
        assert_eq!(1, params.len());
    }

    #[test]
    fn test_can_serialize_nonce() {
        assert_eq!(
            r#""xyz""#,
            serde_json::to_string(&Nonce::new("xyz")).unwrap()
        )
    }
}
