use std::fmt;
use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Serializer;

use crate::scopes;
use crate::serialize_to_str;
use crate::url_encodable::UrlEncodable;

/// Space separated list of requested scopes, as carried by the `scope`
/// request parameter.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Scopes(Vec<String>);

impl Scopes {
    pub fn new<I: Into<Scopes>>(values: I) -> Self {
        values.into()
    }
}

impl Display for Scopes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl<T: Into<String>> From<Vec<T>> for Scopes {
    fn from(values: Vec<T>) -> Self {
        Scopes(values.into_iter().map(Into::into).collect())
    }
}

impl Default for Scopes {
    fn default() -> Self {
        scopes!["openid"]
    }
}

serialize_to_str!(Scopes);

impl UrlEncodable for Scopes {
    fn params(self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("scope".to_owned(), self.to_string());
        map
    }
}
