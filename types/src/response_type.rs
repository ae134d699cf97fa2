use std::fmt;
use std::fmt::{Display, Formatter};

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

use crate::serialize_to_str;
use crate::url_encodable::UrlEncodable;

#[macro_export]
macro_rules! response_type {
    ($($rt:expr),*) =>{
        {
            let mut temp_vec = vec![];
            $(
                temp_vec.push($rt);
            )*
            $crate::response_type::ResponseType::new(temp_vec)
        }
    }
}

/// Only the implicit flow is requested, so `id_token` is the sole value.
#[derive(Serialize, Debug, PartialEq, Eq, Hash, Copy, Clone, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTypeValue {
    IdToken,
}

impl Display for ResponseTypeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = match self {
            ResponseTypeValue::IdToken => "id_token",
        };
        write!(f, "{}", value)
    }
}

/// The `response_type` request parameter.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ResponseType(IndexSet<ResponseTypeValue>);

impl ResponseType {
    pub fn new(mut values: Vec<ResponseTypeValue>) -> Self {
        values.sort();
        ResponseType(values.into_iter().collect())
    }
}

impl Display for ResponseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = self
            .0
            .iter()
            .map(|rt| rt.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", x)
    }
}

serialize_to_str!(ResponseType);

impl UrlEncodable for ResponseType {
    fn params(self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("response_type".to_owned(), self.to_string());
        map
    }
}

#[cfg(test)]
mod tests {
    use crate::response_type::ResponseTypeValue;
    use crate::url_encodable::UrlEncodable;

    #[test]
    fn test_duplicate_values_are_collapsed() {
        let rt = response_type!(ResponseTypeValue::IdToken, ResponseTypeValue::IdToken);

        assert_eq!("id_token", rt.to_string())
    }

    #[test]
    fn test_can_serialize_response_type() {
        assert_eq!(
            r#""id_token""#,
            serde_json::to_string(&response_type!(ResponseTypeValue::IdToken)).unwrap()
        )
    }

    #[test]
    fn test_response_type_param() {
        let params = response_type!(ResponseTypeValue::IdToken).params();

        assert_eq!(Some(&"id_token".to_owned()), params.get("response_type"))
    }
}
