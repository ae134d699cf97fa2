use indexmap::IndexMap;

/// A value that contributes one or more parameters to a URL query string.
///
/// Parameters are kept in insertion order, so the rendered query is stable.
pub trait UrlEncodable {
    fn params(self) -> IndexMap<String, String>;

    fn to_query_string(self) -> String
    where
        Self: Sized,
    {
        encode_pairs(self.params())
    }
}

impl UrlEncodable for IndexMap<String, String> {
    fn params(self) -> IndexMap<String, String> {
        self
    }
}

impl<T1, T2> UrlEncodable for (T1, T2)
where
    T1: UrlEncodable,
    T2: UrlEncodable,
{
    fn params(self) -> IndexMap<String, String> {
        let mut first = self.0.params();
        first.extend(self.1.params());
        first
    }
}

impl<T1, T2, T3> UrlEncodable for (T1, T2, T3)
where
    T1: UrlEncodable,
    T2: UrlEncodable,
    T3: UrlEncodable,
{
    fn params(self) -> IndexMap<String, String> {
        let mut first = self.0.params();
        first.extend(self.1.params());
        first.extend(self.2.params());
        first
    }
}

/// Percent-encodes every key and value (UTF-8, space as `%20`) and joins
/// the pairs with `&`.
pub fn encode_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key.as_ref()),
                urlencoding::encode(value.as_ref())
            )
        })
        .collect::<Vec<String>>()
        .join("&")
}
