use serde_json::{Map as JsonMap, Value as JsonValue};

/// Query parameters to send to the Hunter API.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Query {
    params: JsonMap<String, JsonValue>,
}

impl Query {
    /// Creates a new query, with the given API key.
    pub(crate) fn new(api_key: &str) -> Self {
        let mut params = JsonMap::new();
        params.insert("api_key".to_string(), api_key.into());
        Self { params }
    }

    /// Adds the given key-value pair.
    pub(crate) fn add<T: Into<JsonValue>>(mut self, key: &str, value: T) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// In the case that `value` is some, adds the key-value pair.
    pub(crate) fn add_if_some<T: Into<JsonValue>>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.params.insert(key.to_string(), value.into());
        }
        self
    }

    /// Looks up the value stored for `key`.
    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&JsonValue> {
        self.params.get(key)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.params.len()
    }

    /// Renders the parameters as URL query pairs.
    ///
    /// Strings are written as-is, everything else in its JSON form.
    pub(crate) fn pairs(&self) -> Vec<(&str, String)> {
        self.params
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.as_str(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_always_present() {
        let query = Query::new("secret");
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("api_key"), Some(&JsonValue::from("secret")));
    }

    #[test]
    fn add_if_some_skips_none() {
        let query = Query::new("k")
            .add("domain", "example.com")
            .add_if_some("limit", None::<u32>)
            .add_if_some("offset", Some(10));

        assert_eq!(query.len(), 3);
        assert!(query.get("limit").is_none());
        assert_eq!(query.get("offset"), Some(&JsonValue::from(10)));
    }

    #[test]
    fn pairs_render_without_quotes() {
        let query = Query::new("k").add("query", "fintech in Germany").add("limit", 2);

        let mut pairs = query.pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("api_key", "k".to_string()),
                ("limit", "2".to_string()),
                ("query", "fintech in Germany".to_string()),
            ]
        );
    }
}
