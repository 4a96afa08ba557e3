//! Extension support for OpenAPI documents.
//!
//! Extensions allow vendor-specific properties (x-something) to be added to any object.


use super::map::Map;

/// A map of vendor extension properties.
///
/// Keys are expected to start with `x-` and values can be any valid JSON value.
/// Deserialization keeps only `x-` prefixed keys, so the type can be flattened
/// into a parent object to pick up inline extension properties while leftover
/// non-extension keys are discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extensions {
    inner: Map<String, serde_json::Value>,
}

impl Extensions {
    /// Creates an empty extensions map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extension property.
    pub fn add(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.inner.insert(key.into(), value);
        self
    }

    /// Inserts an extension property.
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.inner.insert(key.into(), value);
    }

    /// Returns the value for the given extension key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.inner.get(key)
    }

    /// Returns `true` if no extension properties are present.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of extension properties.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterates over the extension properties.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.inner.iter()
    }
}

impl From<Map<String, serde_json::Value>> for Extensions {
    /// Wraps an existing map wholesale, without filtering keys.
    fn from(inner: Map<String, serde_json::Value>) -> Self {
        Self { inner }
    }
}

impl serde::Serialize for Extensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Extensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut inner = Map::<String, serde_json::Value>::deserialize(deserializer)?;
        inner.retain(|key, _| key.starts_with("x-"));
        Ok(Self { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_mixed_keys_keeps_only_extension_keys() {
        //* Given
        let json = serde_json::json!({
            "x-internal": true,
            "description": "not an extension",
            "x-rate-limit": 100
        });

        //* When
        let extensions: Extensions =
            serde_json::from_value(json).expect("should deserialize extensions");

        //* Then
        assert_eq!(extensions.len(), 2, "non x- keys should be discarded");
        assert_eq!(extensions.get("x-internal"), Some(&serde_json::json!(true)));
        assert_eq!(extensions.get("x-rate-limit"), Some(&serde_json::json!(100)));
        assert_eq!(extensions.get("description"), None);
    }

    #[test]
    fn from_map_with_plain_keys_keeps_all_keys() {
        //* Given
        let mut map = Map::new();
        map.insert("a".to_string(), serde_json::json!(1));
        map.insert("x-b".to_string(), serde_json::json!(2));

        //* When
        let extensions = Extensions::from(map);

        //* Then
        assert_eq!(extensions.len(), 2, "explicit construction should not filter");
        assert_eq!(extensions.get("a"), Some(&serde_json::json!(1)));
    }
}
