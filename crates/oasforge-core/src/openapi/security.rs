//! Security requirement entity.

use super::map::Map;

/// Lists the security schemes required to use an operation or an API.
///
/// Each entry maps a security scheme name, declared elsewhere in the document,
/// to the scopes required of it. An empty scope list means the scheme is
/// required without specific scopes.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SecurityRequirement {
    requirements: Map<String, Vec<String>>,
}

impl SecurityRequirement {
    /// Creates a new security requirement for the given scheme name and scopes.
    pub fn new(
        name: impl Into<String>,
        scopes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::default().add(name, scopes)
    }

    /// Adds a scheme name with its scopes to the requirement.
    pub fn add(
        mut self,
        name: impl Into<String>,
        scopes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.requirements
            .insert(name.into(), scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the scopes required for the given scheme name.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.requirements.get(name).map(Vec::as_slice)
    }

    /// Returns `true` if no schemes are required.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Returns the number of required schemes.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Iterates over the scheme names and their scopes.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.requirements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_requirement_with_scopes_is_transparent() {
        //* Given
        let requirement = SecurityRequirement::new("petstore_auth", ["read:pets", "write:pets"]);

        //* When
        let json = serde_json::to_value(&requirement).expect("should serialize requirement");

        //* Then
        assert_eq!(
            json,
            serde_json::json!({ "petstore_auth": ["read:pets", "write:pets"] }),
            "requirement should serialize as a bare scheme-to-scopes map"
        );
    }

    #[test]
    fn deserialize_requirement_with_empty_scopes_succeeds() {
        //* Given
        let json = serde_json::json!({ "api_key": [] });

        //* When
        let requirement: SecurityRequirement =
            serde_json::from_value(json).expect("should deserialize requirement");

        //* Then
        assert_eq!(requirement.len(), 1);
        assert_eq!(requirement.get("api_key"), Some(&[] as &[String]));
    }
}
