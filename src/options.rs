//! Construction options for a [`FormatRegistry`](crate::FormatRegistry).
//!
//! Serde-friendly so an application can embed it in its own configuration:
//!
//! ```json
//! { "auto_discover": true, "exclude": ["yaml"] }
//! ```

use serde::{Deserialize, Serialize};

/// How a new registry is populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// Run discovery when the registry is created.
    pub auto_discover: bool,

    /// Formats discovery should leave out.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl RegistryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether discovery runs at construction.
    pub fn auto_discover(mut self, enabled: bool) -> Self {
        self.auto_discover = enabled;
        self
    }

    /// Add a format to the exclusion list.
    pub fn exclude(mut self, identifier: impl Into<String>) -> Self {
        self.exclude.push(identifier.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RegistryOptions::new();
        assert!(!options.auto_discover);
        assert!(options.exclude.is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: RegistryOptions = serde_json::from_str(r#"{"exclude": ["yaml"]}"#).unwrap();
        assert_eq!(options, RegistryOptions::new().exclude("yaml"));
    }

    #[test]
    fn test_serialize_skips_empty_exclude() {
        let text = serde_json::to_string(&RegistryOptions::new().auto_discover(true)).unwrap();
        assert_eq!(text, r#"{"auto_discover":true}"#);
    }
}
