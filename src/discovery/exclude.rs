use crate::registry::FormatId;

/// Formats to leave out of discovery.
///
/// Built from a single identifier or any list of identifiers:
///
/// ```ignore
/// registry.discover("yaml");
/// registry.discover(["yaml", "toml"]);
/// registry.discover(Exclude::none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclude(Vec<FormatId>);

impl Exclude {
    /// Exclude nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.0.iter().any(|id| id == identifier)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatId> {
        self.0.iter()
    }
}

impl From<&str> for Exclude {
    fn from(identifier: &str) -> Self {
        Self(vec![FormatId::from(identifier)])
    }
}

impl From<String> for Exclude {
    fn from(identifier: String) -> Self {
        Self(vec![FormatId::from(identifier)])
    }
}

impl From<&[&str]> for Exclude {
    fn from(identifiers: &[&str]) -> Self {
        identifiers.iter().copied().collect()
    }
}

impl From<&[String]> for Exclude {
    fn from(identifiers: &[String]) -> Self {
        identifiers.iter().map(String::as_str).collect()
    }
}

impl<const N: usize> From<[&str; N]> for Exclude {
    fn from(identifiers: [&str; N]) -> Self {
        identifiers.into_iter().collect()
    }
}

impl<const N: usize> From<&[&str; N]> for Exclude {
    fn from(identifiers: &[&str; N]) -> Self {
        identifiers.iter().copied().collect()
    }
}

impl From<Vec<&str>> for Exclude {
    fn from(identifiers: Vec<&str>) -> Self {
        identifiers.into_iter().collect()
    }
}

impl From<Vec<String>> for Exclude {
    fn from(identifiers: Vec<String>) -> Self {
        identifiers.into_iter().collect()
    }
}

impl<S: Into<FormatId>> FromIterator<S> for Exclude {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_identifier_normalizes_to_one_element() {
        let exclude = Exclude::from("yaml");
        assert_eq!(exclude.iter().count(), 1);
        assert!(exclude.contains("yaml"));
        assert!(!exclude.contains("json"));
    }

    #[test]
    fn test_sequence_forms() {
        let from_array = Exclude::from(["yaml", "toml"]);
        let from_vec = Exclude::from(vec!["yaml".to_string(), "toml".to_string()]);
        let from_slice = Exclude::from(&["yaml", "toml"][..]);
        assert_eq!(from_array, from_vec);
        assert_eq!(from_array, from_slice);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let exclude = Exclude::from("YAML");
        assert!(!exclude.contains("yaml"));
    }

    #[test]
    fn test_none_is_empty() {
        assert!(Exclude::none().is_empty());
    }
}
