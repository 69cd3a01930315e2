//! Glossary entity

use serde::Serialize;
use std::collections::HashMap;

/// Immutable mapping from abbreviation to expansion phrase.
///
/// Keys are stored upper-cased and trimmed. The glossary offers no mutating
/// API once built; share it by reference (or `Arc`) for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Glossary {
    entries: HashMap<String, String>,
}

impl Glossary {
    /// Create an empty glossary
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the expansion for an abbreviation.
    ///
    /// The key is normalized the same way stored keys are, so lookups are
    /// case-insensitive.
    pub fn lookup(&self, abbreviation: &str) -> Option<&str> {
        self.entries
            .get(&abbreviation.to_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries sorted by abbreviation
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K, V> FromIterator<(K, V)> for Glossary
where
    K: AsRef<str>,
    V: Into<String>,
{
    /// Later pairs overwrite earlier ones with the same normalized key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_uppercase(), v.into()))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let glossary: Glossary = [("CPU", "central processing unit")].into_iter().collect();
        assert_eq!(glossary.lookup("cpu"), Some("central processing unit"));
        assert_eq!(glossary.lookup("Cpu"), Some("central processing unit"));
        assert_eq!(glossary.lookup("GPU"), None);
    }

    #[test]
    fn test_from_iter_normalizes_keys() {
        let glossary: Glossary = [(" asap ", "as soon as possible")].into_iter().collect();
        assert_eq!(glossary.sorted_entries(), vec![("ASAP", "as soon as possible")]);
    }

    #[test]
    fn test_from_iter_last_wins() {
        let glossary: Glossary = [("AI", "first"), ("ai", "second")].into_iter().collect();
        assert_eq!(glossary.len(), 1);
        assert_eq!(glossary.lookup("AI"), Some("second"));
    }

    #[test]
    fn test_empty() {
        let glossary = Glossary::empty();
        assert!(glossary.is_empty());
        assert_eq!(glossary.lookup("ANY"), None);
    }
}
