//! Pluralization of English resource names
//!
//! Used to derive collection path segments from singular entity names.

/// Utility for converting singular nouns to their plural form
pub struct Pluralizer;

impl Pluralizer {
    /// Convert a singular noun to its plural form
    ///
    /// # Examples
    ///
    /// ```
    /// use hateoas::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::pluralize("customer"), "customers");
    /// assert_eq!(Pluralizer::pluralize("company"), "companies");
    /// assert_eq!(Pluralizer::pluralize("address"), "addresses");
    /// ```
    pub fn pluralize(singular: &str) -> String {
        if singular.is_empty() {
            return String::new();
        }

        if let Some(stem) = singular.strip_suffix('y') {
            let vowel_before = stem
                .chars()
                .last()
                .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
            if !stem.is_empty() && !vowel_before {
                return format!("{stem}ies");
            }
        }

        if ["s", "sh", "ch", "x", "z"]
            .iter()
            .any(|suffix| singular.ends_with(suffix))
        {
            return format!("{singular}es");
        }

        if let Some(stem) = singular.strip_suffix("fe") {
            if !stem.is_empty() {
                return format!("{stem}ves");
            }
        }

        if let Some(stem) = singular.strip_suffix('f') {
            if !stem.is_empty() {
                return format!("{stem}ves");
            }
        }

        format!("{singular}s")
    }
}
