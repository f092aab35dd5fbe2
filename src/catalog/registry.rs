//! Language catalog: single source of truth for code → name/script lookups.
//!
//! The catalog is built once from the static table and never mutated. It can
//! be constructed explicitly with `LanguageCatalog::new()` and passed around,
//! or shared through the lazily initialised `LanguageCatalog::global()`.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::catalog::table::LANGUAGE_TABLE;
use crate::error::LookupError;

/// Metadata for one classifier language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Classifier code (e.g. "en", "hi-Latn")
    pub code: &'static str,

    /// English name shown in chart labels (e.g. "English", "Hindi")
    pub display_name: &'static str,

    /// Writing system (e.g. "Latin", "Devanagari")
    pub script_name: &'static str,
}

/// Immutable code → entry index.
#[derive(Debug)]
pub struct LanguageCatalog {
    entries: HashMap<&'static str, LanguageEntry>,
}

/// Global catalog instance (initialized lazily)
static CATALOG: OnceLock<LanguageCatalog> = OnceLock::new();

impl LanguageCatalog {
    /// Build a catalog from the static language table.
    pub fn new() -> Self {
        Self::from_rows(LANGUAGE_TABLE)
    }

    fn from_rows(rows: &[(&'static str, &'static str, &'static str)]) -> Self {
        let entries = rows
            .iter()
            .map(|&(code, display_name, script_name)| {
                (
                    code,
                    LanguageEntry {
                        code,
                        display_name,
                        script_name,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    /// Get the process-wide catalog.
    ///
    /// Initialised on first call; every later call returns the same instance.
    pub fn global() -> &'static LanguageCatalog {
        CATALOG.get_or_init(LanguageCatalog::new)
    }

    /// Look up a language code.
    ///
    /// # Returns
    /// * `Ok(&LanguageEntry)` if the code is in the table
    /// * `Err(LookupError)` otherwise; no default entry is ever substituted
    pub fn resolve(&self, code: &str) -> Result<&LanguageEntry, LookupError> {
        self.entries
            .get(code)
            .ok_or_else(|| LookupError::new(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by code.
    pub fn list_all(&self) -> Vec<&LanguageEntry> {
        let mut all: Vec<_> = self.entries.values().collect();
        all.sort_by_key(|entry| entry.code);
        all
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_singleton() {
        let catalog1 = LanguageCatalog::global();
        let catalog2 = LanguageCatalog::global();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(catalog1, catalog2));
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        let catalog = LanguageCatalog::new();
        assert_eq!(catalog.len(), LANGUAGE_TABLE.len());
        assert_eq!(catalog.len(), 113);
    }

    #[test]
    fn test_resolve_english() {
        let catalog = LanguageCatalog::new();
        let entry = catalog.resolve("en").expect("en is in the table");
        assert_eq!(entry.code, "en");
        assert_eq!(entry.display_name, "English");
        assert_eq!(entry.script_name, "Latin");
    }

    #[test]
    fn test_resolve_script_variant() {
        let catalog = LanguageCatalog::new();

        let hindi = catalog.resolve("hi").unwrap();
        let hindi_latin = catalog.resolve("hi-Latn").unwrap();
        assert_eq!(hindi.display_name, hindi_latin.display_name);
        assert_eq!(hindi.script_name, "Devanagari");
        assert_eq!(hindi_latin.script_name, "Latin");
    }

    #[test]
    fn test_resolve_russian_latin_script() {
        let catalog = LanguageCatalog::new();
        let entry = catalog.resolve("ru-Latn").unwrap();
        assert_eq!(entry.display_name, "Russian");
        assert_eq!(entry.script_name, "Latin");
    }

    #[test]
    fn test_resolve_legacy_codes() {
        let catalog = LanguageCatalog::new();
        assert_eq!(catalog.resolve("iw").unwrap().display_name, "Hebrew");
        assert_eq!(catalog.resolve("fil").unwrap().display_name, "Filipino");
        assert_eq!(catalog.resolve("und").unwrap().display_name, "Undefined");
    }

    #[test]
    fn test_resolve_unknown_code_fails() {
        let err = LanguageCatalog::new().resolve("xx-Unknown").unwrap_err();
        assert_eq!(err, LookupError::new("xx-Unknown"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let catalog = LanguageCatalog::new();
        assert!(catalog.resolve("EN").is_err());
        assert!(catalog.resolve("hi-latn").is_err());
        assert!(catalog.resolve("").is_err());
    }

    #[test]
    fn test_list_all_sorted() {
        let catalog = LanguageCatalog::new();
        let all = catalog.list_all();

        assert_eq!(all.len(), catalog.len());
        assert_eq!(all.first().unwrap().code, "af");
        assert!(all.windows(2).all(|pair| pair[0].code < pair[1].code));
    }

    #[test]
    fn test_every_entry_has_names() {
        for entry in LanguageCatalog::new().list_all() {
            assert!(!entry.display_name.is_empty(), "{} has no name", entry.code);
            assert!(!entry.script_name.is_empty(), "{} has no script", entry.code);
        }
    }

    #[test]
    fn test_concurrent_reads() {
        let catalog = LanguageCatalog::global();
        let handles: Vec<_> = ["en", "fr", "ja", "zh-Latn"]
            .into_iter()
            .map(|code| std::thread::spawn(move || catalog.resolve(code).map(|e| e.code)))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    }
}
