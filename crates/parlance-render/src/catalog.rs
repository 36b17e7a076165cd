//! Translation catalog and the [`Translator`] seam.
//!
//! The catalog maps `(locale, template key)` to a localized template. Keys
//! are the canonical English template strings, so a catalog miss is not an
//! error: the key itself is the English rendering. The default locale never
//! consults the catalog at all.
//!
//! Locale tags are matched case-insensitively with `-`/`_` treated alike,
//! so `fr-FR`, `fr_fr`, and `FR-fr` address the same resource.
//!
//! Resources are JSON objects of key to template, embedded at compile time
//! via [`EmbeddedCatalog`] or loaded at runtime with
//! [`Catalog::insert_json_resource`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

/// The locale used when none is configured. Keys pass through unchanged.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Returns true when `locale` resolves to the default (English) locale.
///
/// Only the language part is examined, so `en`, `en-US`, and `en_GB` are
/// all default. An empty tag counts as default too.
pub fn is_default_locale(locale: &str) -> bool {
    let lang = locale.split(['-', '_']).next().unwrap_or("");
    lang.is_empty() || lang.eq_ignore_ascii_case("en")
}

fn normalize_locale(locale: &str) -> String {
    locale.replace('_', "-").to_ascii_lowercase()
}

/// Errors raised while loading or verifying catalog resources.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A locale resource was not a JSON object of string to string.
    #[error("malformed catalog resource for locale {locale}: {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// A configured locale lacks entries for keys the application emits.
    #[error("locale {locale} is missing {count} catalog entries (first missing: {first:?})")]
    MissingEntries {
        locale: String,
        count: usize,
        first: String,
    },
}

/// Capability for template lookup by key and locale.
///
/// The renderer depends on this seam rather than a concrete catalog, so
/// tests substitute programmable doubles and embedders can plug in their
/// own storage.
pub trait Translator {
    /// Returns the template for `key` under `locale`, or `None` on a miss.
    fn translate(&self, key: &str, locale: &str) -> Option<String>;
}

/// In-memory translation catalog keyed by normalized locale tag.
#[derive(Debug, Default)]
pub struct Catalog {
    locales: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or extends) a locale with the given entries.
    pub fn add_locale(&mut self, locale: &str, entries: HashMap<String, String>) {
        self.locales
            .entry(normalize_locale(locale))
            .or_default()
            .extend(entries);
    }

    /// Parses a JSON resource (object of key to template) into a locale.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the resource is not a JSON
    /// object of strings.
    pub fn insert_json_resource(&mut self, locale: &str, json: &str) -> Result<(), CatalogError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                locale: locale.to_string(),
                source,
            })?;
        self.add_locale(locale, entries);
        Ok(())
    }

    /// Looks up `key` under `locale`. Returns `None` on any miss.
    pub fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        self.locales
            .get(&normalize_locale(locale))?
            .get(key)
            .map(String::as_str)
    }

    /// Checks that `locale` has an entry for every key in `keys`.
    ///
    /// Render-time misses degrade to identity; embedders that want missing
    /// entries surfaced at startup instead call this with the full set of
    /// keys their application emits.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingEntries`] listing the first missing
    /// key and the total count.
    pub fn verify_locale<'a, I>(&self, locale: &str, keys: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let missing: Vec<&str> = keys
            .into_iter()
            .filter(|key| self.lookup(key, locale).is_none())
            .collect();
        match missing.first() {
            None => Ok(()),
            Some(first) => Err(CatalogError::MissingEntries {
                locale: locale.to_string(),
                count: missing.len(),
                first: (*first).to_string(),
            }),
        }
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, locale: &str) -> Option<String> {
        self.lookup(key, locale).map(str::to_string)
    }
}

static EMBEDDED: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::new();
    catalog
        .insert_json_resource("fr-FR", include_str!("../i18n/fr-FR.json"))
        .expect("embedded fr-FR catalog resource is valid JSON");
    catalog
});

/// The catalog bundled with the crate, parsed once on first use.
///
/// Unit struct so it can be constructed freely wherever a [`Translator`]
/// is injected.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    /// Startup-time validation of a locale against the bundled resources.
    ///
    /// # Errors
    ///
    /// See [`Catalog::verify_locale`].
    pub fn verify_locale<'a, I>(locale: &str, keys: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        EMBEDDED.verify_locale(locale, keys)
    }
}

impl Translator for EmbeddedCatalog {
    fn translate(&self, key: &str, locale: &str) -> Option<String> {
        EMBEDDED.translate(key, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_detection() {
        assert!(is_default_locale(""));
        assert!(is_default_locale("en"));
        assert!(is_default_locale("en-US"));
        assert!(is_default_locale("en_GB"));
        assert!(!is_default_locale("fr-FR"));
        assert!(!is_default_locale("de"));
    }

    #[test]
    fn lookup_normalizes_locale_tags() {
        let mut catalog = Catalog::new();
        catalog.add_locale(
            "fr-FR",
            [("key".to_string(), "clé".to_string())].into_iter().collect(),
        );

        assert_eq!(catalog.lookup("key", "fr-FR"), Some("clé"));
        assert_eq!(catalog.lookup("key", "fr_fr"), Some("clé"));
        assert_eq!(catalog.lookup("key", "FR-Fr"), Some("clé"));
        assert_eq!(catalog.lookup("key", "de-DE"), None);
        assert_eq!(catalog.lookup("other", "fr-FR"), None);
    }

    #[test]
    fn malformed_resource_is_a_parse_error() {
        let mut catalog = Catalog::new();
        let err = catalog
            .insert_json_resource("fr-FR", "[1, 2]")
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn verify_locale_reports_missing_entries() {
        let mut catalog = Catalog::new();
        catalog.add_locale(
            "fr-FR",
            [("present".to_string(), "présent".to_string())]
                .into_iter()
                .collect(),
        );

        assert!(catalog.verify_locale("fr-FR", ["present"]).is_ok());

        let err = catalog
            .verify_locale("fr-FR", ["present", "absent", "also-absent"])
            .unwrap_err();
        match err {
            CatalogError::MissingEntries { count, first, .. } => {
                assert_eq!(count, 2);
                assert_eq!(first, "absent");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn embedded_catalog_serves_french() {
        let catalog = EmbeddedCatalog;
        assert_eq!(
            catalog.translate("FEATURE FLAGS", "fr-FR").as_deref(),
            Some("INDICATEURS DE FONCTION")
        );
        assert_eq!(catalog.translate("FEATURE FLAGS", "de-DE"), None);
    }

    #[test]
    fn embedded_catalog_covers_status_literals() {
        EmbeddedCatalog::verify_locale("fr-FR", ["OK", "FAILED"]).unwrap();
    }
}
