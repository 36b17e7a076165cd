//! # Parlance - Capability-Injected CLI Output
//!
//! Parlance is the output layer for command-line tools that need localized,
//! styled, testable terminal text. It provides:
//!
//! - [`Ui`]: display operations that localize a template key, substitute
//!   `{{.Name}}` placeholders, apply fixed ANSI styles, and route to the
//!   right stream
//! - [`Config`]: the read-only configuration capability (locale, color
//!   flag, version strings) supplied by the host
//! - [`TranslatableError`]: the seam that lets errors render through the
//!   translation catalog instead of their literal message
//! - [`command`]: command objects wired entirely through injected
//!   capabilities, with [`testing`] doubles for each seam
//!
//! The rendering core (substitution engine, styles, catalog, dates) lives
//! in `parlance-render` and is re-exported here.
//!
//! ## Quick Start
//!
//! ```rust
//! use parlance::testing::{test_ui, FakeConfig};
//! use parlance::SubstitutionMap;
//!
//! let config = FakeConfig::default();
//! let (mut ui, out, err) = test_ui(&config);
//!
//! ui.display_header("Feature flags");
//! let mut vars = SubstitutionMap::new();
//! vars.insert("Count".to_string(), "3".to_string());
//! ui.display_text_with_bold("{{.Count}} flags enabled", &[vars]);
//! ui.display_warnings(&["deprecated flag in use".to_string()]);
//!
//! assert_eq!(
//!     out.as_string(),
//!     "\x1b[1mFeature flags\x1b[0m\n\x1b[1m3\x1b[0m flags enabled\n"
//! );
//! assert_eq!(err.as_string(), "deprecated flag in use\n\n");
//! ```
//!
//! ## Degradation, not failure
//!
//! Display operations never return errors: a catalog miss falls back to
//! the key text, a missing placeholder renders as `<no value>`, and with
//! color disabled the output contains no escape bytes at all.

pub mod command;
pub mod config;
pub mod error;
pub mod testing;
pub mod ui;
pub mod version;

pub use command::{AuthActor, AuthCommand, AuthError, CommandError, Credentials, GrantType};
pub use config::Config;
pub use error::TranslatableError;
pub use ui::Ui;
pub use version::{check_minimum_version, VersionError, UPGRADE_RECOMMENDATION};

// Rendering core re-exports.
pub use parlance_render::{
    is_default_locale, substitute, substitute_with, user_friendly_date, Catalog, CatalogError,
    EmbeddedCatalog, SubstitutionMap, TextStyle, Translator, DEFAULT_LOCALE, NO_VALUE,
};
