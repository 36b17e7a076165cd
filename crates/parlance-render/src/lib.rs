//! # Parlance Render - Localized, Styled Text Rendering
//!
//! `parlance-render` is the rendering foundation for the `parlance` CLI
//! output layer. It turns a template key plus substitution data into final
//! output text, handling three concerns:
//!
//! - Localization: template keys double as English text and as lookup keys
//!   into a [`Translator`] catalog ([`catalog`])
//! - Substitution: `{{.Name}}` placeholders resolved against a
//!   [`SubstitutionMap`] ([`template`])
//! - Styling: fixed ANSI SGR pairs applied per [`TextStyle`] ([`style`])
//!
//! Every stage degrades rather than fails: catalog misses fall back to the
//! key text, missing placeholders render as `<no value>`, and disabled
//! color means genuinely escape-free bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use parlance_render::template::{substitute_with, SubstitutionMap};
//! use parlance_render::TextStyle;
//!
//! let mut vars = SubstitutionMap::new();
//! vars.insert("AppName".to_string(), "broker".to_string());
//!
//! let line = substitute_with(
//!     "App {{.AppName}} does not exist.",
//!     &vars,
//!     |value| TextStyle::Bold.paint(value, true),
//! );
//! assert_eq!(line, "App \x1b[1mbroker\x1b[0m does not exist.");
//! ```

pub mod catalog;
pub mod date;
pub mod style;
pub mod template;

pub use catalog::{
    is_default_locale, Catalog, CatalogError, EmbeddedCatalog, Translator, DEFAULT_LOCALE,
};
pub use date::user_friendly_date;
pub use style::TextStyle;
pub use template::{substitute, substitute_with, SubstitutionMap, NO_VALUE};
