//! Error display capability.

use parlance_render::SubstitutionMap;

/// Errors displayable through [`Ui::display_error`](crate::Ui::display_error).
///
/// The default [`translation`](TranslatableError::translation) returns
/// `None`, which makes the error display by its literal `Display` message.
/// Error types whose message lives in the translation catalog override it
/// to return the catalog key and substitutions:
///
/// ```rust
/// use parlance::{SubstitutionMap, TranslatableError};
/// use thiserror::Error;
///
/// #[derive(Debug, Error)]
/// #[error("app not found")]
/// struct AppNotFound {
///     name: String,
/// }
///
/// impl TranslatableError for AppNotFound {
///     fn translation(&self) -> Option<(String, SubstitutionMap)> {
///         let mut vars = SubstitutionMap::new();
///         vars.insert("AppName".to_string(), self.name.clone());
///         Some(("App {{.AppName}} does not exist.".to_string(), vars))
///     }
/// }
/// ```
pub trait TranslatableError: std::error::Error {
    /// Catalog key and substitutions for the localized rendering of this
    /// error, or `None` to display the literal message.
    fn translation(&self) -> Option<(String, SubstitutionMap)> {
        None
    }
}
