//! The `Ui` type: localized, styled, stream-routed display operations.
//!
//! A [`Ui`] is constructed once per process run against an immutable
//! configuration snapshot (locale + color flag), an injected
//! [`Translator`], and two byte sinks. Every display operation is a
//! synchronous write; none of them can fail from the caller's point of
//! view (inputs degrade, sink errors are swallowed).
//!
//! The rendering pipeline for template operations is always the same:
//! localize the template key, substitute placeholders from the FIRST
//! substitution map only, optionally style, then write to the routed
//! stream with a trailing newline.
//!
//! CLI processes are single-threaded; the streams are not locked here. An
//! embedding that renders from multiple threads must serialize access
//! externally or interleaved writes will corrupt line framing.
//!
//! # Example
//!
//! ```rust
//! use parlance::testing::{test_ui, FakeConfig};
//! use parlance::SubstitutionMap;
//!
//! let config = FakeConfig::default();
//! let (mut ui, out, _err) = test_ui(&config);
//!
//! let mut vars = SubstitutionMap::new();
//! vars.insert("Name".to_string(), "broker".to_string());
//! ui.display_text("Deleting {{.Name}}...", &[vars]);
//!
//! assert_eq!(out.as_string(), "Deleting broker...\n");
//! ```

use std::io::{self, Write};
use std::rc::Rc;

use chrono::{DateTime, Utc};
use parlance_render::{
    is_default_locale, substitute, substitute_with, EmbeddedCatalog, SubstitutionMap, TextStyle,
    Translator,
};

use crate::config::Config;
use crate::error::TranslatableError;

/// Localized, styled text renderer bound to an output and an error stream.
pub struct Ui {
    locale: String,
    color_enabled: bool,
    translator: Rc<dyn Translator>,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Ui {
    /// Creates a `Ui` over process stdout/stderr using the embedded catalog.
    pub fn new(config: &dyn Config) -> Self {
        Self::with_streams(
            config,
            Rc::new(EmbeddedCatalog),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    /// Creates a `Ui` over process stdout/stderr with a custom translator.
    pub fn with_translator(config: &dyn Config, translator: Rc<dyn Translator>) -> Self {
        Self::with_streams(config, translator, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Creates a `Ui` with explicit sinks. This is the constructor tests
    /// use with in-memory buffers.
    pub fn with_streams(
        config: &dyn Config,
        translator: Rc<dyn Translator>,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
    ) -> Self {
        Self {
            locale: config.locale(),
            color_enabled: config.color_enabled(),
            translator,
            out,
            err,
        }
    }

    /// The locale snapshot this `Ui` was constructed with.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether this `Ui` emits ANSI styling.
    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    fn localized_template(&self, key: &str) -> String {
        if is_default_locale(&self.locale) {
            return key.to_string();
        }
        self.translator
            .translate(key, &self.locale)
            .unwrap_or_else(|| key.to_string())
    }

    /// Localizes `key` and substitutes placeholders from the first map.
    ///
    /// Later maps never contribute values; placeholders absent from the
    /// first map render as `<no value>`. Pure: no stream is touched.
    pub fn translate_text(&self, key: &str, maps: &[SubstitutionMap]) -> String {
        let template = self.localized_template(key);
        match maps.first() {
            Some(vars) => substitute(&template, vars),
            None => substitute(&template, &SubstitutionMap::new()),
        }
    }

    fn display_styled_values(&mut self, key: &str, maps: &[SubstitutionMap], style: TextStyle) {
        let template = self.localized_template(key);
        let empty = SubstitutionMap::new();
        let vars = maps.first().unwrap_or(&empty);
        let color_enabled = self.color_enabled;
        let line = substitute_with(&template, vars, |value| style.paint(value, color_enabled));
        // Display operations are fire-and-forget; sink failures are not
        // surfaced to callers.
        let _ = writeln!(self.out, "{line}");
    }

    /// Writes the localized, substituted template plus newline to out.
    pub fn display_text(&mut self, key: &str, maps: &[SubstitutionMap]) {
        let line = self.translate_text(key, maps);
        let _ = writeln!(self.out, "{line}");
    }

    /// Like [`display_text`](Ui::display_text), with every substituted
    /// value wrapped in bold. Surrounding template text stays plain.
    pub fn display_text_with_bold(&mut self, key: &str, maps: &[SubstitutionMap]) {
        self.display_styled_values(key, maps, TextStyle::Bold);
    }

    /// Like [`display_text`](Ui::display_text), with every substituted
    /// value wrapped in the cyan-bold flavor style.
    pub fn display_text_with_flavor(&mut self, key: &str, maps: &[SubstitutionMap]) {
        self.display_styled_values(key, maps, TextStyle::Flavor);
    }

    /// Writes the localized `text` as a bold header line to out.
    pub fn display_header(&mut self, text: &str) {
        let header = self.translate_text(text, &[]);
        let line = TextStyle::Header.paint(&header, self.color_enabled);
        let _ = writeln!(self.out, "{line}");
    }

    /// Writes the localized "OK" literal in green bold to out.
    pub fn display_ok(&mut self) {
        let ok = self.translate_text("OK", &[]);
        let line = TextStyle::Ok.paint(&ok, self.color_enabled);
        let _ = writeln!(self.out, "{line}");
    }

    /// Writes a bare newline to out.
    pub fn display_newline(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Writes the localized warning plus a trailing blank line to err.
    pub fn display_warning(&mut self, key: &str, maps: &[SubstitutionMap]) {
        let line = self.translate_text(key, maps);
        let _ = writeln!(self.err, "{line}");
        let _ = writeln!(self.err);
    }

    /// Writes each localized warning to err, newline-terminated, followed
    /// by a single blank line. An empty list produces zero output.
    pub fn display_warnings(&mut self, warnings: &[String]) {
        if warnings.is_empty() {
            return;
        }
        for warning in warnings {
            let line = self.translate_text(warning, &[]);
            let _ = writeln!(self.err, "{line}");
        }
        let _ = writeln!(self.err);
    }

    /// Writes the error's message to err, then the localized "FAILED"
    /// literal in red bold to out.
    ///
    /// Errors exposing a [`translation`](TranslatableError::translation)
    /// render their localized template; all others render their literal
    /// `Display` message.
    pub fn display_error(&mut self, err: &dyn TranslatableError) {
        let message = match err.translation() {
            Some((key, vars)) => {
                let template = self.localized_template(&key);
                substitute(&template, &vars)
            }
            None => err.to_string(),
        };
        let _ = writeln!(self.err, "{message}");

        let failed = self.translate_text("FAILED", &[]);
        let line = TextStyle::Error.paint(&failed, self.color_enabled);
        let _ = writeln!(self.out, "{line}");
    }

    /// Formats a timestamp in the fixed human-readable layout.
    pub fn user_friendly_date(&self, timestamp: DateTime<Utc>) -> String {
        parlance_render::user_friendly_date(timestamp)
    }
}

impl std::fmt::Debug for Ui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ui")
            .field("locale", &self.locale)
            .field("color_enabled", &self.color_enabled)
            .finish_non_exhaustive()
    }
}
