//! Recording test doubles for the crate's capability seams.
//!
//! Every collaborator a [`Ui`] or command depends on has a programmable
//! double here: configure returns up front, execute, then assert on
//! recorded calls and captured bytes. The doubles are hand-rolled in the
//! record/playback style of generated fakes: a call counter, per-call
//! argument capture, and settable return values.
//!
//! This module ships in the library (not behind `cfg(test)`) so that
//! downstream crates can drive a `Ui` in their own tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use parlance_render::{EmbeddedCatalog, Translator};

use crate::command::{AuthActor, AuthError, GrantType};
use crate::config::Config;
use crate::ui::Ui;

/// An in-memory sink that stays readable after being handed to a [`Ui`].
///
/// Cloning shares the underlying buffer, so tests keep one clone and give
/// the other to the `Ui`.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    /// Creates an empty shared buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the bytes written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }

    /// The bytes written so far, lossily decoded as UTF-8.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Programmable [`Config`] double: set fields, pass by reference.
#[derive(Debug, Clone)]
pub struct FakeConfig {
    pub locale: String,
    pub color_enabled: bool,
    pub binary_name: String,
    pub binary_version: String,
    pub api_version: String,
    pub min_cli_version: String,
    pub target: String,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            locale: String::new(),
            color_enabled: true,
            binary_name: "parlance".to_string(),
            binary_version: String::new(),
            api_version: String::new(),
            min_cli_version: String::new(),
            target: String::new(),
        }
    }
}

impl Config for FakeConfig {
    fn locale(&self) -> String {
        self.locale.clone()
    }

    fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    fn binary_name(&self) -> String {
        self.binary_name.clone()
    }

    fn binary_version(&self) -> String {
        self.binary_version.clone()
    }

    fn api_version(&self) -> String {
        self.api_version.clone()
    }

    fn min_cli_version(&self) -> String {
        self.min_cli_version.clone()
    }

    fn target(&self) -> String {
        self.target.clone()
    }
}

/// Programmable [`Translator`] double backed by explicit entries.
#[derive(Debug, Default)]
pub struct FakeTranslator {
    entries: HashMap<(String, String), String>,
}

impl FakeTranslator {
    /// Creates an empty translator (every lookup misses).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template for `(key, locale)`.
    pub fn add(&mut self, locale: &str, key: &str, template: &str) {
        self.entries
            .insert((locale.to_string(), key.to_string()), template.to_string());
    }
}

impl Translator for FakeTranslator {
    fn translate(&self, key: &str, locale: &str) -> Option<String> {
        self.entries
            .get(&(locale.to_string(), key.to_string()))
            .cloned()
    }
}

/// Arguments captured from one [`AuthActor::authenticate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticateCall {
    pub id: String,
    pub secret: String,
    pub grant_type: GrantType,
}

/// Recording [`AuthActor`] double.
///
/// Interior mutability keeps the recording surface behind `&self`, matching
/// the trait; tests hold the fake directly and inspect it after execution.
#[derive(Debug)]
pub struct FakeAuthActor {
    calls: RefCell<Vec<AuthenticateCall>>,
    result: RefCell<Result<(), AuthError>>,
}

impl Default for FakeAuthActor {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            result: RefCell::new(Ok(())),
        }
    }
}

impl FakeAuthActor {
    /// Creates a fake whose `authenticate` succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result every subsequent `authenticate` call returns.
    pub fn set_authenticate_returns(&self, result: Result<(), AuthError>) {
        *self.result.borrow_mut() = result;
    }

    /// Number of `authenticate` calls recorded so far.
    pub fn authenticate_call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// The arguments captured for call `index` (zero-based).
    ///
    /// # Panics
    ///
    /// Panics when fewer than `index + 1` calls were recorded.
    pub fn authenticate_args_for_call(&self, index: usize) -> AuthenticateCall {
        self.calls.borrow()[index].clone()
    }
}

impl AuthActor for FakeAuthActor {
    fn authenticate(&self, id: &str, secret: &str, grant_type: GrantType) -> Result<(), AuthError> {
        self.calls.borrow_mut().push(AuthenticateCall {
            id: id.to_string(),
            secret: secret.to_string(),
            grant_type,
        });
        self.result.borrow().clone()
    }
}

/// A [`Ui`] over shared in-memory buffers, using the embedded catalog.
///
/// Returns the `Ui` plus readable handles to its out and err streams.
pub fn test_ui(config: &dyn Config) -> (Ui, SharedBuffer, SharedBuffer) {
    test_ui_with_translator(config, Rc::new(EmbeddedCatalog))
}

/// Like [`test_ui`] with an explicit translator double.
pub fn test_ui_with_translator(
    config: &dyn Config,
    translator: Rc<dyn Translator>,
) -> (Ui, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let ui = Ui::with_streams(
        config,
        translator,
        Box::new(out.clone()),
        Box::new(err.clone()),
    );
    (ui, out, err)
}
