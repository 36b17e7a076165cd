//! Capability-injected command objects.
//!
//! Commands here are thin orchestration: they hold parsed arguments and an
//! `execute` that talks only to injected capabilities (the [`Ui`], the
//! [`Config`], and a domain actor trait). Tests substitute recording fakes
//! for every capability; see [`crate::testing`].
//!
//! The actor trait is the network boundary. Nothing in this crate performs
//! protocol work, stores credentials, or retries.

use thiserror::Error;

use crate::config::Config;
use crate::error::TranslatableError;
use crate::ui::Ui;
use crate::version::{check_minimum_version, VersionError};
use parlance_render::SubstitutionMap;

/// Credential grant variant requested from the authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    /// Resource-owner password grant (interactive user credentials).
    Password,
    /// Client-credentials grant (service identity).
    ClientCredentials,
}

/// Failures reported by an [`AuthActor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The authenticator rejected the supplied credentials.
    #[error("{message}")]
    BadCredentials {
        /// Server-supplied rejection message.
        message: String,
    },
    /// Any other failure reported by the authenticator.
    #[error("{message}")]
    Unexpected {
        /// Literal failure description.
        message: String,
    },
}

impl TranslatableError for AuthError {}

/// The authentication capability a host injects into [`AuthCommand`].
///
/// Implementations exchange credentials for a session with whatever remote
/// service the host talks to.
pub trait AuthActor {
    /// Exchanges `id`/`secret` for a session under the given grant type.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the exchange fails.
    fn authenticate(&self, id: &str, secret: &str, grant_type: GrantType) -> Result<(), AuthError>;
}

/// Identity/secret pair supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username, or client ID under the client-credentials grant.
    pub id: String,
    /// Password, or client secret under the client-credentials grant.
    pub secret: String,
}

/// Errors surfaced by command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The authenticator rejected or failed the credential exchange.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// A version string in configuration could not be parsed.
    #[error(transparent)]
    Version(#[from] VersionError),
}

impl TranslatableError for CommandError {}

/// Exchanges command-line credentials for a session via an injected
/// [`AuthActor`], narrating progress through the [`Ui`].
#[derive(Debug, Clone)]
pub struct AuthCommand {
    /// Credentials to exchange.
    pub credentials: Credentials,
    /// Request the client-credentials grant instead of the password grant.
    pub client_credentials: bool,
}

impl AuthCommand {
    /// Runs the command: version check, status lines, credential exchange.
    ///
    /// Actor failures propagate unchanged so the host can map them to exit
    /// codes or display them via
    /// [`Ui::display_error`](crate::Ui::display_error).
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] on malformed configured versions or on any
    /// authenticator failure.
    pub fn execute(
        &self,
        ui: &mut Ui,
        config: &dyn Config,
        actor: &dyn AuthActor,
    ) -> Result<(), CommandError> {
        check_minimum_version(ui, config)?;

        let mut vars = SubstitutionMap::new();
        vars.insert("Target".to_string(), config.target());
        ui.display_text_with_flavor("API endpoint: {{.Target}}", &[vars]);

        ui.display_text("Authenticating...", &[]);

        let grant_type = if self.client_credentials {
            GrantType::ClientCredentials
        } else {
            GrantType::Password
        };
        actor.authenticate(&self.credentials.id, &self.credentials.secret, grant_type)?;

        ui.display_ok();
        ui.display_newline();

        let mut vars = SubstitutionMap::new();
        vars.insert("BinaryName".to_string(), config.binary_name());
        ui.display_text(
            "Use '{{.BinaryName}} target' to view or set your target",
            &[vars],
        );

        Ok(())
    }
}
