//! CLI-vs-API minimum version compatibility check.

use semver::Version;
use thiserror::Error;

use crate::config::Config;
use crate::error::TranslatableError;
use crate::ui::Ui;
use parlance_render::SubstitutionMap;

/// Template for the upgrade recommendation shown when the running binary
/// is older than the minimum the API requires.
pub const UPGRADE_RECOMMENDATION: &str = "API version {{.APIVersion}} requires CLI version \
{{.MinVersion}}. You are currently on version {{.BinaryVersion}}. Please upgrade your CLI.";

/// Version strings that mean "unknown" and skip the check entirely.
const UNSET_VERSIONS: [&str; 2] = ["", "N/A"];

/// A version string that could not be parsed as semantic version.
#[derive(Debug, Error)]
#[error("invalid semantic version {version:?}: {source}")]
pub struct VersionError {
    /// The offending version string.
    pub version: String,
    #[source]
    source: semver::Error,
}

impl TranslatableError for VersionError {}

fn parse(version: &str) -> Result<Version, VersionError> {
    Version::parse(version).map_err(|source| VersionError {
        version: version.to_string(),
        source,
    })
}

/// Warns on `ui`'s error stream when the binary version is older than the
/// minimum CLI version the API requires.
///
/// Unset versions (empty or `"N/A"`) skip the check. The check itself
/// never fails the calling command; only malformed version strings do.
///
/// # Errors
///
/// Returns [`VersionError`] when the binary or minimum version string is
/// not a valid semantic version.
pub fn check_minimum_version(ui: &mut Ui, config: &dyn Config) -> Result<(), VersionError> {
    let binary = config.binary_version();
    let minimum = config.min_cli_version();
    if UNSET_VERSIONS.contains(&binary.as_str()) || UNSET_VERSIONS.contains(&minimum.as_str()) {
        return Ok(());
    }

    let current = parse(&binary)?;
    let required = parse(&minimum)?;

    if current < required {
        let mut vars = SubstitutionMap::new();
        vars.insert("APIVersion".to_string(), config.api_version());
        vars.insert("MinVersion".to_string(), minimum);
        vars.insert("BinaryVersion".to_string(), binary);
        ui.display_warning(UPGRADE_RECOMMENDATION, &[vars]);
    }

    Ok(())
}
