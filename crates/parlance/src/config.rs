//! The configuration capability supplied by the host application.

/// Read-only configuration surface consumed by [`Ui`](crate::Ui)
/// construction and by command objects.
///
/// The `Ui` snapshots `locale()` and `color_enabled()` once at
/// construction; they are not re-polled during rendering. The remaining
/// methods serve command orchestration (version checks, status lines).
///
/// Hosts implement this over their own settings store;
/// [`testing::FakeConfig`](crate::testing::FakeConfig) is the programmable
/// double.
pub trait Config {
    /// BCP 47 locale tag for output. Empty means the default locale.
    fn locale(&self) -> String;

    /// Whether ANSI styling is emitted.
    fn color_enabled(&self) -> bool;

    /// Name of the running binary, used in user-facing tips.
    fn binary_name(&self) -> String;

    /// Version of the running binary.
    fn binary_version(&self) -> String;

    /// Version reported by the targeted API.
    fn api_version(&self) -> String;

    /// Minimum CLI version the targeted API requires.
    fn min_cli_version(&self) -> String;

    /// The configured API target (endpoint description).
    fn target(&self) -> String;
}
