//! Command implementations for the `client-env` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

use std::path::PathBuf;

/// Validation — `client-env check`.
pub mod check;

/// Field listing — `client-env describe`.
pub mod describe;

/// Configuration diagnostics — `client-env doctor`.
///
/// Checks the config directory, base and profile files, `.env` files,
/// and whether the active profile validates.
pub mod doctor;

/// Scaffolding — `client-env init`.
///
/// Writes `environment.yaml` and `environment.prod.yaml` with placeholder
/// values to be replaced by the integrating developer.
pub mod init;

/// Login link — `client-env login-link`.
pub mod login_link;

/// Build artifacts — `client-env render`.
pub mod render;

/// Resolved configuration — `client-env show`.
pub mod show;

/// Shared profile-file templates.
pub mod templates;

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Target {
    /// Directory holding `environment.yaml` and its profile overrides.
    pub dir: PathBuf,
    /// Requested profile; `CLIENT_ENV_PROFILE` still takes precedence.
    pub profile: Option<String>,
}

impl Target {
    pub fn new(dir: impl Into<PathBuf>, profile: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            profile,
        }
    }

    /// The profile that will actually be loaded.
    pub fn active_profile(&self) -> String {
        client_env::config::active_profile(self.profile.as_deref())
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new(".", None)
    }
}

pub type CommandResult<T = ()> = Result<T, Box<dyn std::error::Error>>;
