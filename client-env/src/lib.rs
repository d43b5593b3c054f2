//! # client-env
//!
//! Build-time environment configuration for a web client: where the API
//! server lives and how the client registers with its identity provider.
//!
//! A profile (`dev`, `prod`, ...) is loaded once from layered sources into
//! an immutable [`EnvironmentConfig`], validated up front, and then passed
//! to whatever needs it. The same record can be written out as a build
//! artifact for a frontend bundler.
//!
//! ```ignore
//! let env = client_env::EnvironmentConfig::load("prod")?;
//! let api = env.api_server_url();
//! let login = client_env::identity::authorize_url(env.auth0())?;
//! ```

pub mod artifact;
pub mod config;
pub mod environment;
pub mod fields;
pub mod identity;
pub mod telemetry;

pub use artifact::ArtifactFormat;
pub use config::{
    ConfigError, ConfigValue, DefaultSecretResolver, FieldIssue, FromConfigValue, IssueKind,
    RawConfig, SecretResolver, DEFAULT_PROFILE, PROFILE_ENV,
};
pub use environment::{Auth0Config, EnvironmentConfig};
pub use fields::FieldSpec;
pub use telemetry::{init_tracing, LogFormat};
