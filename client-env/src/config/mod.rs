mod loader;
pub mod secrets;
pub mod validation;
pub mod value;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use secrets::{DefaultSecretResolver, SecretResolver};
pub use validation::{FieldIssue, IssueKind};
pub use value::{ConfigValue, FromConfigValue};

use crate::fields::FIELDS;

/// Environment variable that selects the active profile.
pub const PROFILE_ENV: &str = "CLIENT_ENV_PROFILE";

/// Profile used when neither the caller nor [`PROFILE_ENV`] names one.
pub const DEFAULT_PROFILE: &str = "dev";

/// Name of the base configuration file.
pub const BASE_FILE: &str = "environment.yaml";

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The requested key was not found in the configuration.
    #[error("config key not found: {0}")]
    NotFound(String),
    /// The value could not be converted to the requested type.
    #[error("config type mismatch for '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    /// An I/O or YAML parsing error occurred while loading config files.
    #[error("config load error: {0}")]
    Load(String),
    /// One or more fields are missing or malformed.
    #[error("{}", validation::describe(.0))]
    Validation(Vec<FieldIssue>),
    /// A build artifact could not be rendered or parsed.
    #[error("artifact error: {0}")]
    Artifact(String),
}

impl ConfigError {
    /// Issues carried by a [`ConfigError::Validation`], empty for other variants.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ConfigError::Validation(issues) => issues,
            _ => &[],
        }
    }

    /// Whether this error reports at least one absent field.
    pub fn is_missing_field(&self) -> bool {
        self.issues().iter().any(|i| i.kind == IssueKind::Missing)
    }
}

/// File name of the override layer for `profile`.
pub fn profile_file(profile: &str) -> String {
    format!("environment.{profile}.yaml")
}

/// Resolve the active profile: [`PROFILE_ENV`] > `requested` > [`DEFAULT_PROFILE`].
pub fn active_profile(requested: Option<&str>) -> String {
    std::env::var(PROFILE_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .or_else(|| requested.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
}

/// Flattened, layered key/value view of one configuration profile.
///
/// Resolution order (lowest to highest priority):
/// 1. `environment.yaml` (base)
/// 2. `environment.{profile}.yaml` (profile override)
/// 3. `.env` file
/// 4. `.env.{profile}` file
/// 5. The process environment variable registered for each known field
///    (e.g., `API_SERVER_URL` overrides `apiServerUrl`)
///
/// Env files are read into a map private to the load and never written to
/// the process environment, so one profile's `.env.{profile}` cannot leak
/// into a later load of another profile. A variable set in the process
/// always wins over the same name in an env file.
/// `${...}` placeholders in file values are resolved before the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RawConfig {
    values: HashMap<String, ConfigValue>,
    profile: String,
    dir: Option<PathBuf>,
}

impl RawConfig {
    /// Load `profile` from the files in `dir` with a custom secret resolver.
    pub fn load_with_resolver(
        dir: &Path,
        profile: &str,
        resolver: &dyn SecretResolver,
    ) -> Result<Self, ConfigError> {
        let active_profile = active_profile(Some(profile));
        let _span = tracing::debug_span!("load_profile", profile = %active_profile).entered();

        let mut values = HashMap::new();

        // 1. Base file
        let base = dir.join(BASE_FILE);
        if loader::load_yaml_file(&base, &mut values)? {
            tracing::debug!(path = %base.display(), "loaded base layer");
        } else {
            tracing::warn!(path = %base.display(), "base config file not found, skipping");
        }

        // 2. Profile file
        let profile_path = dir.join(profile_file(&active_profile));
        if loader::load_yaml_file(&profile_path, &mut values)? {
            tracing::debug!(path = %profile_path.display(), "loaded profile layer");
        }

        // 3. .env files, kept local to this load
        let mut env_files = HashMap::new();
        if loader::load_env_file(&dir.join(".env"), &mut env_files)? {
            tracing::debug!("loaded .env");
        }
        if loader::load_env_file(&dir.join(format!(".env.{active_profile}")), &mut env_files)? {
            tracing::debug!(profile = %active_profile, "loaded profile .env");
        }

        // 4. ${...} placeholders
        let resolver = EnvFileResolver {
            vars: &env_files,
            inner: resolver,
        };
        resolve_string_values(&mut values, &resolver)?;

        // 5. Field env vars: process first, then env files
        for field in FIELDS {
            let found = std::env::var(field.env_var)
                .ok()
                .or_else(|| env_files.get(field.env_var).cloned());
            if let Some(env_val) = found {
                tracing::debug!(key = field.key, env = field.env_var, "env override");
                values.insert(field.key.to_string(), ConfigValue::String(env_val));
            }
        }

        Ok(RawConfig {
            values,
            profile: active_profile,
            dir: Some(dir.to_path_buf()),
        })
    }

    /// Load `profile` from the files in `dir` (default resolver: env + file).
    pub fn load_from(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        Self::load_with_resolver(dir, profile, &DefaultSecretResolver)
    }

    /// Load `profile` from the current working directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), profile)
    }

    /// Create a config from a YAML string, without any environment overlay.
    pub fn from_yaml_str(yaml: &str, profile: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        loader::load_yaml_str(yaml, &mut values)?;
        Ok(RawConfig {
            values,
            profile: profile.to_string(),
            dir: None,
        })
    }

    /// Create an empty config (useful for testing).
    pub fn empty() -> Self {
        RawConfig {
            values: HashMap::new(),
            profile: "test".to_string(),
            dir: None,
        }
    }

    /// Set a value programmatically.
    pub fn set(&mut self, key: &str, value: ConfigValue) {
        self.values.insert(key.to_string(), value);
    }

    /// Get a typed value for the given dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the key does not exist, or
    /// `ConfigError::TypeMismatch` if the value cannot be converted.
    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))?;
        V::from_config_value(value, key)
    }

    /// Get a typed value, returning a default if the key is missing.
    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> V {
        self.get(key).unwrap_or(default)
    }

    /// Check whether a key exists in the config.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether `key` is present with a non-null value.
    pub fn is_set(&self, key: &str) -> bool {
        !matches!(self.values.get(key), None | Some(ConfigValue::Null))
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The active profile name.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Directory the files were read from, if loaded from disk.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

/// Falls back to the loaded env files when the wrapped resolver cannot
/// resolve a `${VAR}` or `${env:VAR}` reference.
struct EnvFileResolver<'a> {
    vars: &'a HashMap<String, String>,
    inner: &'a dyn SecretResolver,
}

impl SecretResolver for EnvFileResolver<'_> {
    fn resolve(&self, reference: &str) -> Result<String, ConfigError> {
        match self.inner.resolve(reference) {
            Err(ConfigError::NotFound(missing)) => {
                let reference = reference.trim();
                if reference.starts_with("file:") {
                    return Err(ConfigError::NotFound(missing));
                }
                let var = reference.strip_prefix("env:").unwrap_or(reference).trim();
                self.vars
                    .get(var)
                    .cloned()
                    .ok_or(ConfigError::NotFound(missing))
            }
            other => other,
        }
    }
}

/// Resolve `${...}` placeholders in all string values of the config map.
fn resolve_string_values(
    values: &mut HashMap<String, ConfigValue>,
    resolver: &dyn SecretResolver,
) -> Result<(), ConfigError> {
    for value in values.values_mut() {
        if let ConfigValue::String(s) = value {
            if s.contains("${") {
                *s = secrets::resolve_placeholders(s, resolver)?;
            }
        }
    }
    Ok(())
}
