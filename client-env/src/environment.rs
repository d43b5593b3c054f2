use std::path::Path;

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::config::{validation, ConfigError, FromConfigValue, RawConfig};
use crate::fields::{self, FieldSpec};

/// Deployment parameters of the web client for one profile.
///
/// Built once at startup (or at build time) and read-only afterwards: the
/// fields are private and there are no setters. Share it by reference, by
/// cloning, or behind an `Arc`; it is `Send + Sync` with no interior
/// mutability.
///
/// Accessors return the stored values untransformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentConfig {
    #[garde(skip)]
    production: bool,
    #[garde(length(min = 1), custom(absolute_url))]
    api_server_url: String,
    #[garde(dive)]
    auth0: Auth0Config,
}

/// Identity provider parameters. Together they must match an application
/// registered with the provider tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Auth0Config {
    #[garde(length(min = 1), custom(not_blank))]
    url: String,
    #[garde(length(min = 1), custom(not_blank))]
    audience: String,
    #[garde(length(min = 1), custom(not_blank))]
    client_id: String,
    #[serde(rename = "callbackURL")]
    #[garde(length(min = 1), custom(absolute_url))]
    callback_url: String,
}

impl Auth0Config {
    pub fn new(
        url: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            audience: audience.into(),
            client_id: client_id.into(),
            callback_url: callback_url.into(),
        }
    }

    /// Tenant domain prefix (e.g. `fsnd-python.us`).
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Where the provider redirects after login. Must be registered with the provider.
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}

impl EnvironmentConfig {
    /// Assemble a record from literal values. Call [`validate`](Self::validate)
    /// before trusting values that did not come through a loader.
    pub fn new(production: bool, api_server_url: impl Into<String>, auth0: Auth0Config) -> Self {
        Self {
            production,
            api_server_url: api_server_url.into(),
            auth0,
        }
    }

    /// Load and validate `profile` from the profile files in `dir`.
    pub fn load_from(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let raw = RawConfig::load_from(dir, profile)?;
        Self::from_config(&raw)
    }

    /// Load and validate `profile` from the current working directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), profile)
    }

    /// Build the record from a loaded [`RawConfig`].
    ///
    /// Fails fast: every missing field is reported at once, and nothing is
    /// type-checked until all of them are present. Type and constraint
    /// violations are then aggregated the same way.
    pub fn from_config(config: &RawConfig) -> Result<Self, ConfigError> {
        let missing = validation::missing_fields(config);
        if !missing.is_empty() {
            tracing::warn!(
                profile = config.profile(),
                count = missing.len(),
                "missing configuration fields"
            );
            return Err(ConfigError::Validation(missing));
        }

        let mut issues = Vec::new();
        let production = read::<bool>(config, &fields::PRODUCTION, &mut issues);
        let api_server_url = read::<String>(config, &fields::API_SERVER_URL, &mut issues);
        let url = read::<String>(config, &fields::AUTH0_URL, &mut issues);
        let audience = read::<String>(config, &fields::AUTH0_AUDIENCE, &mut issues);
        let client_id = read::<String>(config, &fields::AUTH0_CLIENT_ID, &mut issues);
        let callback_url = read::<String>(config, &fields::AUTH0_CALLBACK_URL, &mut issues);

        let (
            Some(production),
            Some(api_server_url),
            Some(url),
            Some(audience),
            Some(client_id),
            Some(callback_url),
        ) = (production, api_server_url, url, audience, client_id, callback_url)
        else {
            return Err(ConfigError::Validation(issues));
        };

        let env = EnvironmentConfig::new(
            production,
            api_server_url,
            Auth0Config::new(url, audience, client_id, callback_url),
        );
        env.validate()?;

        tracing::info!(
            profile = config.profile(),
            production = env.production,
            api_server_url = %env.api_server_url,
            "environment configuration loaded"
        );
        Ok(env)
    }

    /// Check every field constraint, aggregating all violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Validate::validate(self)
            .map_err(|report| ConfigError::Validation(validation::from_report(&report)))
    }

    /// Build profile flag. Carries no behavior of its own.
    pub fn production(&self) -> bool {
        self.production
    }

    /// Base URL of the API server.
    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }
}

fn read<T: FromConfigValue>(
    config: &RawConfig,
    spec: &FieldSpec,
    issues: &mut Vec<validation::FieldIssue>,
) -> Option<T> {
    match config.get::<T>(spec.key) {
        Ok(value) => Some(value),
        Err(e) => {
            issues.push(validation::FieldIssue::invalid(spec.key, e.to_string()));
            None
        }
    }
}

fn not_blank(value: &str, _ctx: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("must not be blank"));
    }
    Ok(())
}

/// An absolute `http`/`https` URL with a host.
fn absolute_url(value: &str, _ctx: &()) -> garde::Result {
    let parsed = url::Url::parse(value)
        .map_err(|e| garde::Error::new(format!("not a valid absolute URL: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(garde::Error::new(format!(
            "unsupported URL scheme `{}`",
            parsed.scheme()
        )));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(garde::Error::new("URL has no host"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvironmentConfig {
        EnvironmentConfig::new(
            false,
            "http://127.0.0.1:5000",
            Auth0Config::new(
                "fsnd-python.us",
                "drink",
                "46fz9B9UXUFN34rGmazo9z4vu7wYIpyS",
                "http://localhost:4200",
            ),
        )
    }

    #[test]
    fn sample_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn relative_url_rejected() {
        let env = EnvironmentConfig::new(false, "/api", sample().auth0().clone());
        let err = env.validate().unwrap_err();
        let issues = err.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "apiServerUrl");
        assert_eq!(issues[0].env_hint, "API_SERVER_URL");
    }

    #[test]
    fn non_http_scheme_rejected() {
        let env = EnvironmentConfig::new(false, "ftp://127.0.0.1", sample().auth0().clone());
        assert!(env.validate().is_err());
    }

    #[test]
    fn blank_client_id_maps_to_config_key() {
        let auth0 = Auth0Config::new("fsnd-python.us", "drink", "   ", "http://localhost:4200");
        let env = EnvironmentConfig::new(false, "http://127.0.0.1:5000", auth0);
        let err = env.validate().unwrap_err();
        assert!(err.issues().iter().any(|i| i.key == "auth0.clientId"));
    }

    #[test]
    fn config_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<EnvironmentConfig>();
    }
}
