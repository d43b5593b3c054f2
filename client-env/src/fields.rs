//! Registry of the fields an [`EnvironmentConfig`](crate::EnvironmentConfig) carries.
//!
//! Each entry ties together the config key used in the profile files and
//! artifacts, the Rust field path reported by validation, and the
//! environment variable that overrides the key at load time.

/// Metadata about a single configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Dotted config key (e.g., `"auth0.clientId"`).
    pub key: &'static str,
    /// Dotted path of the Rust field (e.g., `"auth0.client_id"`).
    pub rust_path: &'static str,
    /// Environment variable that overrides the key.
    pub env_var: &'static str,
    /// Expected value type.
    pub type_name: &'static str,
    pub description: &'static str,
}

pub const PRODUCTION: FieldSpec = FieldSpec {
    key: "production",
    rust_path: "production",
    env_var: "CLIENT_ENV_PRODUCTION",
    type_name: "bool",
    description: "build profile flag",
};

pub const API_SERVER_URL: FieldSpec = FieldSpec {
    key: "apiServerUrl",
    rust_path: "api_server_url",
    env_var: "API_SERVER_URL",
    type_name: "url",
    description: "base URL of the running API server",
};

pub const AUTH0_URL: FieldSpec = FieldSpec {
    key: "auth0.url",
    rust_path: "auth0.url",
    env_var: "AUTH0_URL",
    type_name: "string",
    description: "identity provider tenant domain prefix",
};

pub const AUTH0_AUDIENCE: FieldSpec = FieldSpec {
    key: "auth0.audience",
    rust_path: "auth0.audience",
    env_var: "AUTH0_AUDIENCE",
    type_name: "string",
    description: "API audience registered with the identity provider",
};

pub const AUTH0_CLIENT_ID: FieldSpec = FieldSpec {
    key: "auth0.clientId",
    rust_path: "auth0.client_id",
    env_var: "AUTH0_CLIENT_ID",
    type_name: "string",
    description: "client id generated for the identity provider application",
};

pub const AUTH0_CALLBACK_URL: FieldSpec = FieldSpec {
    key: "auth0.callbackURL",
    rust_path: "auth0.callback_url",
    env_var: "AUTH0_CALLBACK_URL",
    type_name: "url",
    description: "URL the identity provider redirects back to after login",
};

/// All fields, in declaration order.
pub const FIELDS: &[FieldSpec] = &[
    PRODUCTION,
    API_SERVER_URL,
    AUTH0_URL,
    AUTH0_AUDIENCE,
    AUTH0_CLIENT_ID,
    AUTH0_CALLBACK_URL,
];

pub fn by_key(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.key == key)
}

pub fn by_rust_path(path: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.rust_path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_and_env_vars_are_unique() {
        let keys: HashSet<_> = FIELDS.iter().map(|f| f.key).collect();
        let envs: HashSet<_> = FIELDS.iter().map(|f| f.env_var).collect();
        assert_eq!(keys.len(), FIELDS.len());
        assert_eq!(envs.len(), FIELDS.len());
    }

    #[test]
    fn lookup_by_key_and_path() {
        assert_eq!(by_key("auth0.clientId"), Some(&AUTH0_CLIENT_ID));
        assert_eq!(by_rust_path("auth0.callback_url"), Some(&AUTH0_CALLBACK_URL));
        assert!(by_key("auth0.client_id").is_none());
    }
}
