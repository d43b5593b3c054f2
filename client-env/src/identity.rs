//! Identity provider endpoints derived from an [`Auth0Config`].
//!
//! These live outside the record so it stays a passive holder of the
//! values it was loaded with.

use url::Url;

use crate::config::ConfigError;
use crate::environment::Auth0Config;

const TENANT_SUFFIX: &str = ".auth0.com";

/// Full tenant host: `{url}.auth0.com`, or `url` itself if it already ends
/// with `.auth0.com`. Any scheme and trailing slash on `url` are ignored.
pub fn tenant_domain(auth0: &Auth0Config) -> String {
    let url = auth0.url().trim();
    let prefix = url
        .split_once("://")
        .map_or(url, |(_, rest)| rest)
        .trim_end_matches('/');
    if prefix.ends_with(TENANT_SUFFIX) {
        prefix.to_string()
    } else {
        format!("{prefix}{TENANT_SUFFIX}")
    }
}

/// Expected `iss` claim of tokens issued by the tenant.
pub fn issuer(auth0: &Auth0Config) -> String {
    format!("https://{}/", tenant_domain(auth0))
}

/// Location of the tenant's signing keys.
pub fn jwks_url(auth0: &Auth0Config) -> String {
    format!("https://{}/.well-known/jwks.json", tenant_domain(auth0))
}

/// Login link for the implicit flow: the provider's `/authorize` endpoint
/// with audience, client id and redirect target as query parameters.
pub fn authorize_url(auth0: &Auth0Config) -> Result<Url, ConfigError> {
    let mut url = Url::parse(&format!("https://{}/authorize", tenant_domain(auth0)))
        .map_err(|e| ConfigError::Load(format!("invalid tenant domain '{}': {e}", auth0.url())))?;
    url.query_pairs_mut()
        .append_pair("audience", auth0.audience())
        .append_pair("response_type", "token")
        .append_pair("client_id", auth0.client_id())
        .append_pair("redirect_uri", auth0.callback_url());
    Ok(url)
}
