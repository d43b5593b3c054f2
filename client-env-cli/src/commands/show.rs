use client_env::{fields, EnvironmentConfig};
use colored::Colorize;

use super::{CommandResult, Target};

/// Load, validate and print the active profile.
pub fn run(target: &Target) -> CommandResult {
    let profile = target.active_profile();
    let env = EnvironmentConfig::load_from(&target.dir, &profile)?;
    print!("{}", format(&env, &profile));
    Ok(())
}

/// One `key = value` line per field, under a profile header.
pub fn format(env: &EnvironmentConfig, profile: &str) -> String {
    let rows = [
        (fields::PRODUCTION.key, env.production().to_string()),
        (fields::API_SERVER_URL.key, env.api_server_url().to_string()),
        (fields::AUTH0_URL.key, env.auth0().url().to_string()),
        (fields::AUTH0_AUDIENCE.key, env.auth0().audience().to_string()),
        (fields::AUTH0_CLIENT_ID.key, env.auth0().client_id().to_string()),
        (fields::AUTH0_CALLBACK_URL.key, env.auth0().callback_url().to_string()),
    ];
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    let mut out = format!("{} {}\n", "Profile:".bold(), profile.green());
    for (key, value) in rows {
        out.push_str(&format!("  {key:<width$} = {value}\n"));
    }
    out
}
