use client_env::{identity, EnvironmentConfig};

use super::{CommandResult, Target};

/// Print the provider login URL for the active profile and return it.
pub fn run(target: &Target) -> CommandResult<String> {
    let profile = target.active_profile();
    let env = EnvironmentConfig::load_from(&target.dir, &profile)?;
    let url = identity::authorize_url(env.auth0())?.to_string();
    println!("{url}");
    Ok(url)
}
