use client_env::{ConfigError, EnvironmentConfig, IssueKind};
use colored::Colorize;

use super::{CommandResult, Target};

/// Validate the active profile.
///
/// Prints each rejected field and returns an error when any exist, so the
/// process exits non-zero and a build pipeline stops.
pub fn run(target: &Target) -> CommandResult {
    let profile = target.active_profile();
    match EnvironmentConfig::load_from(&target.dir, &profile) {
        Ok(_) => {
            println!(
                "{} profile '{}' is valid",
                "✓".green(),
                profile.green()
            );
            Ok(())
        }
        Err(ConfigError::Validation(issues)) => {
            println!("{} profile '{}' is invalid:", "x".red(), profile.bold());
            for issue in &issues {
                let marker = match issue.kind {
                    IssueKind::Missing => "missing".red(),
                    IssueKind::Invalid => "invalid".yellow(),
                };
                println!(
                    "  {} {} — {} (env: {})",
                    marker,
                    issue.key.bold(),
                    issue.message,
                    issue.env_hint.dimmed()
                );
            }
            Err(ConfigError::Validation(issues).into())
        }
        Err(e) => Err(e.into()),
    }
}
