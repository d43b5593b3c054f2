use client_env::config::{profile_file, BASE_FILE};
use client_env::{ConfigError, EnvironmentConfig, PROFILE_ENV};
use colored::Colorize;

use super::{CommandResult, Target};

enum CheckResult {
    Ok(String),
    Warning(String),
    Error(String),
}

/// Run configuration health diagnostics.
///
/// Checks, in order:
/// 1. The config directory exists (Error if missing)
/// 2. `environment.yaml` exists (Error if missing)
/// 3. `environment.{profile}.yaml` exists (Warning if missing, skipped for `dev`)
/// 4. `.env` files present (informational)
/// 5. `CLIENT_ENV_PROFILE` overrides the requested profile (Warning if it does)
/// 6. The active profile loads and validates (Error otherwise)
///
/// Results are printed with colored indicators. Returns the number of
/// issues found; never fails on its own.
pub fn run(target: &Target) -> CommandResult<usize> {
    let profile = target.active_profile();
    println!(
        "{} {}",
        "client-env doctor — checking profile".bold(),
        profile.green().bold()
    );
    println!();

    let mut issues = 0;
    let dir = &target.dir;

    check(
        "Config directory",
        || {
            if dir.is_dir() {
                CheckResult::Ok(dir.display().to_string())
            } else {
                CheckResult::Error(format!("{} is not a directory", dir.display()))
            }
        },
        &mut issues,
    );

    check(
        "Base file",
        || {
            if dir.join(BASE_FILE).exists() {
                CheckResult::Ok(format!("{BASE_FILE} found"))
            } else {
                CheckResult::Error(format!("{BASE_FILE} not found (run: client-env init)"))
            }
        },
        &mut issues,
    );

    check(
        "Profile file",
        || {
            let name = profile_file(&profile);
            if profile == client_env::DEFAULT_PROFILE {
                CheckResult::Ok("default profile uses the base file (skipped)".into())
            } else if dir.join(&name).exists() {
                CheckResult::Ok(format!("{name} found"))
            } else {
                CheckResult::Warning(format!("{name} not found, base values only"))
            }
        },
        &mut issues,
    );

    check(
        "Env files",
        || {
            let found: Vec<String> = [".env".to_string(), format!(".env.{profile}")]
                .into_iter()
                .filter(|name| dir.join(name).exists())
                .collect();
            if found.is_empty() {
                CheckResult::Ok("none (optional)".into())
            } else {
                CheckResult::Ok(found.join(", "))
            }
        },
        &mut issues,
    );

    check(
        "Profile selection",
        || match (&target.profile, std::env::var(PROFILE_ENV).ok()) {
            (Some(requested), Some(from_env)) if *requested != from_env => CheckResult::Warning(
                format!("{PROFILE_ENV}={from_env} overrides --profile {requested}"),
            ),
            _ => CheckResult::Ok(profile.clone()),
        },
        &mut issues,
    );

    check(
        "Validation",
        || match EnvironmentConfig::load_from(dir, &profile) {
            Ok(_) => CheckResult::Ok("all fields present and well-formed".into()),
            Err(ConfigError::Validation(found)) => CheckResult::Error(
                found
                    .iter()
                    .map(|i| i.key.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
                    + " rejected (run: client-env check)",
            ),
            Err(e) => CheckResult::Error(e.to_string()),
        },
        &mut issues,
    );

    println!();
    if issues == 0 {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!("{}", format!("{} issue(s) found", issues).yellow().bold());
    }

    Ok(issues)
}

fn check<F>(name: &str, f: F, issues: &mut usize)
where
    F: FnOnce() -> CheckResult,
{
    let result = f();
    match &result {
        CheckResult::Ok(msg) => {
            println!("  {} {} — {}", "✓".green(), name, msg.dimmed());
        }
        CheckResult::Warning(msg) => {
            println!("  {} {} — {}", "!".yellow(), name, msg.yellow());
            *issues += 1;
        }
        CheckResult::Error(msg) => {
            println!("  {} {} — {}", "x".red(), name, msg.red());
            *issues += 1;
        }
    }
}
