use std::fs;

use client_env::config::{profile_file, BASE_FILE};
use colored::Colorize;

use super::{templates, CommandResult, Target};

/// Scaffold `environment.yaml` and `environment.prod.yaml` in `target.dir`.
///
/// Refuses to overwrite existing files unless `force` is set.
pub fn run(target: &Target, force: bool) -> CommandResult {
    let base = target.dir.join(BASE_FILE);
    let prod = target.dir.join(profile_file("prod"));

    if !force {
        for path in [&base, &prod] {
            if path.exists() {
                return Err(format!(
                    "'{}' already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
        }
    }

    fs::create_dir_all(&target.dir)?;
    fs::write(&base, templates::base_file())?;
    fs::write(&prod, templates::prod_file())?;

    println!("{} Created {}", "->".blue(), base.display());
    println!("{} Created {}", "->".blue(), prod.display());
    println!();
    println!(
        "  Replace the placeholder values, then run {}",
        "client-env check".bold()
    );
    Ok(())
}
