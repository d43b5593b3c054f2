use std::fs;
use std::path::{Path, PathBuf};

use client_env::artifact::{self, ArtifactFormat};
use client_env::EnvironmentConfig;
use colored::Colorize;

use super::{CommandResult, Target};

/// Render the active profile as a build artifact.
///
/// Without `out` the artifact goes to stdout. If `out` is an existing
/// directory the conventional file name (`environment.ts`,
/// `environment.prod.json`, ...) is used inside it; otherwise `out` is the
/// file path. Returns the path written, if any.
pub fn run(
    target: &Target,
    format: ArtifactFormat,
    out: Option<&Path>,
) -> CommandResult<Option<PathBuf>> {
    let profile = target.active_profile();
    let env = EnvironmentConfig::load_from(&target.dir, &profile)?;
    let rendered = artifact::render(&env, format)?;

    let Some(out) = out else {
        print!("{rendered}");
        return Ok(None);
    };

    let path = if out.is_dir() {
        out.join(format.file_name(&profile))
    } else {
        out.to_path_buf()
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, rendered)?;
    tracing::info!(path = %path.display(), %format, profile = %profile, "artifact written");
    eprintln!(
        "{} wrote {} artifact for '{}' to {}",
        "->".blue(),
        format,
        profile.green(),
        path.display()
    );
    Ok(Some(path))
}
