//! Build artifacts: the resolved record written out for a frontend build.
//!
//! `ts` produces the module a frontend bundler imports
//! (`export const environment = {...};`); `json` and `yaml` are plain
//! serializations that can be read back with [`parse`].

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::environment::EnvironmentConfig;

/// Output format of a build artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Yaml,
    TypeScript,
}

impl ArtifactFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Json => "json",
            ArtifactFormat::Yaml => "yaml",
            ArtifactFormat::TypeScript => "ts",
        }
    }

    /// Artifact file name for `profile`, matching the frontend convention of
    /// `environment.ts` for the default profile and `environment.{profile}.ts`
    /// otherwise.
    pub fn file_name(self, profile: &str) -> String {
        if profile == crate::config::DEFAULT_PROFILE {
            format!("environment.{}", self.extension())
        } else {
            format!("environment.{profile}.{}", self.extension())
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ArtifactFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ArtifactFormat::Json),
            "yaml" | "yml" => Ok(ArtifactFormat::Yaml),
            "ts" | "typescript" => Ok(ArtifactFormat::TypeScript),
            other => Err(ConfigError::Artifact(format!(
                "unknown artifact format '{other}' (expected json, yaml or ts)"
            ))),
        }
    }
}

/// Serialize `env` in the given format.
pub fn render(env: &EnvironmentConfig, format: ArtifactFormat) -> Result<String, ConfigError> {
    let rendered = match format {
        ArtifactFormat::Json => {
            let mut out = to_json(env)?;
            out.push('\n');
            out
        }
        ArtifactFormat::Yaml => {
            serde_yaml::to_string(env).map_err(|e| ConfigError::Artifact(e.to_string()))?
        }
        ArtifactFormat::TypeScript => {
            // JSON object literals are valid TypeScript.
            format!(
                "// Generated by client-env. Do not edit by hand.\n\
                 export const environment = {};\n",
                to_json(env)?
            )
        }
    };
    tracing::debug!(%format, bytes = rendered.len(), "rendered artifact");
    Ok(rendered)
}

/// Read a `json` or `yaml` artifact back and validate it.
pub fn parse(input: &str, format: ArtifactFormat) -> Result<EnvironmentConfig, ConfigError> {
    let env: EnvironmentConfig = match format {
        ArtifactFormat::Json => {
            serde_json::from_str(input).map_err(|e| ConfigError::Artifact(e.to_string()))?
        }
        ArtifactFormat::Yaml => {
            serde_yaml::from_str(input).map_err(|e| ConfigError::Artifact(e.to_string()))?
        }
        ArtifactFormat::TypeScript => {
            return Err(ConfigError::Artifact(
                "TypeScript artifacts are write-only".to_string(),
            ))
        }
    };
    env.validate()?;
    Ok(env)
}

fn to_json(env: &EnvironmentConfig) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(env).map_err(|e| ConfigError::Artifact(e.to_string()))
}
