use std::fmt;

use super::RawConfig;
use crate::fields::{self, FieldSpec, FIELDS};

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// No value for the key in any layer.
    Missing,
    /// A value exists but is the wrong type or breaks a constraint.
    Invalid,
}

/// A single rejected configuration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// The config key (e.g., `auth0.clientId`).
    pub key: String,
    /// Environment variable that can supply the key.
    pub env_hint: String,
    pub kind: IssueKind,
    pub message: String,
}

impl FieldIssue {
    pub fn missing(spec: &FieldSpec) -> Self {
        FieldIssue {
            key: spec.key.to_string(),
            env_hint: spec.env_var.to_string(),
            kind: IssueKind::Missing,
            message: format!("expected {}: {}", spec.type_name, spec.description),
        }
    }

    pub fn invalid(key: &str, message: impl Into<String>) -> Self {
        let env_hint = match fields::by_key(key) {
            Some(spec) => spec.env_var.to_string(),
            None => key.to_uppercase().replace('.', "_"),
        };
        FieldIssue {
            key: key.to_string(),
            env_hint,
            kind: IssueKind::Invalid,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            IssueKind::Missing => "missing configuration field",
            IssueKind::Invalid => "invalid configuration field",
        };
        write!(
            f,
            "{label} `{}` ({}); set it in the profile file or env var `{}`",
            self.key, self.message, self.env_hint
        )
    }
}

/// Render an aggregated issue list, one issue per line.
pub(crate) fn describe(issues: &[FieldIssue]) -> String {
    match issues {
        [] => "configuration is invalid".to_string(),
        [single] => single.to_string(),
        many => {
            let mut out = format!("{} configuration fields rejected:", many.len());
            for issue in many {
                out.push_str("\n  - ");
                out.push_str(&issue.to_string());
            }
            out
        }
    }
}

/// Every registered field that has no value (or an explicit `null`) in `config`.
pub fn missing_fields(config: &RawConfig) -> Vec<FieldIssue> {
    FIELDS
        .iter()
        .filter(|spec| !config.is_set(spec.key))
        .map(FieldIssue::missing)
        .collect()
}

/// Translate a `garde` report into issues keyed by config key.
pub(crate) fn from_report(report: &garde::Report) -> Vec<FieldIssue> {
    report
        .iter()
        .map(|(path, error)| {
            let path = path.to_string();
            let key = fields::by_rust_path(&path)
                .map(|spec| spec.key.to_string())
                .unwrap_or(path);
            FieldIssue::invalid(&key, error.message().to_string())
        })
        .collect()
}
