use std::collections::HashMap;
use std::path::Path;

use super::value::ConfigValue;
use super::ConfigError;

/// Load and parse a YAML file, flattening it into the values map.
///
/// Returns `Ok(false)` when the file does not exist.
pub(crate) fn load_yaml_file(
    path: &Path,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<bool, ConfigError> {
    if !path.exists() {
        return Ok(false);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
    flatten_yaml("", &yaml, values);
    Ok(true)
}

/// Read a dotenv file into `vars`, later entries replacing earlier ones.
///
/// The process environment is left untouched. Returns `Ok(false)` when the
/// file does not exist.
pub(crate) fn load_env_file(
    path: &Path,
    vars: &mut HashMap<String, String>,
) -> Result<bool, ConfigError> {
    if !path.exists() {
        return Ok(false);
    }
    let entries = dotenvy::from_path_iter(path)
        .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
    for entry in entries {
        let (key, value) =
            entry.map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        vars.insert(key, value);
    }
    Ok(true)
}

/// Parse a YAML string and flatten it into the values map.
pub(crate) fn load_yaml_str(
    content: &str,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<(), ConfigError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
    flatten_yaml("", &yaml, values);
    Ok(())
}

/// Flatten a YAML tree into dot-separated keys.
///
/// A `null` leaf is kept as [`ConfigValue::Null`] so a profile file can
/// blank out a base value explicitly.
pub(crate) fn flatten_yaml(
    prefix: &str,
    value: &serde_yaml::Value,
    out: &mut HashMap<String, ConfigValue>,
) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let key_str = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    other => format!("{other:?}"),
                };
                let full_key = if prefix.is_empty() {
                    key_str
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml(&full_key, v, out);
            }
        }
        serde_yaml::Value::Sequence(seq) => {
            if !prefix.is_empty() {
                out.insert(
                    prefix.to_string(),
                    ConfigValue::List(seq.iter().map(ConfigValue::from_yaml).collect()),
                );
            }
        }
        leaf => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), ConfigValue::from_yaml(leaf));
            }
        }
    }
}
