use std::fs;

use client_env::fields::FIELDS;
use client_env::{ConfigError, ConfigValue, RawConfig, SecretResolver, PROFILE_ENV};
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    for field in FIELDS {
        unsafe { std::env::remove_var(field.env_var) };
    }
    unsafe { std::env::remove_var(PROFILE_ENV) };
}

#[test]
fn test_empty_config() {
    let config = RawConfig::empty();
    assert!(matches!(
        config.get::<String>("apiServerUrl"),
        Err(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_set_and_get() {
    let mut config = RawConfig::empty();
    config.set("auth0.audience", ConfigValue::String("drink".into()));
    assert_eq!(config.get::<String>("auth0.audience").unwrap(), "drink");
}

#[test]
fn test_get_or_default() {
    let config = RawConfig::empty();
    assert!(!config.get_or("production", false));
}

#[test]
fn test_type_conversions() {
    let mut config = RawConfig::empty();
    config.set("port", ConfigValue::Integer(5000));
    config.set("flag", ConfigValue::String("yes".into()));
    config.set("off", ConfigValue::String("0".into()));
    config.set("null_val", ConfigValue::Null);

    assert_eq!(config.get::<u16>("port").unwrap(), 5000);
    assert_eq!(config.get::<String>("port").unwrap(), "5000");
    assert!(config.get::<bool>("flag").unwrap());
    assert!(!config.get::<bool>("off").unwrap());
    assert!(config.get::<Option<String>>("null_val").unwrap().is_none());
}

#[test]
fn test_bool_mismatch() {
    let mut config = RawConfig::empty();
    config.set("production", ConfigValue::String("maybe".into()));
    assert!(matches!(
        config.get::<bool>("production"),
        Err(ConfigError::TypeMismatch { expected: "bool", found: "string", .. })
    ));
}

#[test]
fn test_mismatch_names_found_kind() {
    let mut config = RawConfig::empty();
    config.set("apiServerUrl", ConfigValue::List(vec![]));
    let err = config.get::<String>("apiServerUrl").unwrap_err();
    assert_eq!(
        err.to_string(),
        "config type mismatch for 'apiServerUrl': expected String, found list"
    );
}

#[test]
fn test_flatten_yaml() {
    let yaml = r#"
production: false
apiServerUrl: "http://127.0.0.1:5000"
auth0:
  url: "fsnd-python.us"
  clientId: "46fz9B9UXUFN34rGmazo9z4vu7wYIpyS"
"#;
    let config = RawConfig::from_yaml_str(yaml, "dev").unwrap();

    assert!(!config.get::<bool>("production").unwrap());
    assert_eq!(config.get::<String>("apiServerUrl").unwrap(), "http://127.0.0.1:5000");
    assert_eq!(config.get::<String>("auth0.url").unwrap(), "fsnd-python.us");
    assert_eq!(
        config.keys(),
        vec!["apiServerUrl", "auth0.clientId", "auth0.url", "production"]
    );
    assert_eq!(config.profile(), "dev");
}

#[test]
fn test_null_is_not_set() {
    let config = RawConfig::from_yaml_str("apiServerUrl: ~\n", "dev").unwrap();
    assert!(config.contains_key("apiServerUrl"));
    assert!(!config.is_set("apiServerUrl"));
}

#[test]
fn test_malformed_yaml() {
    let result = RawConfig::from_yaml_str("auth0: [unclosed", "dev");
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

// =========================================================================
// Layered loading from disk
// =========================================================================

#[test]
#[serial]
fn test_profile_file_overrides_base() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("environment.yaml"),
        "production: false\napiServerUrl: http://127.0.0.1:5000\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("environment.prod.yaml"),
        "production: true\napiServerUrl: https://api.example.com\n",
    )
    .unwrap();

    let dev = RawConfig::load_from(dir.path(), "dev").unwrap();
    assert!(!dev.get::<bool>("production").unwrap());

    let prod = RawConfig::load_from(dir.path(), "prod").unwrap();
    assert!(prod.get::<bool>("production").unwrap());
    assert_eq!(prod.get::<String>("apiServerUrl").unwrap(), "https://api.example.com");
    assert_eq!(prod.profile(), "prod");
    assert_eq!(prod.dir(), Some(dir.path()));
}

#[test]
#[serial]
fn test_profile_env_var_wins() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("environment.staging.yaml"), "production: true\n").unwrap();

    unsafe { std::env::set_var(PROFILE_ENV, "staging") };
    let config = RawConfig::load_from(dir.path(), "dev").unwrap();
    unsafe { std::env::remove_var(PROFILE_ENV) };

    assert_eq!(config.profile(), "staging");
    assert!(config.get::<bool>("production").unwrap());
}

#[test]
#[serial]
fn test_field_env_var_overrides_files() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("environment.yaml"),
        "apiServerUrl: http://127.0.0.1:5000\n",
    )
    .unwrap();

    unsafe { std::env::set_var("API_SERVER_URL", "http://10.0.0.2:8080") };
    let config = RawConfig::load_from(dir.path(), "dev").unwrap();
    unsafe { std::env::remove_var("API_SERVER_URL") };

    assert_eq!(config.get::<String>("apiServerUrl").unwrap(), "http://10.0.0.2:8080");
}

#[test]
#[serial]
fn test_dotenv_supplies_fields() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "AUTH0_AUDIENCE=drink\n").unwrap();

    let config = RawConfig::load_from(dir.path(), "dev").unwrap();
    clear_env();

    assert_eq!(config.get::<String>("auth0.audience").unwrap(), "drink");
}

#[test]
#[serial]
fn test_dotenv_does_not_overwrite_process_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "AUTH0_AUDIENCE=from-file\n").unwrap();

    unsafe { std::env::set_var("AUTH0_AUDIENCE", "from-process") };
    let config = RawConfig::load_from(dir.path(), "dev").unwrap();
    clear_env();

    assert_eq!(config.get::<String>("auth0.audience").unwrap(), "from-process");
}

#[test]
#[serial]
fn test_profile_dotenv_overrides_base_dotenv() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "AUTH0_AUDIENCE=base\n").unwrap();
    fs::write(dir.path().join(".env.prod"), "AUTH0_AUDIENCE=prod\n").unwrap();

    let prod = RawConfig::load_from(dir.path(), "prod").unwrap();
    let dev = RawConfig::load_from(dir.path(), "dev").unwrap();

    assert_eq!(prod.get::<String>("auth0.audience").unwrap(), "prod");
    assert_eq!(dev.get::<String>("auth0.audience").unwrap(), "base");
    assert!(std::env::var("AUTH0_AUDIENCE").is_err());
}

#[test]
#[serial]
fn test_placeholders_resolved_from_dotenv() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("environment.yaml"),
        "auth0:\n  clientId: \"${TEST_CLIENT_ENV_DOTENV_ID}\"\n",
    )
    .unwrap();
    fs::write(dir.path().join(".env"), "TEST_CLIENT_ENV_DOTENV_ID=from-dotenv\n").unwrap();

    let config = RawConfig::load_from(dir.path(), "dev").unwrap();

    assert_eq!(config.get::<String>("auth0.clientId").unwrap(), "from-dotenv");
    assert!(std::env::var("TEST_CLIENT_ENV_DOTENV_ID").is_err());
}

#[test]
#[serial]
fn test_malformed_dotenv_reports_path() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "=value-without-key\n").unwrap();

    let err = RawConfig::load_from(dir.path(), "dev").unwrap_err();
    match err {
        ConfigError::Load(msg) => assert!(msg.contains(".env")),
        other => panic!("expected load error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_placeholders_resolved_from_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("environment.yaml"),
        "auth0:\n  clientId: \"${TEST_CLIENT_ENV_SECRET_ID}\"\n",
    )
    .unwrap();

    unsafe { std::env::set_var("TEST_CLIENT_ENV_SECRET_ID", "46fz9B9UXUFN34rGmazo9z4vu7wYIpyS") };
    let config = RawConfig::load_from(dir.path(), "dev").unwrap();
    unsafe { std::env::remove_var("TEST_CLIENT_ENV_SECRET_ID") };

    assert_eq!(
        config.get::<String>("auth0.clientId").unwrap(),
        "46fz9B9UXUFN34rGmazo9z4vu7wYIpyS"
    );
}

#[test]
#[serial]
fn test_custom_resolver() {
    struct Vault;
    impl SecretResolver for Vault {
        fn resolve(&self, reference: &str) -> Result<String, ConfigError> {
            match reference {
                "vault:client" => Ok("from-vault".to_string()),
                other => Err(ConfigError::NotFound(other.to_string())),
            }
        }
    }

    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("environment.yaml"),
        "auth0:\n  clientId: \"${vault:client}\"\n",
    )
    .unwrap();

    let config = RawConfig::load_with_resolver(dir.path(), "dev", &Vault).unwrap();
    assert_eq!(config.get::<String>("auth0.clientId").unwrap(), "from-vault");
}

#[test]
#[serial]
fn test_missing_files_are_skipped() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config = RawConfig::load_from(dir.path(), "dev").unwrap();
    assert!(config.keys().is_empty());
}

#[test]
#[serial]
fn test_malformed_file_reports_path() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("environment.yaml"), "auth0: [oops\n").unwrap();

    let err = RawConfig::load_from(dir.path(), "dev").unwrap_err();
    match err {
        ConfigError::Load(msg) => assert!(msg.contains("environment.yaml")),
        other => panic!("expected load error, got {other:?}"),
    }
}
