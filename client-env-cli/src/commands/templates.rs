/// Simple template rendering: replaces {{key}} with value.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{}}}}}", key), value);
    }
    output
}

/// Base profile. Every value is a placeholder for the integrating developer.
pub const BASE: &str = r#"# Replace every value with your own project's settings.
production: false
# Base URL of the running API server.
apiServerUrl: "{{api_server_url}}"
auth0:
  # Tenant domain prefix (the part before .auth0.com).
  url: "{{auth0_url}}"
  # Audience set for the API in the identity provider.
  audience: "{{audience}}"
  # Client id generated for the application.
  clientId: "{{client_id}}"
  # Base URL of the running client application; must be registered as a callback.
  callbackURL: "{{callback_url}}"
"#;

/// Production override: only what differs from the base.
pub const PROD: &str = r#"production: true
apiServerUrl: "{{api_server_url}}"
auth0:
  callbackURL: "{{callback_url}}"
"#;

pub fn base_file() -> String {
    render(
        BASE,
        &[
            ("api_server_url", "http://127.0.0.1:5000"),
            ("auth0_url", "your-tenant.us"),
            ("audience", "your-api-audience"),
            ("client_id", "your-client-id"),
            ("callback_url", "http://localhost:4200"),
        ],
    )
}

pub fn prod_file() -> String {
    render(
        PROD,
        &[
            ("api_server_url", "https://api.example.com"),
            ("callback_url", "https://app.example.com"),
        ],
    )
}
