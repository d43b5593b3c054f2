use client_env::fields::FIELDS;
use colored::Colorize;

use super::CommandResult;

/// Print the known fields with their config keys and env vars.
pub fn run() -> CommandResult {
    print!("{}", format());
    Ok(())
}

pub fn format() -> String {
    let key_width = FIELDS.iter().map(|f| f.key.len()).max().unwrap_or(0);
    let env_width = FIELDS.iter().map(|f| f.env_var.len()).max().unwrap_or(0);

    let mut out = String::new();
    for field in FIELDS {
        out.push_str(&format!(
            "  {:<key_width$}  {:<env_width$}  {:<6}  {}\n",
            field.key.bold(),
            field.env_var,
            field.type_name,
            field.description.dimmed(),
        ));
    }
    out
}
