use std::path::PathBuf;

use clap::{Parser, Subcommand};
use client_env::{ArtifactFormat, LogFormat};
use client_env_cli::commands::{check, describe, doctor, init, login_link, render, show, Target};

#[derive(Parser)]
#[command(
    name = "client-env",
    version,
    about = "client-env CLI — inspect, validate and render client environment profiles"
)]
struct Cli {
    /// Directory holding environment.yaml and its profile overrides
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Profile to load (CLIENT_ENV_PROFILE takes precedence)
    #[arg(long, short, global = true)]
    profile: Option<String>,

    /// Log output format (pretty or json)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Show,
    /// Validate the profile; exits non-zero on any missing or malformed field
    Check,
    /// Write a build artifact
    Render {
        /// Artifact format (json, yaml, ts)
        #[arg(long, short, default_value = "ts")]
        format: ArtifactFormat,
        /// Output file or directory (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Print the identity provider login link
    LoginLink,
    /// List known configuration fields
    Describe,
    /// Scaffold placeholder profile files
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Run configuration health diagnostics
    Doctor,
}

fn main() {
    let cli = Cli::parse();
    client_env::init_tracing(cli.log_format, "warn");

    let target = Target::new(cli.dir, cli.profile);
    let result = match cli.command {
        Commands::Show => show::run(&target),
        Commands::Check => check::run(&target),
        Commands::Render { format, out } => render::run(&target, format, out.as_deref()).map(|_| ()),
        Commands::LoginLink => login_link::run(&target).map(|_| ()),
        Commands::Describe => describe::run(),
        Commands::Init { force } => init::run(&target, force),
        Commands::Doctor => doctor::run(&target).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
