//! # client-env-cli
//!
//! Command-line tool for inspecting and building client environment profiles.
//!
//! This crate provides the `client-env` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `client-env show` | Print the resolved configuration of a profile |
//! | `client-env check` | Validate a profile, failing on any missing or malformed field |
//! | `client-env render` | Write a build artifact (`json`, `yaml`, `ts`) |
//! | `client-env login-link` | Print the identity provider login URL |
//! | `client-env describe` | List the known fields and their env vars |
//! | `client-env init` | Scaffold placeholder profile files |
//! | `client-env doctor` | Run configuration health diagnostics |
//!
//! Every command accepts `--dir` (directory holding the profile files) and
//! `--profile`. The profile can also come from `CLIENT_ENV_PROFILE`.

pub mod commands;
