//! # CLI Module
//!
//! Command-line access to the action model builder, for checking a
//! controller metadata table without writing any code.
//!
//! ## Commands
//!
//! ### `inspect`
//!
//! Build the action models for a table and print them:
//!
//! ```bash
//! brrtrouter-actions inspect --table controllers.yaml
//! brrtrouter-actions inspect --table controllers.yaml --format json
//! ```
//!
//! ### `lint`
//!
//! Build the action models and report suspicious routing (see
//! [`crate::linter`]). Exits with status 1 when errors are found:
//!
//! ```bash
//! brrtrouter-actions lint --table controllers.yaml --errors-only
//! ```
//!
//! Both commands accept `--config <FILE>` pointing at a TOML
//! [`crate::config::BuilderConfig`]; without it the configuration is read
//! from the environment.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use brrtrouter_actions::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands, OutputFormat};
