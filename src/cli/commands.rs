use crate::config::BuilderConfig;
use crate::descriptor::load_table;
use crate::linter::{lint_application, print_lint_issues, LintIssue, LintSeverity};
use crate::model::{ActionModel, ActionModelBuilder, ApplicationModel};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Command-line interface for the action model builder
#[derive(Parser)]
#[command(name = "brrtrouter-actions")]
#[command(about = "Build and check controller action models", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the action models built from a metadata table
    Inspect {
        /// Path to the controller metadata table (YAML or JSON)
        #[arg(short, long)]
        table: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,

        /// Builder configuration (TOML). Defaults to the environment
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Lint the action models built from a metadata table
    ///
    /// Reports silent route attributes, invalid HTTP methods, duplicate
    /// route names, ambiguous routes and unbound route parameters.
    /// Exits with an error if any error-level issue is found.
    Lint {
        /// Path to the controller metadata table (YAML or JSON)
        #[arg(short, long)]
        table: PathBuf,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,

        /// Builder configuration (TOML). Defaults to the environment
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Execute a parsed command line.
///
/// # Errors
///
/// Returns an error if the configuration or table cannot be loaded, if JSON
/// output fails to serialize, or if `lint` finds error-level issues.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Inspect {
            table,
            format,
            config,
        } => {
            let app = build_from_table(&table, config.as_deref())?;
            match format {
                OutputFormat::Pretty => dump_actions(&app),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&app)?),
            }
            Ok(())
        }
        Commands::Lint {
            table,
            errors_only,
            config,
        } => {
            let app = build_from_table(&table, config.as_deref())?;
            let issues = lint_application(&app);
            let shown: Vec<LintIssue> = if errors_only {
                issues
                    .iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .cloned()
                    .collect()
            } else {
                issues.clone()
            };
            print_lint_issues(&shown);

            let errors = issues
                .iter()
                .filter(|i| i.severity == LintSeverity::Error)
                .count();
            if errors > 0 {
                bail!("{} lint error(s) in {}", errors, table.display());
            }
            Ok(())
        }
    }
}

fn build_from_table(table: &Path, config: Option<&Path>) -> anyhow::Result<ApplicationModel> {
    let config = match config {
        Some(path) => BuilderConfig::from_toml_file(path)
            .with_context(|| format!("Invalid builder config {}", path.display()))?,
        None => BuilderConfig::from_env(),
    };
    let controllers = load_table(table)
        .with_context(|| format!("Invalid metadata table {}", table.display()))?;
    let builder = ActionModelBuilder::from_config(config);
    Ok(builder.build_application(&controllers))
}

fn dump_actions(app: &ApplicationModel) {
    println!(
        "[actions] controllers={} count={}",
        app.controllers.len(),
        app.actions().count()
    );
    for controller in &app.controllers {
        let count = controller.actions.len();
        println!("[controller] {} actions={}", controller.name, count);
        for action in &controller.actions {
            println!("[action] {}", describe_action(action));
        }
    }
}

pub(super) fn describe_action(action: &ActionModel) -> String {
    let verbs = if action.http_methods.is_empty() {
        "*".to_string()
    } else {
        action.http_methods.join(",")
    };
    let route = action.route_template().unwrap_or("<conventional>");
    let mut line = format!(
        "{} {} -> {} ({})",
        verbs,
        route,
        action.action_name,
        action.action_ref()
    );
    if !action.api_explorer.is_visible {
        line.push_str(" [hidden]");
    }
    if let Some(group) = &action.api_explorer.group_name {
        line.push_str(&format!(" [group={}]", group));
    }
    if !action.parameters.is_empty() {
        let params: Vec<&str> = action.parameters.iter().map(|p| p.name.as_str()).collect();
        line.push_str(&format!(" params=[{}]", params.join(", ")));
    }
    line
}
