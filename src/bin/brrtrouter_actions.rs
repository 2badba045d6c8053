use brrtrouter_actions::cli::{run_cli, Cli};
use brrtrouter_actions::logging::{init_logging, LogConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Held until exit so buffered log lines are flushed.
    let _guard = init_logging(&LogConfig::from_env())?;
    run_cli(cli)
}
