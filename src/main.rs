use clap::Parser;
use trierouter::cli::{run_cli, Cli};
use trierouter::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env())?;
    run_cli(Cli::parse())
}
