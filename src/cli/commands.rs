use anyhow::{anyhow, Context as _, Result};
use clap::{Parser, Subcommand};
use http::Method;
use tracing::info;

use crate::demo::demo_engine;
use crate::engine::Engine;
use crate::runtime_config::RuntimeConfig;

/// Command-line interface for the trie router demo
#[derive(Parser)]
#[command(name = "trierouter")]
#[command(about = "Trie-based HTTP router demo", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the demo application
    Serve {
        /// Listen address (overrides TRIE_ADDR)
        #[arg(long)]
        addr: Option<String>,
    },
    /// Print registered routes of the demo application
    Routes {
        /// Only list routes for this HTTP method
        #[arg(short, long)]
        method: Option<String>,
    },
}

/// Render the route table as `METHOD pattern` lines, sorted by method.
#[must_use]
pub fn route_lines(engine: &Engine, only: Option<&Method>) -> Vec<String> {
    let router = engine.router();
    let mut methods: Vec<&Method> = match only {
        Some(method) => vec![method],
        None => router.methods().collect(),
    };
    methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    methods
        .into_iter()
        .flat_map(|method| {
            router
                .routes(method)
                .into_iter()
                .map(move |node| format!("{method} {}", node.pattern()))
        })
        .collect()
}

/// Execute a parsed command line.
///
/// # Errors
///
/// Returns an error for an unparseable `--method`, or if the server cannot
/// bind or stops abnormally.
pub fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { addr } => {
            let mut config = RuntimeConfig::from_env();
            if let Some(addr) = addr {
                config.addr = addr;
            }
            config.apply();
            info!(addr = %config.addr, stack_size = config.stack_size, "Starting demo server");

            demo_engine()
                .run(config.addr.as_str())
                .with_context(|| format!("server on {} failed", config.addr))
        }
        Commands::Routes { method } => {
            let method = method
                .map(|m| {
                    m.to_ascii_uppercase()
                        .parse::<Method>()
                        .map_err(|e| anyhow!("invalid method '{m}': {e}"))
                })
                .transpose()?;
            for line in route_lines(&demo_engine(), method.as_ref()) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
