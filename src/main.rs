mod cli;
mod logging;
mod mcp;
mod report;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aics", about = "Score how much an AI shaped a chat transcript")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transcript from a file or stdin
    Analyze(cli::analyze::AnalyzeArgs),
    /// Start an MCP server exposing the analyzer as tools
    Serve,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(if cli.verbose { "debug" } else { "warn" });

    match cli.command {
        Commands::Analyze(args) => cli::analyze::run(&args)?,
        Commands::Serve => mcp::server::run()?,
    }

    Ok(())
}
