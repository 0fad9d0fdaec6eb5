//! HSD CLI - Command line tool for exercising the dashboard loaders against a live survey API.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hsd-cli",
    version,
    about = "Health survey dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hsd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    hsd_cmd::run(cli.command).await
}
