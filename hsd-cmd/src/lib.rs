//! Command implementations for the HSD CLI.
//!
//! Both subcommands run the same loaders the browser dashboard uses, with a
//! `reqwest` fetcher in place of `window.fetch()`.

use clap::Subcommand;
use hsd_survey::config::DEFAULT_API_BASE;

pub mod check;
pub mod snapshot;

#[derive(Subcommand)]
pub enum Command {
    /// Load every chart and write its Plotly spec to a directory
    Snapshot {
        /// Base URL of the survey API
        #[arg(short = 'b', long, default_value = DEFAULT_API_BASE)]
        base_url: String,

        /// Directory for `<container-id>.json` / `<container-id>.error.html` files
        #[arg(short = 'o', long)]
        out_dir: String,
    },

    /// Load every chart and report which ones would render
    Check {
        /// Base URL of the survey API
        #[arg(short = 'b', long, default_value = DEFAULT_API_BASE)]
        base_url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Snapshot { base_url, out_dir } => {
            snapshot::run_snapshot(&base_url, &out_dir).await
        }
        Command::Check { base_url } => check::run_check(&base_url).await,
    }
}
