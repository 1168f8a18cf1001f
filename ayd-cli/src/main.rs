//! ayd - command line tool for the agricultural yield dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ayd",
    version,
    about = "Agricultural yield dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ayd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ayd_cmd::run(cli.command)
}
