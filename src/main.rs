use anyhow::Result;
use clap::Parser;
use mensis::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
