use anyhow::Result;
use clap::Parser;
use yearcal::cli::Cli;
use yearcal::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let html = cli.render()?;
    println!("{html}");

    Ok(())
}
