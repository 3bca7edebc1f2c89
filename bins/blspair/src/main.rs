use blspair_cli::cmd::MainCmd;
use clap::Parser;
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    MainCmd::parse().run()?;

    Ok(())
}
