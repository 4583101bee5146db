//! Print masked weather API credentials and the provider the service will use.

use clap::Parser;
use envcheck_cli::{cli::CheckWeatherConfigCli, logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    let cmd = CheckWeatherConfigCli::parse();
    cmd.run()
}
