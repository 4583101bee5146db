//! Print the `.env` configuration source with sensitive values hidden.

use clap::Parser;
use envcheck_cli::{cli::CheckEnvCli, logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    let cmd = CheckEnvCli::parse();
    cmd.run()
}
