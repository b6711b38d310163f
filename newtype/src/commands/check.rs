use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use newtype_manifest::NewtypeToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to newtype.toml (defaults to ./newtype.toml)
    #[arg(short, long, default_value = "newtype.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let newtype_toml = NewtypeToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(newtype_toml.manifest(), &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
