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
pub struct CleanCommand {
    /// Path to newtype.toml (defaults to ./newtype.toml)
    #[arg(short, long, default_value = "newtype.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to [output].dir in newtype.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let newtype_toml = NewtypeToml::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| newtype_toml.output_dir());

        let report = ops::clean(
            newtype_toml.manifest(),
            ops::clean::CleanOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
