use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use newtype_manifest::NewtypeToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to newtype.toml (defaults to ./newtype.toml)
    #[arg(short, long, default_value = "newtype.toml")]
    pub config: PathBuf,

    /// Only explain this alias (plain or namespace-qualified name)
    #[arg(short, long)]
    pub alias: Option<String>,

    /// Print the extracted descriptors as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let newtype_toml = NewtypeToml::open(&self.config).unwrap_or_exit();

        let report = ops::explain(
            newtype_toml.manifest(),
            &self.config,
            self.alias.as_deref(),
        )?;

        if self.json {
            let json = serde_json::to_string_pretty(&report.descriptors)
                .wrap_err("Failed to serialize descriptors")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
