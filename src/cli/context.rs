//! Command execution context

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::model::{Config, Justfile};
use crate::utils::path::{check_file_readable, find_justfile, working_dir};

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub justfile_path: PathBuf,
    pub justfile: Justfile,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_config()?;

        let justfile_path = match &cli.file {
            Some(path) => {
                check_file_readable(path)?;
                path.clone()
            }
            None => {
                let cwd = std::env::current_dir().context("Cannot determine working directory")?;
                find_justfile(&cwd)?
            }
        };

        let justfile = read_justfile(&justfile_path)?;

        Ok(Self {
            config,
            justfile_path,
            justfile,
        })
    }

    /// Directory the build tool runs in
    pub fn working_dir(&self) -> PathBuf {
        working_dir(&self.justfile_path)
    }
}

/// Open and parse a justfile
pub fn read_justfile(path: &Path) -> Result<Justfile> {
    let file = File::open(path)
        .with_context(|| format!("opening justfile {}", path.display()))?;
    let justfile = crate::parser::parse_reader(BufReader::new(file))?;

    log::debug!(
        "parsed {}: {} recipes, {} variables, {} aliases",
        path.display(),
        justfile.recipes.len(),
        justfile.variables.len(),
        justfile.aliases.len()
    );

    Ok(justfile)
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
