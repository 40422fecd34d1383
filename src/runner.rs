//! Hand a generated Makefile to the build tool
//!
//! The Makefile lives in a [`NamedTempFile`] for exactly as long as the
//! build tool needs it; the file is removed when the handle drops, on the
//! error paths as well.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

use crate::error::Error;
use crate::model::MakeConfig;

/// A fully resolved build tool command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub dir: PathBuf,
}

impl Invocation {
    /// `<program> <extra_args...> -f <makefile> <target> <name=value...>`
    pub fn new(
        config: &MakeConfig,
        makefile: &Path,
        target: &str,
        assignments: &[String],
        dir: &Path,
    ) -> Self {
        let mut args = config.extra_args.clone();
        args.push("-f".to_string());
        args.push(makefile.display().to_string());
        args.push(target.to_string());
        args.extend(assignments.iter().cloned());

        Self {
            program: config.program.clone(),
            args,
            dir: dir.to_path_buf(),
        }
    }

    /// Printable form for `--dry-run`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run with inherited stdio and wait for the exit status.
    pub fn execute(&self) -> Result<()> {
        log::info!("running `{}` in {}", self.command_line(), self.dir.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.dir)
            .status()
            .with_context(|| format!("Failed to start '{}'", self.program))?;

        if !status.success() {
            return Err(Error::BuildFailed {
                program: self.program.clone(),
                status: status.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Write `content` to a fresh `jmake-*.mk` temp file.
pub fn write_temp_makefile(content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("jmake-")
        .suffix(".mk")
        .tempfile()
        .context("Failed to create temp makefile")?;

    file.write_all(content.as_bytes())
        .context("Failed to write temp makefile")?;
    file.flush().context("Failed to write temp makefile")?;

    log::debug!("wrote makefile to {}", file.path().display());
    Ok(file)
}

/// Materialize the Makefile, then either print or execute the invocation.
pub fn run(
    config: &MakeConfig,
    makefile: &str,
    target: &str,
    assignments: &[String],
    dir: &Path,
    dry_run: bool,
) -> Result<()> {
    let temp = write_temp_makefile(makefile)?;
    let invocation = Invocation::new(config, temp.path(), target, assignments, dir);

    if dry_run {
        println!("{}", invocation.command_line());
        return Ok(());
    }

    invocation.execute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_args() {
        let config = MakeConfig::default();
        let inv = Invocation::new(
            &config,
            Path::new("/tmp/jmake-x.mk"),
            "deploy",
            &["env=prod".to_string(), "tag=v1".to_string()],
            Path::new("/srv/app"),
        );

        assert_eq!(inv.program, "make");
        assert_eq!(
            inv.args,
            vec![
                "--no-print-directory",
                "-f",
                "/tmp/jmake-x.mk",
                "deploy",
                "env=prod",
                "tag=v1"
            ]
        );
        assert_eq!(
            inv.command_line(),
            "make --no-print-directory -f /tmp/jmake-x.mk deploy env=prod tag=v1"
        );
        assert_eq!(inv.dir, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_temp_makefile_removed_on_drop() {
        let temp = write_temp_makefile("all:\n\t@true\n").unwrap();
        let path = temp.path().to_path_buf();

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "all:\n\t@true\n");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("jmake-"));
        assert!(name.ends_with(".mk"));

        drop(temp);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let config = MakeConfig {
            program: "jmake-no-such-build-tool".to_string(),
            ..MakeConfig::default()
        };
        let dir = std::env::temp_dir();
        let result = run(&config, "all:\n", "all", &[], &dir, false);
        assert!(result.is_err());
    }
}
