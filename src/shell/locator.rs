use std::path::PathBuf;

use eyre::eyre;

use super::{ShellConfigTable, ShellFamily};
use crate::constants::SHELL_ENV_VAR;

/// Finds the startup files of the user's login shell that exist on disk.
#[derive(Debug, Clone)]
pub struct ShellConfigLocator {
    table: ShellConfigTable,
    home_dir: PathBuf,
    shell: String,
}

impl ShellConfigLocator {
    pub fn new(table: ShellConfigTable, home_dir: PathBuf, shell: Option<String>) -> Self {
        Self {
            table,
            home_dir,
            shell: shell.unwrap_or_default(),
        }
    }

    /// Build a locator from `$SHELL` and the current user's home directory.
    pub fn from_env(table: ShellConfigTable) -> eyre::Result<Self> {
        let user_dirs =
            directories::UserDirs::new().ok_or_else(|| eyre!("Failed to get user directories"))?;
        let shell = std::env::var(SHELL_ENV_VAR).ok();

        Ok(Self::new(table, user_dirs.home_dir().to_path_buf(), shell))
    }

    pub fn family(&self) -> ShellFamily {
        ShellFamily::detect(&self.shell)
    }

    /// Absolute paths of the family's config files that currently exist, in table order.
    ///
    /// An empty result is not an error here; the caller decides what it means.
    pub fn locate(&self) -> Vec<PathBuf> {
        let family = self.family();
        tracing::debug!("Detected shell family '{family}' from '{}'", self.shell);

        self.table
            .candidates(family)
            .iter()
            .map(|relative| self.home_dir.join(relative))
            .filter(|path| {
                let exists = path.exists();
                tracing::debug!("Shell config candidate {} exists: {exists}", path.display());
                exists
            })
            .collect()
    }
}
