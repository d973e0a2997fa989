use std::{fmt, path::PathBuf};

use crate::constants::{BASH_CONFIG_FILES, FISH_CONFIG_FILES, ZSH_CONFIG_FILES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFamily {
    Bash,
    Zsh,
    Fish,
    Unknown,
}

impl ShellFamily {
    /// Classify a shell identifier (usually the login shell binary path).
    ///
    /// Matching is a case-sensitive substring test, checked in the order
    /// zsh, bash, fish. The first hit wins.
    pub fn detect(shell: &str) -> Self {
        if shell.contains("zsh") {
            Self::Zsh
        } else if shell.contains("bash") {
            Self::Bash
        } else if shell.contains("fish") {
            Self::Fish
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for ShellFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Config files, relative to the home directory, that each shell family reads on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfigTable {
    bash: Vec<PathBuf>,
    zsh: Vec<PathBuf>,
    fish: Vec<PathBuf>,
}

impl ShellConfigTable {
    pub fn new(bash: Vec<PathBuf>, zsh: Vec<PathBuf>, fish: Vec<PathBuf>) -> Self {
        Self { bash, zsh, fish }
    }

    /// Ordered candidates for the given family. Unknown shells have none.
    pub fn candidates(&self, family: ShellFamily) -> &[PathBuf] {
        match family {
            ShellFamily::Bash => self.bash.as_slice(),
            ShellFamily::Zsh => self.zsh.as_slice(),
            ShellFamily::Fish => self.fish.as_slice(),
            ShellFamily::Unknown => &[],
        }
    }
}

impl Default for ShellConfigTable {
    fn default() -> Self {
        fn paths(files: &[&str]) -> Vec<PathBuf> {
            files.iter().map(PathBuf::from).collect()
        }

        Self::new(
            paths(BASH_CONFIG_FILES),
            paths(ZSH_CONFIG_FILES),
            paths(FISH_CONFIG_FILES),
        )
    }
}
