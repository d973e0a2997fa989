mod splice;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{shell::ShellConfigLocator, utils::path::absolutize};

pub use splice::{Placement, path_line, splice};

#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    #[error("Target directory not found: {}", .0.display())]
    TargetNotFound(PathBuf),
    #[error("No supported shell configuration files found")]
    NoSupportedShellConfig,
    #[error("Failed to determine the current directory")]
    CurrentDir(#[source] io::Error),
    #[error("Failed to read shell config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write shell config file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A file fault under [`FailureMode::FailFast`]. `report` holds the files handled before it.
    #[error("Stopped after {} shell config file(s)", report.files.len())]
    Aborted {
        report: InjectionReport,
        #[source]
        source: Box<InjectError>,
    },
}

/// What to do when a single config file cannot be read or written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Abort the whole run on the first failing file.
    #[default]
    FailFast,
    /// Record the failure and move on to the next file.
    ContinueOnError,
}

#[derive(Debug)]
pub enum FileOutcome {
    Added,
    AlreadyPresent,
    Failed(InjectError),
}

#[derive(Debug)]
pub struct FileReport {
    pub config_file: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug)]
pub struct InjectionReport {
    /// The resolved, absolute target directory.
    pub target: PathBuf,
    pub files: Vec<FileReport>,
}

impl InjectionReport {
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|file| matches!(file.outcome, FileOutcome::Failed(_)))
    }
}

/// Appends a directory to PATH in every config file the locator finds.
#[derive(Debug)]
pub struct PathInjector<'a> {
    locator: &'a ShellConfigLocator,
    failure_mode: FailureMode,
}

impl<'a> PathInjector<'a> {
    pub fn new(locator: &'a ShellConfigLocator, failure_mode: FailureMode) -> Self {
        Self {
            locator,
            failure_mode,
        }
    }

    /// Adds `target` to each located config file that does not mention it yet.
    ///
    /// Nothing is written unless `target` exists and at least one config file was found.
    pub fn inject(&self, target: &Path) -> Result<InjectionReport, InjectError> {
        let target = resolve_target(target)?;
        tracing::info!("Resolved target directory to {}", target.display());

        let config_files = self.locator.locate();
        if config_files.is_empty() {
            return Err(InjectError::NoSupportedShellConfig);
        }

        let target_text = target.to_string_lossy().into_owned();
        let mut files = Vec::with_capacity(config_files.len());

        for config_file in config_files {
            let outcome = match inject_into(&config_file, &target_text) {
                Ok(outcome) => outcome,
                Err(err) => match self.failure_mode {
                    FailureMode::FailFast => {
                        return Err(InjectError::Aborted {
                            report: InjectionReport { target, files },
                            source: Box::new(err),
                        });
                    }
                    FailureMode::ContinueOnError => {
                        tracing::warn!("Skipping {}: {err}", config_file.display());
                        FileOutcome::Failed(err)
                    }
                },
            };

            files.push(FileReport {
                config_file,
                outcome,
            });
        }

        Ok(InjectionReport { target, files })
    }
}

/// Makes `target` absolute against the current directory and checks that it exists.
pub fn resolve_target(target: &Path) -> Result<PathBuf, InjectError> {
    let base = if target.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().map_err(InjectError::CurrentDir)?
    };

    let resolved = absolutize(target, &base);
    match resolved.try_exists() {
        Ok(true) => Ok(resolved),
        _ => Err(InjectError::TargetNotFound(resolved)),
    }
}

fn inject_into(config_file: &Path, target: &str) -> Result<FileOutcome, InjectError> {
    let content = fs::read_to_string(config_file).map_err(|source| InjectError::Read {
        path: config_file.to_path_buf(),
        source,
    })?;

    // Plain substring match, so a mention inside a comment also counts.
    if content.contains(target) {
        tracing::info!("{target} already present in {}", config_file.display());
        return Ok(FileOutcome::AlreadyPresent);
    }

    let line = path_line(config_file, target);
    let placement = Placement::for_content(&content);
    tracing::debug!(
        "Inserting '{line}' into {} using {placement:?}",
        config_file.display()
    );

    fs::write(config_file, splice(&content, &line, placement)).map_err(|source| {
        InjectError::Write {
            path: config_file.to_path_buf(),
            source,
        }
    })?;

    Ok(FileOutcome::Added)
}
