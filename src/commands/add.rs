use std::path::{Path, PathBuf};

use color_eyre::Section;
use eyre::{WrapErr, eyre};

use crate::{
    constants::PROGRAM_NAME,
    inject::{FailureMode, FileOutcome, InjectError, InjectionReport, PathInjector, resolve_target},
    shell::{ShellConfigLocator, ShellConfigTable},
    utils::ui::UserInterface,
};

pub fn add(path: Option<PathBuf>, failure_mode: FailureMode) -> eyre::Result<()> {
    let Some(path) = path else {
        return Err(eyre!("Please provide a folder path as an argument")
            .suggestion(format!("Usage: {PROGRAM_NAME} <folder_path>")));
    };

    let locator = prepare(&path, || {
        ShellConfigLocator::from_env(ShellConfigTable::default())
            .wrap_err("Failed to prepare shell configuration lookup")
    })?;

    let report = match PathInjector::new(&locator, failure_mode).inject(&path) {
        Ok(report) => report,
        Err(err @ InjectError::NoSupportedShellConfig) => {
            return Err(eyre!(err).suggestion(format!(
                "Detected shell '{}'. Supported shells are bash, zsh and fish, and their \
                 configuration file must already exist in your home directory.",
                locator.family()
            )));
        }
        Err(InjectError::Aborted { report, source }) => {
            print_report(&report, false).wrap_err("Failed to write report")?;
            return Err(eyre!(*source));
        }
        Err(err) => return Err(eyre!(err)),
    };

    let failed = report.failures().count();
    print_report(&report, failed == 0).wrap_err("Failed to write report")?;

    if failed > 0 {
        return Err(eyre!(
            "{failed} shell configuration file(s) could not be updated"
        ));
    }

    Ok(())
}

/// Checks the target before the shell lookup is built, so a missing target wins over lookup errors.
fn prepare<F>(path: &Path, make_locator: F) -> eyre::Result<ShellConfigLocator>
where
    F: FnOnce() -> eyre::Result<ShellConfigLocator>,
{
    resolve_target(path).map_err(|e| eyre!(e))?;
    make_locator()
}

fn print_report(report: &InjectionReport, finished: bool) -> std::io::Result<()> {
    let ui = UserInterface::new();
    let target = report.target.display();

    for file in &report.files {
        let config_file = file.config_file.display();
        match &file.outcome {
            FileOutcome::Added => {
                ui.success_item(&format!("Added {target} to PATH in {config_file}"), None)?
            }
            FileOutcome::AlreadyPresent => {
                ui.info_item(&format!("Path {target} already in {config_file}"))?
            }
            FileOutcome::Failed(
                InjectError::Read { source, .. } | InjectError::Write { source, .. },
            ) => ui.error_item(
                &format!("Failed to update {config_file}"),
                Some(&source.to_string()),
            )?,
            FileOutcome::Failed(err) => ui.error_item(
                &format!("Failed to update {config_file}"),
                Some(&err.to_string()),
            )?,
        }
    }

    if finished {
        ui.new_line()?;
        ui.writeln(
            "PATH updated successfully. Please restart your terminal or source the modified files.",
        )?;
    }

    Ok(())
}
