use std::{fs, path::Path, process::Command};

use tempfile::tempdir;

fn add_to_path(home: &Path, shell: Option<&str>) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_add-to-path"));
    command.env("HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    match shell {
        Some(shell) => command.env("SHELL", shell),
        None => command.env_remove("SHELL"),
    };
    command
}

#[test]
fn missing_argument_exits_with_one() {
    let home = tempdir().expect("create home dir");

    let output = add_to_path(home.path(), Some("/bin/bash"))
        .output()
        .expect("run add-to-path");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please provide a folder path as an argument"));
}

#[test]
fn missing_target_exits_with_one_and_leaves_config_alone() {
    let home = tempdir().expect("create home dir");
    let bashrc = home.path().join(".bashrc");
    fs::write(&bashrc, "alias ll='ls -l'\n").expect("write bashrc");

    let output = add_to_path(home.path(), Some("/bin/bash"))
        .arg(home.path().join("nope"))
        .output()
        .expect("run add-to-path");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Target directory not found"));
    assert_eq!(
        fs::read_to_string(&bashrc).expect("read bashrc"),
        "alias ll='ls -l'\n"
    );
}

#[test]
fn unset_shell_reports_no_supported_config() {
    let home = tempdir().expect("create home dir");
    fs::write(home.path().join(".zshrc"), "").expect("write zshrc");
    let target = tempdir().expect("create target dir");

    let output = add_to_path(home.path(), None)
        .arg(target.path())
        .output()
        .expect("run add-to-path");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No supported shell configuration files found"));
    assert_eq!(
        fs::read_to_string(home.path().join(".zshrc")).expect("read zshrc"),
        ""
    );
}

#[test]
fn adds_then_reports_already_present() {
    let home = tempdir().expect("create home dir");
    let zshrc = home.path().join(".zshrc");
    fs::write(&zshrc, "export EDITOR=vim\n").expect("write zshrc");
    let target = tempdir().expect("create target dir");
    let target_text = target.path().to_string_lossy().into_owned();

    let first = add_to_path(home.path(), Some("/usr/bin/zsh"))
        .arg(target.path())
        .output()
        .expect("run add-to-path");
    assert_eq!(first.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.contains(&format!("Added {target_text} to PATH in")));
    assert!(stdout.contains("PATH updated successfully"));

    let after_first = fs::read_to_string(&zshrc).expect("read zshrc");
    assert!(after_first.contains(&format!("export PATH=\"$PATH:{target_text}\"")));

    let second = add_to_path(home.path(), Some("/usr/bin/zsh"))
        .arg(target.path())
        .output()
        .expect("run add-to-path");
    assert_eq!(second.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains(&format!("Path {target_text} already in")));
    assert_eq!(fs::read_to_string(&zshrc).expect("read zshrc"), after_first);
}

#[test]
fn continue_on_error_still_fails_the_run() {
    let home = tempdir().expect("create home dir");
    fs::create_dir(home.path().join(".bashrc")).expect("create unreadable bashrc");
    let profile = home.path().join(".bash_profile");
    fs::write(&profile, "").expect("write bash_profile");
    let target = tempdir().expect("create target dir");

    let output = add_to_path(home.path(), Some("/bin/bash"))
        .arg("--continue-on-error")
        .arg(target.path())
        .output()
        .expect("run add-to-path");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Failed to update"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not be updated"));
    assert!(
        fs::read_to_string(&profile)
            .expect("read bash_profile")
            .contains(&*target.path().to_string_lossy())
    );
}

#[test]
fn fail_fast_still_reports_files_updated_before_the_fault() {
    let home = tempdir().expect("create home dir");
    let bashrc = home.path().join(".bashrc");
    fs::write(&bashrc, "").expect("write bashrc");
    fs::create_dir(home.path().join(".bash_profile")).expect("create unreadable bash_profile");
    let target = tempdir().expect("create target dir");
    let target_text = target.path().to_string_lossy().into_owned();

    let output = add_to_path(home.path(), Some("/bin/bash"))
        .arg(target.path())
        .output()
        .expect("run add-to-path");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!(
        "Added {target_text} to PATH in {}",
        bashrc.display()
    )));
    assert!(!stdout.contains("PATH updated successfully"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read shell config file"));
}

#[test]
fn relative_target_is_resolved_against_working_directory() {
    let home = tempdir().expect("create home dir");
    let zshrc = home.path().join(".zshrc");
    fs::write(&zshrc, "").expect("write zshrc");
    let work = tempdir().expect("create working dir");
    fs::create_dir_all(work.path().join("tools/bin")).expect("create target dir");
    let work_dir = fs::canonicalize(work.path()).expect("canonicalize working dir");
    let expected = work_dir.join("tools/bin").to_string_lossy().into_owned();

    let output = add_to_path(home.path(), Some("/usr/bin/zsh"))
        .current_dir(work.path())
        .arg("./tools/../tools/bin")
        .output()
        .expect("run add-to-path");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(&zshrc).expect("read zshrc"),
        format!("\n\n# Added by add-to-path\nexport PATH=\"$PATH:{expected}\"")
    );
}
