pub const PROGRAM_NAME: &str = "add-to-path";

/// Anchor line grouping every PATH entry this tool writes into a config file.
pub const MARKER: &str = "# Added by add-to-path";

/// Environment variable holding the user's login shell.
pub const SHELL_ENV_VAR: &str = "SHELL";

pub const BASH_CONFIG_FILES: &[&str] = &[".bashrc", ".bash_profile"];
pub const ZSH_CONFIG_FILES: &[&str] = &[".zshrc"];
pub const FISH_CONFIG_FILES: &[&str] = &[".config/fish/config.fish"];
