use std::path::Path;

use crate::constants::MARKER;

/// The statement that adds `dir` to PATH in the dialect of `config_file`.
pub fn path_line(config_file: &Path, dir: &str) -> String {
    if config_file.to_string_lossy().contains("fish") {
        format!("fish_add_path {dir}")
    } else {
        format!("export PATH=\"$PATH:{dir}\"")
    }
}

/// Where a new PATH line goes in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Right below the first marker line.
    AfterMarker,
    /// At the end of the file, under a fresh marker.
    AppendBlock,
}

impl Placement {
    pub fn for_content(content: &str) -> Self {
        if content.contains(MARKER) {
            Self::AfterMarker
        } else {
            Self::AppendBlock
        }
    }
}

/// Returns `content` with `line` spliced in according to `placement`.
pub fn splice(content: &str, line: &str, placement: Placement) -> String {
    match placement {
        Placement::AfterMarker => content.replacen(MARKER, &format!("{MARKER}\n{line}"), 1),
        Placement::AppendBlock => format!("{content}\n\n{MARKER}\n{line}"),
    }
}
