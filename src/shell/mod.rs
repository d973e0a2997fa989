mod family;
mod locator;

pub use family::{ShellConfigTable, ShellFamily};
pub use locator::ShellConfigLocator;
