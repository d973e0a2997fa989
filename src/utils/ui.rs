use console::Term;

use super::theme::{Symbols, Theme};

/// Line-oriented report printer for the outcome of a run.
#[derive(Debug, Clone)]
pub struct UserInterface {
    term: Term,
    theme: Theme,
    symbols: Symbols,
}

impl UserInterface {
    pub fn new() -> Self {
        let theme = Theme::new();
        Self {
            term: Term::stdout(),
            symbols: Symbols::new(&theme),
            theme,
        }
    }

    pub fn writeln(&self, message: &str) -> std::io::Result<()> {
        self.term.write_line(message)
    }

    pub fn new_line(&self) -> std::io::Result<()> {
        self.term.write_line("")
    }

    pub fn success_item(&self, message: &str, suggestion: Option<&str>) -> std::io::Result<()> {
        self.item(&self.symbols.success, message, suggestion)
    }

    pub fn error_item(&self, message: &str, suggestion: Option<&str>) -> std::io::Result<()> {
        self.item(&self.symbols.error, message, suggestion)
    }

    pub fn info_item(&self, message: &str) -> std::io::Result<()> {
        self.item(&self.symbols.info, message, None)
    }

    fn item(&self, symbol: &str, message: &str, suggestion: Option<&str>) -> std::io::Result<()> {
        self.term.write_line(&format_item(
            &self.theme,
            &self.symbols,
            symbol,
            message,
            suggestion,
        ))
    }
}

fn format_item(
    theme: &Theme,
    symbols: &Symbols,
    symbol: &str,
    message: &str,
    suggestion: Option<&str>,
) -> String {
    let mut line = format!("{symbol} {message}");
    if let Some(suggestion) = suggestion {
        line.push('\n');
        line.push_str(&format!(
            "{}{} {}",
            theme.indent(1),
            symbols.arrow,
            theme.dim(suggestion)
        ));
    }
    line
}
