pub mod path;
pub mod theme;
pub mod ui;
