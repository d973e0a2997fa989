mod add;

pub use add::add;
