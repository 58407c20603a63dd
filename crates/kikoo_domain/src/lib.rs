mod console;
mod line;

pub use console::*;
pub use line::*;
