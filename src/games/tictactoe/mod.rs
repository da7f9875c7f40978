mod rules;
mod types;

pub use rules::LINES;
pub use types::{Board, CELLS, Cell, Mark};
