pub mod cell;
pub mod parallel;
pub mod row;
pub mod style;

pub use cell::{Cell, CellType, Charset};
pub use parallel::render_rows;
pub use row::render_pipe_set;
pub use style::{highlight_style, Style};
