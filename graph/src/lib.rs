//! Commit graph rendering for terminal git clients.
//!
//! Turns an ordered commit history into the column of box-drawing glyphs
//! drawn beside a commit log. Lane assignment runs as a sequential fold over
//! the commits; the resulting rows are then rendered in parallel.

pub mod core;
pub mod engine;
pub mod input;
pub mod layout;
pub mod render;

pub use crate::core::{equal_hashes, Commit, Lane, LaneSet, EMPTY_TREE_HASH, START_HASH};
pub use engine::{render_commit_graph, render_commit_graph_with, RenderOptions};
pub use input::{parse_commit_list, ParseError};
pub use layout::{contains_commit_hash, get_pipe_sets, next_pipes, Pipe, PipeKind, PipeSet};
pub use render::{highlight_style, render_pipe_set, render_rows, Charset, Style};
