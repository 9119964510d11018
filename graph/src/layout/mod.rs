pub mod assembler;
pub mod pipe;
pub mod pipe_set_builder;

pub use assembler::get_pipe_sets;
pub use pipe::{contains_commit_hash, Pipe, PipeKind, PipeSet};
pub use pipe_set_builder::next_pipes;
