pub mod commit;
pub mod lanes;

pub use commit::{equal_hashes, Commit, EMPTY_TREE_HASH, START_HASH};
pub use lanes::{Lane, LaneSet};
