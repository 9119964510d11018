use std::cmp::Ordering;
use std::sync::Arc;

use crate::core::{equal_hashes, Lane};
use crate::render::Style;

/// Lifecycle of a pipe within its row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeKind {
    /// Ends on this row's commit
    Terminates,
    /// Leaves this row's commit towards a parent
    Starts,
    /// Passes through this row on its way to a later commit
    Continues,
}

impl PipeKind {
    /// Tie-break rank used when sorting pipes that share a destination lane.
    ///
    /// Terminating pipes sort first, then starting ones, then continuing
    /// ones. Rendering relies on this order, so it is spelled out here
    /// instead of following declaration order.
    pub fn ordinal(self) -> u8 {
        match self {
            PipeKind::Terminates => 0,
            PipeKind::Starts => 1,
            PipeKind::Continues => 2,
        }
    }
}

impl PartialOrd for PipeKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PipeKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

/// An edge segment valid for exactly one row
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub from_lane: Lane,
    pub to_lane: Lane,
    pub from_hash: Arc<str>,
    pub to_hash: Arc<str>,
    pub kind: PipeKind,
    pub style: Style,
}

/// All pipes active on one row, sorted by destination lane then kind
pub type PipeSet = Vec<Pipe>;

impl Pipe {
    pub fn left(&self) -> Lane {
        self.from_lane.min(self.to_lane)
    }

    pub fn right(&self) -> Lane {
        self.from_lane.max(self.to_lane)
    }

    /// A terminating pipe that does not move sideways
    pub fn is_self_termination(&self) -> bool {
        self.kind == PipeKind::Terminates && self.from_lane == self.to_lane
    }

    pub(crate) fn sort_key(&self, other: &Pipe) -> Ordering {
        self.to_lane
            .cmp(&other.to_lane)
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

/// Whether any pipe in the row originates from `hash`
pub fn contains_commit_hash(pipes: &[Pipe], hash: &str) -> bool {
    pipes.iter().any(|pipe| equal_hashes(&pipe.from_hash, hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe(from_lane: Lane, to_lane: Lane, from_hash: &str, kind: PipeKind) -> Pipe {
        Pipe {
            from_lane,
            to_lane,
            from_hash: Arc::from(from_hash),
            to_hash: Arc::from("parent"),
            kind,
            style: Style::default(),
        }
    }

    #[test]
    fn kind_ordinal_orders_terminates_first() {
        assert!(PipeKind::Terminates < PipeKind::Starts);
        assert!(PipeKind::Starts < PipeKind::Continues);

        let mut kinds = vec![PipeKind::Continues, PipeKind::Terminates, PipeKind::Starts];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![PipeKind::Terminates, PipeKind::Starts, PipeKind::Continues]
        );
    }

    #[test]
    fn left_and_right_ignore_direction() {
        let p = pipe(3, 1, "abc", PipeKind::Terminates);
        assert_eq!(p.left(), 1);
        assert_eq!(p.right(), 3);
        assert!(!p.is_self_termination());
        assert!(pipe(2, 2, "abc", PipeKind::Terminates).is_self_termination());
        assert!(!pipe(2, 2, "abc", PipeKind::Starts).is_self_termination());
    }

    #[test]
    fn membership_uses_prefix_equality() {
        let pipes = vec![
            pipe(0, 0, "abcdef", PipeKind::Starts),
            pipe(1, 1, "123456", PipeKind::Continues),
        ];
        assert!(contains_commit_hash(&pipes, "abc"));
        assert!(contains_commit_hash(&pipes, "1234567890"));
        assert!(!contains_commit_hash(&pipes, "fff"));
        assert!(!contains_commit_hash(&pipes, ""));
    }
}
