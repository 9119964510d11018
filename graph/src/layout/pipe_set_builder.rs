use std::sync::Arc;

use crate::core::{equal_hashes, Commit, Lane, LaneSet, EMPTY_TREE_HASH};
use crate::layout::pipe::{Pipe, PipeKind};
use crate::render::Style;

/// Lane bookkeeping for the row being built.
///
/// A taken lane is one a pipe ends on. A traversed lane is one a pipe
/// starts on, ends on, or passes through.
struct LaneTracker {
    taken: LaneSet,
    traversed: LaneSet,
}

impl LaneTracker {
    fn new() -> Self {
        Self {
            taken: LaneSet::new(),
            traversed: LaneSet::new(),
        }
    }

    fn traverse(&mut self, from: Lane, to: Lane) {
        self.traversed.insert_span(from, to);
        self.taken.insert(to);
    }

    fn is_blocked(&self, lane: Lane) -> bool {
        self.taken.contains(lane) || self.traversed.contains(lane)
    }
}

/// Compute the pipes for `commit`'s row from the pipes of the row above.
///
/// `prev_pipes` must be sorted the way this function sorts its output; the
/// first row is seeded by [`crate::layout::get_pipe_sets`].
pub fn next_pipes<F>(prev_pipes: &[Pipe], commit: &Commit, style_of: &F) -> Vec<Pipe>
where
    F: Fn(&Commit) -> Style,
{
    let max_lane = prev_pipes.iter().map(|pipe| pipe.to_lane).max().unwrap_or(0);

    // a pipe that terminated on the previous row has no bearing on this one
    let current: Vec<&Pipe> = prev_pipes
        .iter()
        .filter(|pipe| pipe.kind != PipeKind::Terminates)
        .collect();

    let ends_here = |pipe: &Pipe| equal_hashes(&pipe.to_hash, &commit.hash);

    // without a descendant in view (e.g. `git log --all`) the commit goes on
    // a fresh lane at the far right
    let pos = current
        .iter()
        .find(|pipe| ends_here(**pipe))
        .map(|pipe| pipe.to_lane)
        .unwrap_or(max_lane + 1);

    let commit_hash: Arc<str> = Arc::from(commit.hash.as_str());
    let mut pipes = Vec::with_capacity(current.len() + commit.parents.len());
    let mut lanes = LaneTracker::new();

    let first_parent = commit
        .parents
        .first()
        .map(String::as_str)
        .unwrap_or(EMPTY_TREE_HASH);
    pipes.push(Pipe {
        from_lane: pos,
        to_lane: pos,
        from_hash: commit_hash.clone(),
        to_hash: Arc::from(first_parent),
        kind: PipeKind::Starts,
        style: style_of(commit),
    });
    lanes.taken.insert(pos);

    // lanes still held by pipes that carry on past this commit
    let mut continuing = LaneSet::new();
    for pipe in current.iter().filter(|pipe| !ends_here(**pipe)) {
        continuing.insert(pipe.to_lane);
    }

    for &pipe in &current {
        if ends_here(pipe) {
            pipes.push(Pipe {
                from_lane: pipe.to_lane,
                to_lane: pos,
                from_hash: pipe.from_hash.clone(),
                to_hash: pipe.to_hash.clone(),
                kind: PipeKind::Terminates,
                style: pipe.style,
            });
            lanes.traverse(pipe.to_lane, pos);
        } else if pipe.to_lane < pos {
            let lane = lanes.traversed.first_vacant();
            pipes.push(Pipe {
                from_lane: pipe.to_lane,
                to_lane: lane,
                from_hash: pipe.from_hash.clone(),
                to_hash: pipe.to_hash.clone(),
                kind: PipeKind::Continues,
                style: pipe.style,
            });
            lanes.traverse(pipe.to_lane, lane);
        }
    }

    if commit.is_merge() {
        for parent in &commit.parents[1..] {
            // a new pipe may not land on a taken lane, nor on one a
            // continuing pipe still occupies
            let lane = lanes.taken.first_vacant_in_both(&continuing);
            pipes.push(Pipe {
                from_lane: pos,
                to_lane: lane,
                from_hash: commit_hash.clone(),
                to_hash: Arc::from(parent.as_str()),
                kind: PipeKind::Starts,
                style: style_of(commit),
            });
            lanes.taken.insert(lane);
        }
    }

    for pipe in current
        .iter()
        .filter(|pipe| !ends_here(**pipe) && pipe.to_lane > pos)
    {
        // slide left into free lanes, never onto the commit's own lane
        let mut last = pipe.to_lane;
        for lane in (pos + 1..=pipe.to_lane).rev() {
            if lanes.is_blocked(lane) {
                break;
            }
            last = lane;
        }
        pipes.push(Pipe {
            from_lane: pipe.to_lane,
            to_lane: last,
            from_hash: pipe.from_hash.clone(),
            to_hash: pipe.to_hash.clone(),
            kind: PipeKind::Continues,
            style: pipe.style,
        });
        lanes.traverse(pipe.to_lane, last);
    }

    pipes.sort_by(|a, b| a.sort_key(b));
    pipes
}
