use std::sync::Arc;

use crate::core::{Commit, START_HASH};
use crate::layout::pipe::{Pipe, PipeKind, PipeSet};
use crate::layout::pipe_set_builder::next_pipes;
use crate::render::Style;

/// Build one pipe set per commit, in the order given.
///
/// `commits` must list every commit before its parents. Each row is computed
/// from the row above, so this runs sequentially.
pub fn get_pipe_sets<F>(commits: &[Commit], style_of: F) -> Vec<PipeSet>
where
    F: Fn(&Commit) -> Style,
{
    let Some(first) = commits.first() else {
        return Vec::new();
    };

    let seed = vec![Pipe {
        from_lane: 0,
        to_lane: 0,
        from_hash: Arc::from(START_HASH),
        to_hash: Arc::from(first.hash.as_str()),
        kind: PipeKind::Starts,
        style: Style::default(),
    }];

    let mut pipe_sets: Vec<PipeSet> = Vec::with_capacity(commits.len());
    for commit in commits {
        let prev = pipe_sets.last().unwrap_or(&seed);
        let next = next_pipes(prev, commit, &style_of);
        pipe_sets.push(next);
    }
    pipe_sets
}
