//! Parallel row rendering with scoped threads.

use std::panic;
use std::thread;

use crate::core::Commit;
use crate::layout::PipeSet;
use crate::render::cell::Charset;
use crate::render::row::render_pipe_set;

/// Render every row, splitting the work across `workers` threads.
///
/// Rows are cut into `workers` contiguous chunks of `len / workers` rows,
/// the last chunk taking the remainder. Each thread writes only its own
/// slice of the output, so the result is in row order whatever the worker
/// count.
pub fn render_rows(
    pipe_sets: &[PipeSet],
    commits: &[Commit],
    selected_hash: &str,
    workers: usize,
    charset: Charset,
) -> Vec<String> {
    let workers = workers.max(1);
    let mut lines = vec![String::new(); pipe_sets.len()];
    let per_worker = pipe_sets.len() / workers;

    tracing::debug!(rows = pipe_sets.len(), workers, per_worker, "rendering graph rows");

    // Split output into disjoint slices, one per worker
    let mut chunks = Vec::with_capacity(workers);
    let mut remaining = lines.as_mut_slice();
    let mut start = 0;
    for idx in 0..workers {
        let len = if idx == workers - 1 {
            remaining.len()
        } else {
            per_worker
        };
        let (chunk, rest) = remaining.split_at_mut(len);
        chunks.push((start, chunk));
        remaining = rest;
        start += len;
    }

    thread::scope(|s| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|(start, chunk)| {
                s.spawn(move || {
                    tracing::trace!(start, len = chunk.len(), "worker started");
                    for (offset, line) in chunk.iter_mut().enumerate() {
                        let row = start + offset;
                        let prev_commit = row.checked_sub(1).and_then(|prev| commits.get(prev));
                        *line =
                            render_pipe_set(&pipe_sets[row], selected_hash, prev_commit, charset);
                    }
                })
            })
            .collect();

        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
    });

    lines
}
