use std::num::NonZeroUsize;
use std::thread;

use crate::core::Commit;
use crate::layout::get_pipe_sets;
use crate::render::{render_rows, Charset, Style};

/// Knobs for [`render_commit_graph_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Worker threads for rendering; `None` uses the available parallelism
    pub workers: Option<usize>,
    pub charset: Charset,
}

impl RenderOptions {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Worker count to actually use, never zero
    pub fn resolved_workers(&self) -> usize {
        self.workers
            .unwrap_or_else(|| {
                thread::available_parallelism()
                    .map(NonZeroUsize::get)
                    .unwrap_or(1)
            })
            .max(1)
    }
}

/// Render the graph column for `commits`, one line per commit.
///
/// `selected_hash` may be empty for no selection. `style_of` is asked for the
/// style of every pipe a commit starts.
pub fn render_commit_graph<F>(
    commits: &[Commit],
    selected_hash: &str,
    style_of: F,
) -> Vec<String>
where
    F: Fn(&Commit) -> Style,
{
    render_commit_graph_with(commits, selected_hash, style_of, &RenderOptions::default())
}

pub fn render_commit_graph_with<F>(
    commits: &[Commit],
    selected_hash: &str,
    style_of: F,
    options: &RenderOptions,
) -> Vec<String>
where
    F: Fn(&Commit) -> Style,
{
    if commits.is_empty() {
        return Vec::new();
    }

    let workers = options.resolved_workers();
    let _span =
        tracing::debug_span!("render_commit_graph", commits = commits.len(), workers).entered();

    let pipe_sets = get_pipe_sets(commits, style_of);
    let width = pipe_sets
        .iter()
        .flat_map(|pipes| pipes.iter().map(|pipe| pipe.right() + 1))
        .max()
        .unwrap_or(0);
    tracing::debug!(width, "built pipe sets");

    render_rows(&pipe_sets, commits, selected_hash, workers, options.charset)
}
