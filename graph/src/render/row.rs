use crate::core::{equal_hashes, Commit, Lane};
use crate::layout::{Pipe, PipeKind};
use crate::render::cell::{Cell, CellType, Charset};
use crate::render::style::{highlight_style, Style};

/// Render one row's pipes into a line of text.
///
/// `prev_commit` is the commit on the row above, if any. Pipes sourced from
/// `selected_hash` are drawn last, in the highlight style.
pub fn render_pipe_set(
    pipes: &[Pipe],
    selected_hash: &str,
    prev_commit: Option<&Commit>,
    charset: Charset,
) -> String {
    let mut max_lane: Lane = 0;
    let mut commit_lane: Lane = 0;
    let mut start_count = 0;
    for pipe in pipes {
        match pipe.kind {
            PipeKind::Starts => {
                start_count += 1;
                commit_lane = pipe.from_lane;
            }
            PipeKind::Terminates => commit_lane = pipe.to_lane,
            PipeKind::Continues => {}
        }
        max_lane = max_lane.max(pipe.right());
    }
    let is_merge = start_count > 1;

    let mut cells = vec![Cell::new(); max_lane + 1];

    // Don't highlight two contiguous commits unless a visible pipe joins them.
    let mut highlight = true;
    if let Some(prev) = prev_commit {
        if equal_hashes(&prev.hash, selected_hash) {
            highlight = pipes.iter().any(|pipe| {
                equal_hashes(&pipe.from_hash, selected_hash) && !pipe.is_self_termination()
            });
        }
    }

    let (selected, others): (Vec<&Pipe>, Vec<&Pipe>) = pipes
        .iter()
        .partition(|pipe| highlight && equal_hashes(&pipe.from_hash, selected_hash));

    // starting pipes first so a branch's own colour wins where it appears
    for pipe in others.iter().filter(|pipe| pipe.kind == PipeKind::Starts) {
        paint(&mut cells, pipe, pipe.style, true);
    }

    for pipe in others.iter().filter(|pipe| pipe.kind != PipeKind::Starts) {
        let at_commit = pipe.is_self_termination() && pipe.to_lane == commit_lane;
        if !at_commit {
            paint(&mut cells, pipe, pipe.style, false);
        }
    }

    for pipe in &selected {
        for cell in &mut cells[pipe.left()..=pipe.right()] {
            cell.reset();
        }
    }
    for pipe in &selected {
        paint(&mut cells, pipe, highlight_style(), true);
        if pipe.to_lane == commit_lane {
            cells[pipe.to_lane].set_style(highlight_style());
        }
    }

    let cell_type = if is_merge {
        CellType::Merge
    } else {
        CellType::Commit
    };
    cells[commit_lane].set_type(cell_type);

    let mut line = String::with_capacity(cells.len() * 2);
    for cell in &cells {
        cell.render(&mut line, charset);
    }
    line
}

fn paint(cells: &mut [Cell], pipe: &Pipe, style: Style, override_right: bool) {
    let left = pipe.left();
    let right = pipe.right();

    if left != right {
        for cell in &mut cells[left + 1..right] {
            cell.set_left(style).set_right(style, override_right);
        }
        cells[left].set_right(style, override_right);
        cells[right].set_left(style);
    }

    if matches!(pipe.kind, PipeKind::Starts | PipeKind::Continues) {
        cells[pipe.to_lane].set_down(style);
    }
    if matches!(pipe.kind, PipeKind::Terminates | PipeKind::Continues) {
        cells[pipe.from_lane].set_up(style);
    }
}
