use crate::render::Style;

/// Glyph set used to draw connectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Rounded box-drawing characters
    #[default]
    Rounded,
    /// ASCII fallback
    Ascii,
}

pub mod symbols {
    pub const COMMIT: char = '◯';
    pub const MERGE: char = '⏣';
    pub const ASCII_COMMIT: char = '*';
    pub const ASCII_MERGE: char = 'M';
}

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Connection,
    Commit,
    Merge,
}

/// One lane's render state for a single row.
///
/// A cell is two columns wide: the connector (or commit symbol) and a
/// horizontal filler towards the next lane.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub cell_type: CellType,
    pub style: Style,
    /// Style of the filler; the cell style when unset
    pub right_style: Option<Style>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            cell_type: CellType::Connection,
            style: Style::default(),
            right_style: None,
        }
    }
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear connectors, keeping styles and type
    pub fn reset(&mut self) {
        self.up = false;
        self.down = false;
        self.left = false;
        self.right = false;
    }

    pub fn set_up(&mut self, style: Style) -> &mut Self {
        self.up = true;
        self.style = style;
        self
    }

    pub fn set_down(&mut self, style: Style) -> &mut Self {
        self.down = true;
        self.style = style;
        self
    }

    pub fn set_left(&mut self, style: Style) -> &mut Self {
        self.left = true;
        // vertical trumps left
        if !self.up && !self.down {
            self.style = style;
        }
        self
    }

    pub fn set_right(&mut self, style: Style, override_style: bool) -> &mut Self {
        self.right = true;
        if self.right_style.is_none() || override_style {
            self.right_style = Some(style);
        }
        self
    }

    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    pub fn set_type(&mut self, cell_type: CellType) -> &mut Self {
        self.cell_type = cell_type;
        self
    }

    /// Append this cell's two columns to `out`
    pub fn render(&self, out: &mut String, charset: Charset) {
        let (connector, filler) = match charset {
            Charset::Rounded => box_drawing_chars(self.up, self.down, self.left, self.right),
            Charset::Ascii => ascii_chars(self.up, self.down, self.left, self.right),
        };

        let first = match (self.cell_type, charset) {
            (CellType::Connection, _) => connector,
            (CellType::Commit, Charset::Rounded) => symbols::COMMIT,
            (CellType::Merge, Charset::Rounded) => symbols::MERGE,
            (CellType::Commit, Charset::Ascii) => symbols::ASCII_COMMIT,
            (CellType::Merge, Charset::Ascii) => symbols::ASCII_MERGE,
        };

        out.push_str(&self.style.apply(first).to_string());
        if filler == ' ' {
            // a blank filler carries no style so plain output stays plain
            out.push(' ');
        } else {
            let right_style = self.right_style.unwrap_or(self.style);
            out.push_str(&right_style.apply(filler).to_string());
        }
    }
}

/// (connector, filler) for a combination of up/down/left/right
fn box_drawing_chars(up: bool, down: bool, left: bool, right: bool) -> (char, char) {
    match (up, down, left, right) {
        (true, true, _, true) => ('│', '─'),
        (true, true, _, false) => ('│', ' '),
        (true, false, true, true) => ('┴', '─'),
        (true, false, true, false) => ('╯', ' '),
        (true, false, false, true) => ('╰', '─'),
        (true, false, false, false) => ('╵', ' '),
        (false, true, true, true) => ('┬', '─'),
        (false, true, true, false) => ('╮', ' '),
        (false, true, false, true) => ('╭', '─'),
        (false, true, false, false) => ('╷', ' '),
        (false, false, true, true) => ('─', '─'),
        (false, false, true, false) => ('─', ' '),
        (false, false, false, true) => ('╶', '─'),
        (false, false, false, false) => (' ', ' '),
    }
}

fn ascii_chars(up: bool, down: bool, left: bool, right: bool) -> (char, char) {
    let filler = if right { '-' } else { ' ' };
    let connector = match (up, down, left, right) {
        (false, false, false, false) => ' ',
        (true, true, _, _) | (true, false, false, false) | (false, true, false, false) => '|',
        (false, false, _, _) => '-',
        (true, false, false, true) | (false, true, true, false) => '\\',
        (true, false, true, false) | (false, true, false, true) => '/',
        _ => '+',
    };
    (connector, filler)
}
