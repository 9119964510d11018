use crossterm::style::{Attribute, Color, ContentStyle};

/// Display style of a pipe or cell
pub type Style = ContentStyle;

/// Style the selected commit's pipes are drawn in
pub fn highlight_style() -> Style {
    ContentStyle {
        foreground_color: Some(Color::White),
        attributes: Attribute::Bold.into(),
        ..ContentStyle::default()
    }
}

/// Style with only a foreground colour
#[cfg(test)]
pub(crate) fn fg(color: Color) -> Style {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}
