//! Column schemes and box-drawing glyphs

/// Horizontal alignment of a cell's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    /// Only used for the empty-directory message
    Center,
}

/// One fixed-width field of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub width: usize,
    pub alignment: Alignment,
}

impl Column {
    const fn new(name: &'static str, width: usize, alignment: Alignment) -> Self {
        Column {
            name,
            width,
            alignment,
        }
    }
}

const COMPACT_COLUMNS: [Column; 4] = [
    Column::new("#", 4, Alignment::Right),
    Column::new("Name", 30, Alignment::Left),
    Column::new("Type", 10, Alignment::Left),
    Column::new("Size", 12, Alignment::Right),
];

const LONG_COLUMNS: [Column; 4] = [
    Column::new("Permissions", 10, Alignment::Left),
    Column::new("Size", 12, Alignment::Right),
    Column::new("Modified", 20, Alignment::Left),
    Column::new("Name", 30, Alignment::Left),
];

/// Table layout selected by the `-l` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Compact,
    Long,
}

impl DisplayMode {
    /// The mode's columns, in display order.
    ///
    /// Row rendering indexes these positionally, so both modes have exactly four.
    pub fn columns(&self) -> &'static [Column; 4] {
        match self {
            DisplayMode::Compact => &COMPACT_COLUMNS,
            DisplayMode::Long => &LONG_COLUMNS,
        }
    }

    /// Rendered line width in characters, borders included
    pub fn line_width(&self) -> usize {
        let columns = self.columns();
        columns.iter().map(|c| c.width).sum::<usize>() + columns.len() + 1
    }
}

/// Glyphs used to draw table borders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
    /// ┬
    pub t_down: &'static str,
    /// ┴
    pub t_up: &'static str,
    /// ├
    pub t_right: &'static str,
    /// ┤
    pub t_left: &'static str,
    pub cross: &'static str,
}

impl Default for BoxChars {
    fn default() -> Self {
        BoxChars {
            top_left: "┌",
            top_right: "┐",
            bottom_left: "└",
            bottom_right: "┘",
            horizontal: "─",
            vertical: "│",
            t_down: "┬",
            t_up: "┴",
            t_right: "├",
            t_left: "┤",
            cross: "┼",
        }
    }
}
