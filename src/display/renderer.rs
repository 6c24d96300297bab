//! Box renderer: turns classified entries into a bordered, colorized table

use super::colors::{ColorAssignment, ColorAttributes};
use super::format::{format_size, pad};
use super::layout::{Alignment, BoxChars, Column, DisplayMode};
use crate::domain::{Entry, EntryType};
use chrono::{DateTime, Local};
use std::io::{self, Write};

const EMPTY_BOX_WIDTH: usize = 20;
const EMPTY_MESSAGE: &str = "Empty";
const MODIFIED_FORMAT: &str = "%b %d %H:%M";

const DIR_PERMISSIONS: &str = "drwxr-xr-x";
const FILE_PERMISSIONS: &str = "-rw-r--r--";

#[derive(Debug, Clone, Copy)]
enum Border {
    Top,
    Bottom,
}

/// Renders entry listings as a box-drawing table
pub struct BoxRenderer {
    mode: DisplayMode,
    human_readable: bool,
    colors: ColorAssignment,
    chars: BoxChars,
    color_enabled: bool,
}

impl BoxRenderer {
    pub fn new(mode: DisplayMode, human_readable: bool, colors: ColorAssignment) -> Self {
        BoxRenderer {
            mode,
            human_readable,
            colors,
            chars: BoxChars::default(),
            color_enabled: true,
        }
    }

    /// Enables or disables ANSI color sequences in the output
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Builds the full table, stamping long-format rows with the current time.
    pub fn render(&self, entries: &[Entry]) -> String {
        self.render_at(entries, Local::now())
    }

    /// Builds the full table using `now` for the Modified column.
    pub fn render_at(&self, entries: &[Entry], now: DateTime<Local>) -> String {
        if entries.is_empty() {
            return self.render_empty();
        }

        let modified = now.format(MODIFIED_FORMAT).to_string();
        let mut lines = Vec::with_capacity(entries.len() + 4);

        lines.push(self.border(Border::Top));
        lines.push(self.header());
        lines.push(self.separator());
        for (index, entry) in entries.iter().enumerate() {
            lines.push(self.row(index, entry, &modified));
        }
        lines.push(self.border(Border::Bottom));

        lines.join("\n")
    }

    /// Writes the table and a trailing newline in a single write
    pub fn write_to<W: Write>(&self, writer: &mut W, entries: &[Entry]) -> io::Result<()> {
        let mut output = self.render(entries);
        output.push('\n');
        writer.write_all(output.as_bytes())?;
        writer.flush()
    }

    fn paint(&self, color: ColorAttributes, text: &str) -> String {
        if self.color_enabled {
            color.paint(text)
        } else {
            text.to_string()
        }
    }

    fn paint_box(&self, text: &str) -> String {
        self.paint(self.colors.box_color, text)
    }

    fn render_empty(&self) -> String {
        let c = &self.chars;
        let inner = EMPTY_BOX_WIDTH - 2;
        let rule = c.horizontal.repeat(inner);

        [
            self.paint_box(&format!("{}{}{}", c.top_left, rule, c.top_right)),
            format!(
                "{}{}{}",
                self.paint_box(c.vertical),
                self.paint(self.colors.empty, &pad(EMPTY_MESSAGE, inner, Alignment::Center)),
                self.paint_box(c.vertical)
            ),
            self.paint_box(&format!("{}{}{}", c.bottom_left, rule, c.bottom_right)),
        ]
        .join("\n")
    }

    fn border(&self, border: Border) -> String {
        let c = &self.chars;
        let (left, junction, right) = match border {
            Border::Top => (c.top_left, c.t_down, c.top_right),
            Border::Bottom => (c.bottom_left, c.t_up, c.bottom_right),
        };
        self.paint_box(&self.rule_line(left, junction, right))
    }

    fn separator(&self) -> String {
        let c = &self.chars;
        self.paint_box(&self.rule_line(c.t_right, c.cross, c.t_left))
    }

    fn rule_line(&self, left: &str, junction: &str, right: &str) -> String {
        let rules: Vec<String> = self
            .mode
            .columns()
            .iter()
            .map(|col| self.chars.horizontal.repeat(col.width))
            .collect();
        format!("{}{}{}", left, rules.join(junction), right)
    }

    fn header(&self) -> String {
        let mut line = String::from(self.chars.vertical);
        for col in self.mode.columns() {
            line.push_str(&pad(col.name, col.width, col.alignment));
            line.push_str(self.chars.vertical);
        }
        self.paint_box(&line)
    }

    fn row(&self, index: usize, entry: &Entry, modified: &str) -> String {
        let [c0, c1, c2, c3] = self.mode.columns();
        let type_color = self.colors.color_for(entry.entry_type);
        let size = format_size(entry.size, self.human_readable);
        let name = printable_name(&entry.name);

        let cells = match self.mode {
            DisplayMode::Compact => [
                cell(c0, &(index + 1).to_string()),
                self.paint(type_color, &cell(c1, &name)),
                self.paint(type_color, &cell(c2, entry.entry_type.tag())),
                cell(c3, &size),
            ],
            DisplayMode::Long => [
                cell(c0, permissions(entry.entry_type)),
                cell(c1, &size),
                cell(c2, modified),
                self.paint(type_color, &cell(c3, &name)),
            ],
        };

        let bar = self.paint_box(self.chars.vertical);
        format!("{bar}{}{bar}", cells.join(bar.as_str()))
    }
}

fn cell(column: &Column, text: &str) -> String {
    pad(text, column.width, column.alignment)
}

/// Replaces control characters so a name always stays on one line.
fn printable_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

/// Placeholder permission string; real mode bits are not read.
fn permissions(entry_type: EntryType) -> &'static str {
    match entry_type {
        EntryType::Directory => DIR_PERMISSIONS,
        _ => FILE_PERMISSIONS,
    }
}
