//! Aligned text grid with optional box-drawing borders.

use std::fmt;
use std::io;
use std::str::FromStr;

use unicode_width::UnicodeWidthStr;

use super::{Render, UnknownName};
use crate::table::TableGrid;

/// Separator between cells when the grid has no border.
const PLAIN_GAP: &str = "  ";

/// Border style for the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// Cells separated by two spaces, no rules.
    None,
    /// `+`, `-` and `|`.
    #[default]
    Ascii,
    /// Thin box-drawing lines.
    Light,
    /// Thick box-drawing lines.
    Heavy,
    /// Double box-drawing lines.
    Double,
    /// Thin lines with rounded outer corners.
    Rounded,
}

impl BorderStyle {
    /// Box-drawing characters, or `None` for a borderless grid.
    fn chars(&self) -> Option<BorderChars> {
        match self {
            BorderStyle::None => None,
            BorderStyle::Ascii => Some(ASCII),
            BorderStyle::Light => Some(LIGHT),
            BorderStyle::Heavy => Some(HEAVY),
            BorderStyle::Double => Some(DOUBLE),
            BorderStyle::Rounded => Some(ROUNDED),
        }
    }
}

/// Characters of one border style.
///
/// Each rule is drawn from its `[left, joint, right]` triple and `line`;
/// cells are separated by `bar`.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    line: char,
    bar: char,
    top: [char; 3],
    middle: [char; 3],
    bottom: [char; 3],
}

const ASCII: BorderChars = BorderChars {
    line: '-',
    bar: '|',
    top: ['+'; 3],
    middle: ['+'; 3],
    bottom: ['+'; 3],
};

const LIGHT: BorderChars = BorderChars {
    line: '─',
    bar: '│',
    top: ['┌', '┬', '┐'],
    middle: ['├', '┼', '┤'],
    bottom: ['└', '┴', '┘'],
};

const HEAVY: BorderChars = BorderChars {
    line: '━',
    bar: '┃',
    top: ['┏', '┳', '┓'],
    middle: ['┣', '╋', '┫'],
    bottom: ['┗', '┻', '┛'],
};

const DOUBLE: BorderChars = BorderChars {
    line: '═',
    bar: '║',
    top: ['╔', '╦', '╗'],
    middle: ['╠', '╬', '╣'],
    bottom: ['╚', '╩', '╝'],
};

const ROUNDED: BorderChars = BorderChars {
    top: ['╭', '┬', '╮'],
    bottom: ['╰', '┴', '╯'],
    ..LIGHT
};

impl FromStr for BorderStyle {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(BorderStyle::None),
            "ascii" => Ok(BorderStyle::Ascii),
            "light" => Ok(BorderStyle::Light),
            "heavy" => Ok(BorderStyle::Heavy),
            "double" => Ok(BorderStyle::Double),
            "rounded" => Ok(BorderStyle::Rounded),
            _ => Err(UnknownName {
                kind: "border style",
                name: s.to_string(),
                expected: "none, ascii, light, heavy, double, rounded",
            }),
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BorderStyle::None => "none",
            BorderStyle::Ascii => "ascii",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
        };
        f.write_str(name)
    }
}

/// Renders a grid as aligned text.
///
/// Column widths are the widest cell of each column, measured in terminal
/// columns. Short rows are padded with empty cells. The footer, when
/// present, is separated from the body by a rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridRenderer {
    border: BorderStyle,
    uppercase: bool,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Upper-case header and footer cells.
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Render to a string instead of a stream.
    pub fn render_to_string(&self, grid: &TableGrid) -> String {
        let widths = column_widths(grid, self.uppercase);
        if widths.is_empty() {
            return String::new();
        }

        let header = self.label_row(&grid.header);
        let footer = self.label_row(&grid.footer);

        let mut lines = Vec::new();
        match self.border.chars() {
            None => {
                if !header.is_empty() {
                    lines.push(plain_line(&header, &widths));
                }
                for row in &grid.body {
                    lines.push(plain_line(row, &widths));
                }
                if !footer.is_empty() {
                    lines.push(plain_line(&footer, &widths));
                }
            }
            Some(chars) => {
                let middle = rule(&chars, &widths, chars.middle);
                lines.push(rule(&chars, &widths, chars.top));
                if !header.is_empty() {
                    lines.push(boxed_line(&chars, &header, &widths));
                    lines.push(middle.clone());
                }
                for row in &grid.body {
                    lines.push(boxed_line(&chars, row, &widths));
                }
                if !footer.is_empty() {
                    if !grid.body.is_empty() {
                        lines.push(middle);
                    }
                    lines.push(boxed_line(&chars, &footer, &widths));
                }
                lines.push(rule(&chars, &widths, chars.bottom));
            }
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn label_row(&self, row: &[String]) -> Vec<String> {
        if self.uppercase {
            row.iter().map(|cell| cell.to_uppercase()).collect()
        } else {
            row.to_vec()
        }
    }
}

impl Render for GridRenderer {
    fn render(&self, grid: &TableGrid, out: &mut dyn io::Write) -> io::Result<()> {
        out.write_all(self.render_to_string(grid).as_bytes())
    }
}

fn display_width(s: &str) -> usize {
    s.width()
}

fn column_widths(grid: &TableGrid, uppercase: bool) -> Vec<usize> {
    let mut widths = vec![0; grid.column_count()];
    let mut measure = |row: &[String], upper: bool| {
        for (width, cell) in widths.iter_mut().zip(row) {
            let cell_width = if upper {
                display_width(&cell.to_uppercase())
            } else {
                display_width(cell)
            };
            *width = (*width).max(cell_width);
        }
    };
    measure(grid.header.as_slice(), uppercase);
    for row in &grid.body {
        measure(row.as_slice(), false);
    }
    measure(grid.footer.as_slice(), uppercase);
    widths
}

fn pad(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(cell));
    format!("{}{}", cell, " ".repeat(padding))
}

fn cells<'a>(row: &'a [String], widths: &'a [usize]) -> impl Iterator<Item = String> + 'a {
    widths
        .iter()
        .enumerate()
        .map(move |(i, width)| pad(row.get(i).map(String::as_str).unwrap_or(""), *width))
}

fn plain_line(row: &[String], widths: &[usize]) -> String {
    let line = cells(row, widths).collect::<Vec<_>>().join(PLAIN_GAP);
    line.trim_end().to_string()
}

fn boxed_line(chars: &BorderChars, row: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    line.push(chars.bar);
    for cell in cells(row, widths) {
        line.push(' ');
        line.push_str(&cell);
        line.push(' ');
        line.push(chars.bar);
    }
    line
}

fn rule(chars: &BorderChars, widths: &[usize], [left, joint, right]: [char; 3]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| chars.line.to_string().repeat(width + 2))
        .collect();
    format!("{}{}{}", left, segments.join(joint.to_string().as_str()), right)
}
