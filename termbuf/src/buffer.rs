use crate::rect::Rect;
use crate::style::{Rgb, Style, TextStyle};
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Write a line of text starting at (x, y), clipped to `max_width`
    /// terminal columns. `None` style components keep whatever the cell
    /// already holds. Returns the number of columns written.
    pub fn set_text(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) -> u16 {
        if y >= self.height {
            return 0;
        }

        let mut col = 0u16;
        for ch in text.chars() {
            let ch_width = char_width(ch) as u16;
            if ch_width == 0 {
                continue;
            }
            if col + ch_width > max_width || x + col + ch_width > self.width {
                break;
            }

            if let Some(cell) = self.get_mut(x + col, y) {
                cell.char = ch;
                if let Some(fg) = style.fg {
                    cell.fg = fg;
                }
                if let Some(bg) = style.bg {
                    cell.bg = bg;
                }
                cell.style = style.text;
                cell.wide_continuation = false;
            }
            // Wide glyphs occupy a continuation cell to their right.
            for offset in 1..ch_width {
                if let Some(cell) = self.get_mut(x + col + offset, y) {
                    cell.char = ' ';
                    if let Some(fg) = style.fg {
                        cell.fg = fg;
                    }
                    if let Some(bg) = style.bg {
                        cell.bg = bg;
                    }
                    cell.style = style.text;
                    cell.wide_continuation = true;
                }
            }

            col += ch_width;
        }

        col
    }

    /// Fill a rectangle with spaces in the given style.
    pub fn fill(&mut self, area: Rect, style: Style) {
        for y in area.top()..area.bottom().min(self.height) {
            for x in area.left()..area.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.char = ' ';
                    if let Some(fg) = style.fg {
                        cell.fg = fg;
                    }
                    if let Some(bg) = style.bg {
                        cell.bg = bg;
                    }
                    cell.style = style.text;
                    cell.wide_continuation = false;
                }
            }
        }
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// The text content of one row, trimmed on the right. Test helper.
    pub fn row_text(&self, y: u16) -> String {
        let mut s = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if !cell.wide_continuation {
                    s.push(cell.char);
                }
            }
        }
        s.trim_end().to_string()
    }
}
