/// In-memory character grid that entity tasks draw into.
///
/// The terminal backend paints the grid once per tick; tests inspect it
/// directly.  All drawing goes through [`draw_frame`], which carries the
/// clipping rules: cells outside the grid are skipped, spaces in a frame are
/// transparent, and the bottom-right cell is never written.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellStyle {
    Dim,
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        symbol: ' ',
        style: CellStyle::Normal,
    };
}

#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::BLANK; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        (row < self.rows && column < self.columns).then(|| self.cells[row * self.columns + column])
    }

    pub fn row_text(&self, row: usize) -> String {
        (0..self.columns)
            .filter_map(|c| self.cell(row, c))
            .map(|cell| cell.symbol)
            .collect()
    }

    /// Write one cell, honouring the clipping rules.  Returns false if skipped.
    pub fn put(&mut self, row: i64, column: i64, symbol: char, style: CellStyle) -> bool {
        if row < 0 || column < 0 {
            return false;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.rows || column >= self.columns {
            return false;
        }
        if row == self.rows - 1 && column == self.columns - 1 {
            return false;
        }
        self.cells[row * self.columns + column] = Cell { symbol, style };
        true
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }
}

/// Draw a multi-line text block with its top-left corner at `(row, column)`,
/// or erase it when `erase` is set.
pub fn draw_frame(grid: &mut Grid, row: f64, column: f64, text: &str, erase: bool) {
    draw_styled(grid, row, column, text, CellStyle::Normal, erase);
}

pub fn draw_styled(grid: &mut Grid, row: f64, column: f64, text: &str, style: CellStyle, erase: bool) {
    let start_row = row.round() as i64;
    let start_column = column.round() as i64;

    for (dr, line) in text.lines().enumerate() {
        let r = start_row + dr as i64;
        if r < 0 {
            continue;
        }
        if r >= grid.rows() as i64 {
            break;
        }
        for (dc, symbol) in line.chars().enumerate() {
            let c = start_column + dc as i64;
            if c < 0 {
                continue;
            }
            if c >= grid.columns() as i64 {
                break;
            }
            if symbol == ' ' {
                continue;
            }
            let symbol = if erase { ' ' } else { symbol };
            grid.put(r, c, symbol, style);
        }
    }
}

/// `(rows, columns)` occupied by a text block.
pub fn frame_size(text: &str) -> (usize, usize) {
    let rows = text.lines().count();
    let columns = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    (rows, columns)
}
