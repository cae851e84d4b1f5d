#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Grid indices are range-checked before any conversion to usize
    clippy::cast_sign_loss
)]

use crate::components::{BlockId, Cell, Position};

/// The playfield: `width` interior columns framed by a wall column on each
/// side, and `height` interior rows above a wall row. Interior columns are
/// `1..=width`, interior rows `0..height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Field {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "field dimensions must be positive, got {width}x{height}"
        );

        let mut cells = Vec::with_capacity(((width + 2) * (height + 1)) as usize);
        for y in 0..=height {
            for x in 0..=width + 1 {
                let wall = x == 0 || x == width + 1 || y == height;
                cells.push(if wall { Cell::Wall } else { Cell::Empty });
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x > self.width + 1 || y < 0 || y > self.height {
            return None;
        }
        Some((y * (self.width + 2) + x) as usize)
    }

    fn index_or_panic(&self, x: i32, y: i32) -> usize {
        match self.index(x, y) {
            Some(index) => index,
            None => panic!(
                "cell ({x}, {y}) lies outside the {}x{} field",
                self.width, self.height
            ),
        }
    }

    /// True outside `[0, width + 1] x [0, height]` or on any occupied cell.
    /// Walls are real occupied cells, so the border indices themselves are
    /// in range.
    #[must_use]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .is_none_or(|index| self.cells[index].is_occupied())
    }

    #[must_use]
    pub fn any_blocked(&self, cells: &[Position]) -> bool {
        cells.iter().any(|cell| self.is_blocked(cell.x, cell.y))
    }

    /// Cell contents. Panics outside the field; use [`Field::is_blocked`] for
    /// probing.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index_or_panic(x, y)]
    }

    pub fn write(&mut self, x: i32, y: i32, block: BlockId) {
        let index = self.index_or_panic(x, y);
        debug_assert!(
            self.cells[index] != Cell::Wall,
            "attempted to overwrite the wall at ({x}, {y})"
        );
        self.cells[index] = Cell::Block(block);
    }

    #[must_use]
    pub fn is_row_full(&self, y: i32) -> bool {
        (1..=self.width).all(|x| self.cell(x, y).is_occupied())
    }

    /// One interior row, left to right.
    #[must_use]
    pub fn row(&self, y: i32) -> Vec<Cell> {
        (1..=self.width).map(|x| self.cell(x, y)).collect()
    }

    /// Every locked block with its position.
    #[must_use]
    pub fn blocks(&self) -> Vec<(Position, BlockId)> {
        let mut blocks = Vec::new();
        for y in 0..self.height {
            for x in 1..=self.width {
                if let Cell::Block(id) = self.cell(x, y) {
                    blocks.push((Position::new(x, y), id));
                }
            }
        }
        blocks
    }

    /// Removes full rows and drops the rows above them. Returns the number of
    /// rows removed.
    pub fn clear_and_compact(&mut self) -> u32 {
        // How far each interior row has to fall; full rows keep 0 and are discarded
        let mut drop_distance = vec![0; self.height as usize];
        let mut num_drop = 0;
        for y in (0..self.height).rev() {
            if self.is_row_full(y) {
                num_drop += 1;
            } else {
                drop_distance[y as usize] = num_drop;
            }
        }

        if num_drop == 0 {
            return 0;
        }

        // The bottom interior row never falls
        for y in (0..self.height - 1).rev() {
            let distance = drop_distance[y as usize];
            if distance == 0 {
                continue;
            }
            for x in 1..=self.width {
                let from = self.index_or_panic(x, y);
                let to = self.index_or_panic(x, y + distance);
                self.cells[to] = self.cells[from];
                self.cells[from] = Cell::Empty;
            }
        }

        // A full row with nothing left above to overwrite it is still discarded
        for y in 0..num_drop.min(self.height) {
            for x in 1..=self.width {
                let index = self.index_or_panic(x, y);
                self.cells[index] = Cell::Empty;
            }
        }

        num_drop as u32
    }

    /// Empties every interior cell.
    pub fn clear(&mut self) {
        *self = Field::new(self.width, self.height);
    }
}
