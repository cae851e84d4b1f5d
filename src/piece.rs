#![warn(clippy::all, clippy::pedantic)]

use crate::components::{Orientation, PieceType, Position, RotationDirection};
use crate::shape;

/// A live piece. Its absolute cells are always derived from the shape table,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceType,
    orientation: Orientation,
    anchor: Position,
}

impl Piece {
    #[must_use]
    pub fn new(kind: PieceType, anchor: Position) -> Self {
        Self::with_orientation(kind, Orientation::UP, anchor)
    }

    #[must_use]
    pub fn with_orientation(kind: PieceType, orientation: Orientation, anchor: Position) -> Self {
        // O has a single fixed orientation
        let orientation = if kind.rotates() {
            orientation
        } else {
            Orientation::UP
        };
        Self {
            kind,
            orientation,
            anchor,
        }
    }

    /// New piece at the spawn anchor for a field `field_width` columns wide.
    #[must_use]
    pub fn spawn(kind: PieceType, field_width: i32) -> Self {
        Self::new(kind, spawn_anchor(kind, field_width))
    }

    #[must_use]
    pub fn kind(&self) -> PieceType {
        self.kind
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    #[must_use]
    pub fn cells(&self) -> [Position; 4] {
        shape::offsets(self.kind, self.orientation).map(|(dx, dy)| self.anchor.offset(dx, dy))
    }

    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> [Position; 4] {
        self.cells().map(|cell| cell.offset(dx, dy))
    }

    /// Bottom-most row the piece occupies.
    #[must_use]
    pub fn lowest_row(&self) -> i32 {
        self.cells().iter().map(|cell| cell.y).max().unwrap_or(self.anchor.y)
    }

    /// Cells the piece would cover after a quarter turn, before any kick.
    #[must_use]
    pub fn candidate_rotation(&self, direction: RotationDirection) -> [Position; 4] {
        let cells = self.cells();
        match shape::pivot_doubled(self.kind, self.orientation, &cells) {
            Some(pivot) => shape::rotate_about(&cells, pivot, direction),
            None => cells,
        }
    }

    pub fn reanchor(&mut self, anchor: Position) {
        self.anchor = anchor;
    }

    pub fn commit_rotation(&mut self, direction: RotationDirection) {
        if !self.kind.rotates() {
            return;
        }
        let rotated = self.candidate_rotation(direction);
        self.orientation = self.orientation.rotated(direction);
        self.anchor = rotated[0];
    }
}

/// Spawn anchor on row 0. Z grows leftward from its anchor, so it starts two
/// columns right of the rightward-growing shapes.
#[must_use]
pub fn spawn_anchor(kind: PieceType, field_width: i32) -> Position {
    let centre = field_width / 2;
    let x = match kind {
        PieceType::Z => centre + 1,
        PieceType::O => centre,
        _ => centre - 1,
    };
    Position::new(x, 0)
}
