#![warn(clippy::all, clippy::pedantic)]

//! Relative cell geometry for every piece type and orientation.
//!
//! Only orientation 0 is written down. The other three are derived once, on
//! first use, by running the same rotation the live pieces use, so the table
//! and the rotation can never disagree.

use once_cell::sync::Lazy;

use crate::components::{Orientation, PieceType, Position, RotationDirection};

/// Offsets of the four cells from the anchor. Entry 0 is always `(0, 0)`.
pub type Offsets = [(i32, i32); 4];

// Orientation 0 per type, in PieceType::ALL order. Grid coordinates, y grows downward.
const BASE_SHAPES: [Offsets; 7] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],     // I
    [(0, 0), (1, 0), (2, 0), (1, -1)],    // T
    [(0, 0), (1, 0), (2, 0), (2, -1)],    // L
    [(0, 0), (1, 0), (2, 0), (0, -1)],    // J
    [(0, 0), (1, 0), (1, -1), (2, -1)],   // S
    [(0, 0), (-1, 0), (-1, -1), (-2, -1)], // Z
    [(0, 0), (1, 0), (0, -1), (1, -1)],   // O
];

static SHAPES: Lazy<ShapeTable> = Lazy::new(ShapeTable::derive);

struct ShapeTable {
    offsets: [[Offsets; 4]; 7],
}

impl ShapeTable {
    fn derive() -> Self {
        let mut offsets = [[[(0, 0); 4]; 4]; 7];

        for kind in PieceType::ALL {
            let mut current = BASE_SHAPES[kind.index()];
            for turn in 0..4 {
                let orientation = Orientation::new(turn);
                offsets[kind.index()][orientation.index()] = current;

                let cells = current.map(|(dx, dy)| Position::new(dx, dy));
                let Some(pivot) = pivot_doubled(kind, orientation, &cells) else {
                    continue;
                };
                let rotated = rotate_about(&cells, pivot, RotationDirection::CounterClockwise);
                let anchor = rotated[0];
                current = rotated.map(|cell| (cell.x - anchor.x, cell.y - anchor.y));
            }
        }

        Self { offsets }
    }
}

/// Offsets for `kind` in `orientation`.
#[must_use]
pub fn offsets(kind: PieceType, orientation: Orientation) -> &'static Offsets {
    &SHAPES.offsets[kind.index()][orientation.index()]
}

/// Rotation centre in doubled coordinates, or `None` for O.
///
/// Pieces turn around their second cell. I has no integer centre, so it turns
/// around a corner of its second cell chosen by the current orientation;
/// doubling keeps that half-cell offset in integers.
#[must_use]
pub fn pivot_doubled(
    kind: PieceType,
    orientation: Orientation,
    cells: &[Position; 4],
) -> Option<(i32, i32)> {
    if !kind.rotates() {
        return None;
    }

    let (x, y) = (cells[1].x * 2, cells[1].y * 2);
    if kind != PieceType::I {
        return Some((x, y));
    }

    let (sx, sy) = match orientation.index() {
        0 => (1, 1),
        1 => (1, -1),
        2 => (-1, -1),
        _ => (-1, 1),
    };
    Some((x + sx, y + sy))
}

/// Quarter turn of `cells` around a doubled-coordinate pivot.
///
/// With y growing downward: `(px + dy * s, py - dx * s)` where `s` is the
/// direction sign. Every result lands on whole cells because the pivot is
/// either a cell or a cell corner.
#[must_use]
pub fn rotate_about(
    cells: &[Position; 4],
    pivot: (i32, i32),
    direction: RotationDirection,
) -> [Position; 4] {
    let sign = direction.sign();
    let (px, py) = pivot;
    cells.map(|cell| {
        let dx = cell.x * 2 - px;
        let dy = cell.y * 2 - py;
        Position::new((px + dy * sign) / 2, (py - dx * sign) / 2)
    })
}
