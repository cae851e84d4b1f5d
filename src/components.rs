#![warn(clippy::all, clippy::pedantic)]

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    I,
    T,
    L,
    J,
    S,
    Z,
    O,
}

impl PieceType {
    /// Every piece type, in shape-table order.
    pub const ALL: [PieceType; 7] = [
        PieceType::I,
        PieceType::T,
        PieceType::L,
        PieceType::J,
        PieceType::S,
        PieceType::Z,
        PieceType::O,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            PieceType::I => 0,
            PieceType::T => 1,
            PieceType::L => 2,
            PieceType::J => 3,
            PieceType::S => 4,
            PieceType::Z => 5,
            PieceType::O => 6,
        }
    }

    /// O is the only shape whose rotation is disabled.
    #[must_use]
    pub fn rotates(self) -> bool {
        self != PieceType::O
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PieceType::I => "I",
            PieceType::T => "T",
            PieceType::L => "L",
            PieceType::J => "J",
            PieceType::S => "S",
            PieceType::Z => "Z",
            PieceType::O => "O",
        }
    }
}

/// One of four rotational states: 0 up, 1 left, 2 down, 3 right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Orientation(u8);

impl Orientation {
    pub const UP: Orientation = Orientation(0);
    pub const LEFT: Orientation = Orientation(1);
    pub const DOWN: Orientation = Orientation(2);
    pub const RIGHT: Orientation = Orientation(3);

    // rem_euclid keeps the value in 0..4, so the narrowing is lossless
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn new(value: i32) -> Self {
        Orientation(value.rem_euclid(4) as u8)
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn rotated(self, direction: RotationDirection) -> Self {
        Orientation::new(i32::from(self.0) + direction.sign())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
    Down,
}

impl MoveDirection {
    /// Unit step in grid coordinates (y grows downward).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Down => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// +1 for counter-clockwise, -1 for clockwise.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            RotationDirection::Clockwise => -1,
            RotationDirection::CounterClockwise => 1,
        }
    }
}

/// Opaque identity of a locked block. The presentation layer keys its own
/// lookups on it; the engine never stores anything visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u32);

impl BlockId {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Permanent border cell.
    Wall,
    Block(BlockId),
}

impl Cell {
    #[must_use]
    pub fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    #[must_use]
    pub fn block(self) -> Option<BlockId> {
        match self {
            Cell::Block(id) => Some(id),
            _ => None,
        }
    }
}

// Discrete input events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(MoveDirection),
    Rotate(RotationDirection),
    TogglePause,
    Restart,
}
