#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

use bevy_ecs::prelude::Resource;
use log::{debug, info, warn};

use crate::bag::Bag;
use crate::components::{
    BlockId, Cell, InputEvent, MoveDirection, Orientation, PieceType, Position, RotationDirection,
};
use crate::config::Config;
use crate::field::Field;
use crate::game::{KICK_REACH, LINES_PER_LEVEL};
use crate::piece::Piece;

/// Lock-delay bookkeeping for the current piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HangState {
    pub active: bool,
    pub since: Duration,
    pub lowest_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    Hanging,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Blocked,
    /// A downward nudge hit something and fixed the piece immediately.
    Locked { lines: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Fell,
    Grounded,
    Locked { lines: u32 },
    Idle,
}

/// What the presentation layer needs to know about one fixation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRecord {
    pub kind: PieceType,
    /// Cells written to the field. Fewer than four on a lock-out.
    pub blocks: Vec<(BlockId, Position)>,
    pub lines_cleared: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    pub kind: PieceType,
    pub orientation: Orientation,
    pub cells: [Position; 4],
}

/// Read-only state pulled by the presentation layer each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub piece: PieceView,
    /// Interior rows, top to bottom, left to right.
    pub rows: Vec<Vec<Cell>>,
    pub lines_cleared: u32,
    pub level: u32,
    pub next: Option<PieceType>,
    pub paused: bool,
    pub game_over: bool,
}

/// Rotation kick offsets in scan order: first upward and rightward, then
/// upward and leftward. `(0, 0)` leads both phases.
fn kick_offsets() -> impl Iterator<Item = (i32, i32)> {
    [1, -1].into_iter().flat_map(|side| {
        (0..=KICK_REACH)
            .flat_map(move |up| (0..=KICK_REACH).map(move |across| (across * side, -up)))
    })
}

/// Owns the whole simulation. Nothing else mutates the field, the piece or
/// the bag.
#[derive(Resource, Debug, Clone)]
pub struct SessionController {
    field: Field,
    piece: Piece,
    bag: Bag,
    hang: HangState,
    lines_cleared: u32,
    pieces_locked: u32,
    next_block: u32,
    paused: bool,
    game_over: bool,
    locks: Vec<LockRecord>,
}

impl SessionController {
    #[must_use]
    pub fn new(width: i32, height: i32, mut bag: Bag) -> Self {
        let kind = bag.draw();
        bag.refill_if_low();
        Self {
            field: Field::new(width, height),
            piece: Piece::spawn(kind, width),
            bag,
            hang: HangState::default(),
            lines_cleared: 0,
            pieces_locked: 0,
            next_block: 0,
            paused: false,
            game_over: false,
            locks: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.session.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut session = Self::new(
            i32::from(config.field.width),
            i32::from(config.field.height),
            Bag::new(rng),
        );
        session.paused = config.session.start_paused;
        session
    }

    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[must_use]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[must_use]
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    #[must_use]
    pub fn hang(&self) -> HangState {
        self.hang
    }

    #[must_use]
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    #[must_use]
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.lines_cleared / LINES_PER_LEVEL
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.hang.active {
            Phase::Hanging
        } else {
            Phase::Falling
        }
    }

    /// Dispatches one input event. Movement is ignored while paused.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Move(direction) if !self.paused => {
                self.move_piece(direction);
            }
            InputEvent::Rotate(direction) if !self.paused => {
                self.rotate(direction);
            }
            InputEvent::Move(_) | InputEvent::Rotate(_) => {}
            InputEvent::TogglePause => self.toggle_pause(),
            InputEvent::Restart => self.restart(),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("Session {}", if self.paused { "paused" } else { "resumed" });
    }

    /// Empties the field and the tally and deals a fresh piece. The bag keeps
    /// its random stream.
    pub fn restart(&mut self) {
        info!("Restarting session after {} lines", self.lines_cleared);
        self.field.clear();
        self.lines_cleared = 0;
        self.pieces_locked = 0;
        self.game_over = false;
        self.locks.clear();
        self.spawn();
    }

    /// Deals the next piece from the bag at its spawn anchor.
    pub fn spawn(&mut self) {
        let kind = self.bag.draw();
        self.bag.refill_if_low();
        self.piece = Piece::spawn(kind, self.field.width());
        self.hang = HangState::default();

        // Cells above the field are out of bounds, not collisions
        let topped_out = self
            .piece
            .cells()
            .iter()
            .any(|cell| cell.y >= 0 && self.field.is_blocked(cell.x, cell.y));
        if topped_out {
            warn!("Spawned {} piece overlaps the stack; game over", kind.name());
            self.game_over = true;
        } else {
            debug!("Spawned {} piece at {:?}", kind.name(), self.piece.anchor());
        }
    }

    pub fn move_piece(&mut self, direction: MoveDirection) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Blocked;
        }

        let (dx, dy) = direction.delta();
        if !self.field.any_blocked(&self.piece.shifted(dx, dy)) {
            let anchor = self.piece.anchor().offset(dx, dy);
            self.piece.reanchor(anchor);
            return MoveOutcome::Moved;
        }

        if direction == MoveDirection::Down {
            // A manual nudge into the stack skips the lock delay
            let lines = self.lock();
            return MoveOutcome::Locked { lines };
        }
        MoveOutcome::Blocked
    }

    /// Quarter turn with kick search. Returns false when no offset fits, in
    /// which case the piece is untouched.
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        if self.game_over {
            return false;
        }

        let candidate = self.piece.candidate_rotation(direction);
        let Some((dx, dy)) = kick_offsets().find(|&(dx, dy)| {
            !candidate
                .iter()
                .any(|cell| self.field.is_blocked(cell.x + dx, cell.y + dy))
        }) else {
            return false;
        };

        self.piece.commit_rotation(direction);
        let anchor = self.piece.anchor().offset(dx, dy);
        self.piece.reanchor(anchor);
        if (dx, dy) != (0, 0) {
            debug!("Rotation kicked by ({dx}, {dy})");
        }
        true
    }

    /// One gravity step, normally driven by the scheduler.
    pub fn advance(&mut self, now: Duration) -> AdvanceOutcome {
        if self.game_over {
            return AdvanceOutcome::Idle;
        }

        let cells = self.piece.cells();
        let lowest_y = self.piece.lowest_row();
        let supported = lowest_y == self.field.height() - 1
            || cells
                .iter()
                .any(|cell| self.field.is_blocked(cell.x, cell.y + 1));

        if !supported {
            if !self.hang.active || lowest_y >= self.hang.lowest_y {
                self.hang.active = false;
                self.hang.lowest_y = lowest_y;
            }
            let anchor = self.piece.anchor().offset(0, 1);
            self.piece.reanchor(anchor);
            return AdvanceOutcome::Fell;
        }

        if self.hang.active {
            let lines = self.lock();
            return AdvanceOutcome::Locked { lines };
        }

        debug!("Piece grounded at row {lowest_y}");
        self.hang = HangState {
            active: true,
            since: now,
            lowest_y,
        };
        AdvanceOutcome::Grounded
    }

    /// Writes the piece into the field, clears full rows, tallies them and
    /// deals the next piece. Returns the rows cleared.
    ///
    /// A piece locked with cells still above the field ends the session; those
    /// cells are dropped and no new piece is dealt.
    pub fn lock(&mut self) -> u32 {
        let kind = self.piece.kind();
        let cells = self.piece.cells();
        let mut blocks = Vec::with_capacity(cells.len());
        for cell in cells.into_iter().filter(|cell| cell.y >= 0) {
            let id = BlockId::new(self.next_block);
            self.next_block = self.next_block.wrapping_add(1);
            self.field.write(cell.x, cell.y, id);
            blocks.push((id, cell));
        }
        let locked_out = blocks.len() < cells.len();

        let lines = self.field.clear_and_compact();
        self.lines_cleared += lines;
        self.pieces_locked += 1;
        if lines > 0 {
            info!(
                "Cleared {lines} lines ({} total, level {})",
                self.lines_cleared,
                self.level()
            );
        }

        self.locks.push(LockRecord {
            kind,
            blocks,
            lines_cleared: lines,
        });
        self.hang = HangState::default();

        if locked_out {
            warn!("{} piece locked above the field; game over", kind.name());
            self.game_over = true;
        } else {
            self.spawn();
        }
        lines
    }

    /// Drains the fixations recorded since the last call.
    pub fn take_locks(&mut self) -> Vec<LockRecord> {
        std::mem::take(&mut self.locks)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            piece: PieceView {
                kind: self.piece.kind(),
                orientation: self.piece.orientation(),
                cells: self.piece.cells(),
            },
            rows: (0..self.field.height())
                .map(|y| self.field.row(y))
                .collect(),
            lines_cleared: self.lines_cleared,
            level: self.level(),
            next: self.bag.peek(),
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
        self.hang = HangState::default();
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }
}
