#![warn(clippy::all, clippy::pedantic)]

// Playfield interior dimensions
pub const FIELD_WIDTH: u16 = 10;
pub const FIELD_HEIGHT: u16 = 20;

// Piece supply
pub const NUM_PIECE_TYPES: usize = 7;
pub const BAG_REFILL_THRESHOLD: usize = NUM_PIECE_TYPES + 1; // Refill once fewer than this remain

// Level progression
pub const LINES_PER_LEVEL: u32 = 10;

// Gravity timing, one entry per level, clamped to the last entry
pub const DROP_INTERVALS_MS: [u64; 19] = [
    4000, 3500, 3000, 2750, 2500, 2250, 2000, 1750, 1500, 1250, 1000, 750, 500, 400, 300, 200, 100,
    75, 50,
];

// A grounded piece waits this many drop intervals before the next gravity tick locks it
pub const HANG_MULTIPLIER: u32 = 5;

// Kick search reach in each axis
pub const KICK_REACH: i32 = 2;
