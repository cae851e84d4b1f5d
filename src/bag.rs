#![warn(clippy::all, clippy::pedantic)]

use std::collections::VecDeque;

use crate::components::PieceType;
use crate::game::BAG_REFILL_THRESHOLD;

/// Upcoming piece types, served oldest first and topped up in whole shuffled
/// batches of all seven types.
#[derive(Debug, Clone)]
pub struct Bag {
    queue: VecDeque<PieceType>,
    rng: fastrand::Rng,
}

impl Bag {
    /// Starts with two shuffled batches.
    #[must_use]
    pub fn new(rng: fastrand::Rng) -> Self {
        let mut bag = Self {
            queue: VecDeque::with_capacity(PieceType::ALL.len() * 3),
            rng,
        };
        bag.refill();
        bag.refill();
        bag
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }

    fn refill(&mut self) {
        let mut batch = PieceType::ALL;
        self.rng.shuffle(&mut batch);
        self.queue.extend(batch);
    }

    pub fn refill_if_low(&mut self) {
        if self.queue.len() < BAG_REFILL_THRESHOLD {
            self.refill();
        }
    }

    /// Pops the oldest queued type.
    ///
    /// # Panics
    ///
    /// Panics when the queue is empty. Callers keep it stocked with
    /// [`Bag::refill_if_low`].
    pub fn draw(&mut self) -> PieceType {
        match self.queue.pop_front() {
            Some(kind) => kind,
            None => panic!("drew from an empty bag; refill_if_low must run after every draw"),
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<PieceType> {
        self.queue.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
