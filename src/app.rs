#![warn(clippy::all, clippy::pedantic)]

use std::collections::{HashMap, HashSet};

use bevy_ecs::prelude::*;
use log::debug;

use crate::Time;
use crate::components::{BlockId, InputEvent, PieceType, Position};
use crate::config::Config;
use crate::scheduler::GravityScheduler;
use crate::session::{SessionController, Snapshot};
use crate::systems::{InputQueue, gravity_system, input_system, time_system};

pub struct App {
    pub world: World,
    pub should_quit: bool,
    config: Config,
    // Presentation side-table; the engine only knows block ids
    palette: HashMap<BlockId, PieceType>,
}

impl App {
    /// Wall-clock app built from `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_time(config, Time::new())
    }

    #[must_use]
    pub fn with_time(config: Config, time: Time) -> Self {
        let mut world = World::new();
        insert_resources(&mut world, &config, time);
        Self {
            world,
            should_quit: false,
            config,
            palette: HashMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.world.resource_mut::<InputQueue>().push(event);
    }

    #[must_use]
    pub fn session(&self) -> &SessionController {
        self.world.resource::<SessionController>()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session().snapshot()
    }

    /// One frame: refresh the clock, apply queued input, run gravity, then
    /// pick up whatever got locked.
    pub fn on_tick(&mut self) {
        time_system(&mut self.world);
        input_system(&mut self.world);
        gravity_system(&mut self.world);
        self.sync_palette();
    }

    fn sync_palette(&mut self) {
        let locks = self.world.resource_mut::<SessionController>().take_locks();
        if locks.is_empty() {
            return;
        }

        let mut cleared_any = false;
        for record in &locks {
            for &(id, _) in &record.blocks {
                self.palette.insert(id, record.kind);
            }
            cleared_any |= record.lines_cleared > 0;
        }

        // Compaction may have dropped blocks that are no longer on the field
        if cleared_any {
            let alive: HashSet<BlockId> = self
                .session()
                .field()
                .blocks()
                .into_iter()
                .map(|(_, id)| id)
                .collect();
            self.palette.retain(|id, _| alive.contains(id));
            debug!("Palette pruned to {} blocks", self.palette.len());
        }
    }

    #[must_use]
    pub fn block_kind(&self, id: BlockId) -> Option<PieceType> {
        self.palette.get(&id).copied()
    }

    /// Locked blocks followed by the live piece, in field coordinates.
    #[must_use]
    pub fn get_render_blocks(&self) -> Vec<(Position, PieceType)> {
        let session = self.session();
        let mut blocks: Vec<(Position, PieceType)> = session
            .field()
            .blocks()
            .into_iter()
            .filter_map(|(position, id)| self.block_kind(id).map(|kind| (position, kind)))
            .collect();

        if !session.is_game_over() {
            let piece = session.piece();
            blocks.extend(
                piece
                    .cells()
                    .into_iter()
                    .filter(|cell| cell.y >= 0)
                    .map(|cell| (cell, piece.kind())),
            );
        }
        blocks
    }

    /// Rebuilds every resource from the stored config.
    pub fn reset(&mut self) {
        let time = if self.world.resource::<Time>().is_manual() {
            Time::manual()
        } else {
            Time::new()
        };
        insert_resources(&mut self.world, &self.config, time);
        self.palette.clear();
    }
}

fn insert_resources(world: &mut World, config: &Config, time: Time) {
    world.insert_resource(time);
    world.insert_resource(InputQueue::default());
    world.insert_resource(SessionController::from_config(config));
    world.insert_resource(GravityScheduler::from_config(config));
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
