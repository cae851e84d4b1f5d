use std::collections::VecDeque;

use bevy_ecs::prelude::*;
use log::trace;

use crate::Time;
use crate::components::InputEvent;
use crate::scheduler::GravityScheduler;
use crate::session::SessionController;

/// Input events waiting for the next tick, oldest first.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

pub fn time_system(world: &mut World) {
    world.resource_mut::<Time>().update();
}

pub fn input_system(world: &mut World) {
    let events: Vec<InputEvent> = world.resource_mut::<InputQueue>().drain().collect();
    if events.is_empty() {
        return;
    }

    let mut session = world.resource_mut::<SessionController>();
    for event in events {
        trace!("Handling {event:?}");
        session.handle(event);
    }
}

pub fn gravity_system(world: &mut World) {
    let now = world.resource::<Time>().elapsed();

    // Clone the scheduler so the session can be borrowed mutably alongside it
    let mut scheduler = world.resource::<GravityScheduler>().clone();
    {
        let mut session = world.resource_mut::<SessionController>();
        scheduler.tick(&mut session, now);
    }
    world.insert_resource(scheduler);
}
