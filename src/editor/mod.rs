pub mod action;
pub mod brush;
pub mod map;
pub mod tile;

use std::collections::HashSet;

use glam::IVec3;

use self::action::{ActionQueue, Batch};
use self::brush::BrushCatalog;
use self::map::Map;

#[derive(Debug, Default)]
pub struct Selection {
    positions: HashSet<IVec3>,
}

impl Selection {
    pub fn add(&mut self, position: IVec3) {
        self.positions.insert(position);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

pub struct Editor {
    pub map: Map,
    pub brushes: BrushCatalog,
    pub action_queue: ActionQueue,
    pub selection: Selection,
    view_refreshes: u32,
}

impl Editor {
    pub fn new(brushes: BrushCatalog) -> Self {
        Self {
            map: Map::default(),
            brushes,
            action_queue: ActionQueue::default(),
            selection: Selection::default(),
            view_refreshes: 0,
        }
    }

    pub fn add_batch(&mut self, batch: Batch, priority: u32) {
        log::debug!(
            "queued {:?} batch of {} changes (priority {priority})",
            batch.kind(),
            batch.change_count()
        );
        self.action_queue.add_batch(batch, priority);
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.action_queue.undo(&mut self.map);
        if undone {
            self.refresh_view();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.action_queue.redo(&mut self.map);
        if redone {
            self.refresh_view();
        }
        redone
    }

    pub fn refresh_view(&mut self) {
        self.view_refreshes += 1;
    }

    pub fn view_refreshes(&self) -> u32 {
        self.view_refreshes
    }
}
