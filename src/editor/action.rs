use glam::IVec3;

use crate::editor::map::Map;
use crate::editor::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Draw,
}

/// Replacement of the tile at one position.
///
/// Before the change is applied it holds the new tile; applying swaps it with
/// the map's tile, so the change then holds the displaced one. Applying again
/// reverts it.
#[derive(Debug, Clone)]
pub struct Change {
    position: IVec3,
    tile: Option<Tile>,
}

impl Change {
    pub fn new(tile: Tile) -> Self {
        Self {
            position: tile.position,
            tile: Some(tile),
        }
    }

    pub fn position(&self) -> IVec3 {
        self.position
    }

    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    fn swap(&mut self, map: &mut Map) {
        self.tile = map.swap_tile(self.position, self.tile.take());
    }
}

#[derive(Debug)]
pub struct Action {
    kind: ActionKind,
    changes: Vec<Change>,
}

impl Action {
    pub fn add_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn apply(&mut self, map: &mut Map) {
        for change in &mut self.changes {
            change.swap(map);
        }
    }

    fn revert(&mut self, map: &mut Map) {
        for change in self.changes.iter_mut().rev() {
            change.swap(map);
        }
    }
}

#[derive(Debug)]
pub struct Batch {
    kind: ActionKind,
    actions: Vec<Action>,
}

impl Batch {
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn change_count(&self) -> usize {
        self.actions.iter().map(Action::len).sum()
    }

    pub fn add_and_commit_action(&mut self, map: &mut Map, mut action: Action) {
        log::trace!("committing {:?} action of {} changes", action.kind, action.len());
        action.apply(map);
        self.actions.push(action);
    }
}

#[derive(Debug)]
struct QueuedBatch {
    batch: Batch,
    priority: u32,
}

#[derive(Debug, Default)]
pub struct ActionQueue {
    batches: Vec<QueuedBatch>,
    // Number of batches currently applied; entries past it can be redone.
    current: usize,
}

impl ActionQueue {
    pub fn create_batch(&self, kind: ActionKind) -> Batch {
        Batch {
            kind,
            actions: Vec::new(),
        }
    }

    pub fn create_action(&self, batch: &Batch) -> Action {
        Action {
            kind: batch.kind,
            changes: Vec::new(),
        }
    }

    pub fn add_batch(&mut self, batch: Batch, priority: u32) {
        self.batches.truncate(self.current);
        self.batches.push(QueuedBatch { batch, priority });
        self.current = self.batches.len();
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current < self.batches.len()
    }

    pub fn undo(&mut self, map: &mut Map) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.current -= 1;
        let queued = &mut self.batches[self.current];
        for action in queued.batch.actions.iter_mut().rev() {
            action.revert(map);
        }
        true
    }

    pub fn redo(&mut self, map: &mut Map) -> bool {
        if !self.can_redo() {
            return false;
        }
        let queued = &mut self.batches[self.current];
        for action in &mut queued.batch.actions {
            action.apply(map);
        }
        self.current += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn last(&self) -> Option<(&Batch, u32)> {
        self.batches[..self.current]
            .last()
            .map(|queued| (&queued.batch, queued.priority))
    }
}
