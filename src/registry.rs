//! Live obstacle boxes keyed by stable identity.
//!
//! Debris tasks register on entry, move their box every tick and deregister
//! when they leave.  Collision queries never remove anything: a hit only sets
//! a mark that the owning task consumes on its next resumption.

use std::collections::BTreeMap;

use crate::entities::{BoundingBox, CollisionMark, Obstacle, ObstacleId};

#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    obstacles: BTreeMap<ObstacleId, Obstacle>,
    next_id: u64,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, bounds: BoundingBox) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.insert(id, Obstacle { id, bounds, mark: None });
        id
    }

    /// Returns the removed obstacle, `None` if it was not registered.
    pub fn deregister(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.obstacles.remove(&id)
    }

    /// Move an obstacle's box.  Unknown ids are ignored.
    pub fn update(&mut self, id: ObstacleId, bounds: BoundingBox) {
        if let Some(obstacle) = self.obstacles.get_mut(&id) {
            obstacle.bounds = bounds;
        }
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(&id)
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.obstacles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.values()
    }

    /// First unmarked obstacle containing the point, in registration order.
    ///
    /// Marked obstacles are skipped: they are already doomed and a second hit
    /// must not be recorded against them.
    pub fn has_collision(&self, row: f64, column: f64) -> Option<ObstacleId> {
        self.obstacles
            .values()
            .find(|o| o.mark.is_none() && o.bounds.contains(row, column))
            .map(|o| o.id)
    }

    /// First unmarked obstacle overlapping `area`.
    pub fn overlapping(&self, area: &BoundingBox) -> Option<ObstacleId> {
        self.obstacles
            .values()
            .find(|o| o.mark.is_none() && o.bounds.overlaps(area))
            .map(|o| o.id)
    }

    /// Set a mark.  Returns false if the obstacle is unknown or already marked.
    pub fn mark(&mut self, id: ObstacleId, mark: CollisionMark) -> bool {
        match self.obstacles.get_mut(&id) {
            Some(obstacle) if obstacle.mark.is_none() => {
                obstacle.mark = Some(mark);
                true
            }
            _ => false,
        }
    }

    /// Consume the mark if it is of the given kind.
    pub fn take_mark(&mut self, id: ObstacleId, kind: CollisionMark) -> bool {
        match self.obstacles.get_mut(&id) {
            Some(obstacle) if obstacle.mark == Some(kind) => {
                obstacle.mark = None;
                true
            }
            _ => false,
        }
    }
}
