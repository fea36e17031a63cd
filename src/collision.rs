/// Collision checks between moving entities and the obstacle registry.
///
/// Detection is point/box sampling at the entity's position for the current
/// tick.  A projectile fast enough to step entirely over a box between two
/// ticks is not detected; that is an accepted discretisation limit.

use crate::entities::{BoundingBox, CollisionMark, ObstacleId};
use crate::registry::ObstacleRegistry;

/// Test a projectile at `(row, column)`.  On a hit the obstacle is marked for
/// destruction by its own task and its id is returned.
pub fn projectile_hit(
    registry: &mut ObstacleRegistry,
    row: f64,
    column: f64,
) -> Option<ObstacleId> {
    let id = registry.has_collision(row, column)?;
    registry.mark(id, CollisionMark::Projectile).then_some(id)
}

/// Test the player's footprint.  On a hit the obstacle is marked as a crash
/// site and its id is returned.
pub fn player_hit(registry: &mut ObstacleRegistry, footprint: &BoundingBox) -> Option<ObstacleId> {
    let id = registry.overlapping(footprint)?;
    registry.mark(id, CollisionMark::Player).then_some(id)
}
