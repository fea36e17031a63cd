use space_garbage::collision::{player_hit, projectile_hit};
use space_garbage::entities::{BoundingBox, CollisionMark};
use space_garbage::registry::ObstacleRegistry;

fn registry_with_box() -> (ObstacleRegistry, space_garbage::entities::ObstacleId) {
    let mut registry = ObstacleRegistry::new();
    // rows 3..6, columns 4..7
    let id = registry.register(BoundingBox::new(3.0, 4.0, 3, 3));
    (registry, id)
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[test]
fn register_and_deregister() {
    let (mut registry, id) = registry_with_box();
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(id));
    let removed = registry.deregister(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(registry.is_empty());
    assert!(registry.deregister(id).is_none());
}

#[test]
fn ids_are_never_reused() {
    let mut registry = ObstacleRegistry::new();
    let a = registry.register(BoundingBox::new(0.0, 0.0, 1, 1));
    registry.deregister(a);
    let b = registry.register(BoundingBox::new(0.0, 0.0, 1, 1));
    assert_ne!(a, b);
}

#[test]
fn update_moves_the_box() {
    let (mut registry, id) = registry_with_box();
    registry.update(id, BoundingBox::new(10.0, 4.0, 3, 3));
    assert_eq!(registry.has_collision(4.0, 5.0), None);
    assert_eq!(registry.has_collision(11.0, 5.0), Some(id));
}

#[test]
fn point_in_rectangle_is_half_open() {
    let (registry, id) = registry_with_box();
    assert_eq!(registry.has_collision(3.0, 4.0), Some(id));
    assert_eq!(registry.has_collision(5.9, 6.9), Some(id));
    assert_eq!(registry.has_collision(6.0, 5.0), None);
    assert_eq!(registry.has_collision(4.0, 7.0), None);
    assert_eq!(registry.has_collision(2.9, 5.0), None);
}

#[test]
fn first_registered_obstacle_wins_on_overlap() {
    let mut registry = ObstacleRegistry::new();
    let first = registry.register(BoundingBox::new(0.0, 0.0, 5, 5));
    let _second = registry.register(BoundingBox::new(2.0, 2.0, 5, 5));
    assert_eq!(registry.has_collision(3.0, 3.0), Some(first));
}

// ── Marks ─────────────────────────────────────────────────────────────────────

#[test]
fn projectile_hit_marks_obstacle() {
    let (mut registry, id) = registry_with_box();
    assert_eq!(projectile_hit(&mut registry, 4.0, 5.0), Some(id));
    assert_eq!(registry.get(id).unwrap().mark, Some(CollisionMark::Projectile));
}

#[test]
fn projectile_miss_leaves_registry_untouched() {
    let (mut registry, id) = registry_with_box();
    assert_eq!(projectile_hit(&mut registry, 0.0, 0.0), None);
    assert_eq!(registry.get(id).unwrap().mark, None);
}

#[test]
fn marked_obstacle_ignores_further_hits() {
    let (mut registry, id) = registry_with_box();
    assert_eq!(projectile_hit(&mut registry, 4.0, 5.0), Some(id));
    assert_eq!(projectile_hit(&mut registry, 4.0, 5.0), None);
    let footprint = BoundingBox::new(3.0, 3.0, 2, 2);
    assert_eq!(player_hit(&mut registry, &footprint), None);
    assert!(!registry.mark(id, CollisionMark::Player));
    assert_eq!(registry.get(id).unwrap().mark, Some(CollisionMark::Projectile));
}

#[test]
fn mark_is_consumed_once() {
    let (mut registry, id) = registry_with_box();
    projectile_hit(&mut registry, 4.0, 5.0);
    assert!(!registry.take_mark(id, CollisionMark::Player));
    assert!(registry.take_mark(id, CollisionMark::Projectile));
    assert!(!registry.take_mark(id, CollisionMark::Projectile));
}

#[test]
fn player_footprint_overlap_marks_crash() {
    let (mut registry, id) = registry_with_box();
    let touching = BoundingBox::new(5.0, 6.0, 2, 2);
    assert_eq!(player_hit(&mut registry, &touching), Some(id));
    assert_eq!(registry.get(id).unwrap().mark, Some(CollisionMark::Player));
}

#[test]
fn adjacent_footprint_does_not_collide() {
    let (mut registry, _) = registry_with_box();
    let beside = BoundingBox::new(3.0, 7.0, 3, 2);
    let below = BoundingBox::new(6.0, 4.0, 2, 3);
    assert_eq!(player_hit(&mut registry, &beside), None);
    assert_eq!(player_hit(&mut registry, &below), None);
}

// ── Discrete stepping ─────────────────────────────────────────────────────────

#[test]
fn projectile_stepping_through_box_is_detected() {
    let (mut registry, id) = registry_with_box();
    let mut row = 8.0;
    let mut hit = None;
    while row > 0.0 && hit.is_none() {
        row -= 1.0;
        hit = projectile_hit(&mut registry, row, 5.0);
    }
    assert_eq!(hit, Some(id));
}

#[test]
fn projectile_jumping_over_box_is_an_accepted_miss() {
    let mut registry = ObstacleRegistry::new();
    registry.register(BoundingBox::new(4.0, 4.0, 1, 3));
    // Steps of 2 rows sample 7, 5, 3, 1 and never land on row 4.
    let mut row = 9.0;
    let mut hit = None;
    while row > 0.0 && hit.is_none() {
        row -= 2.0;
        hit = projectile_hit(&mut registry, row, 5.0);
    }
    assert_eq!(hit, None);
}
