use bounce::config::Physics;
use bounce::entities::*;
use bounce::gameboard::*;
use bounce::geometry::Rect;

/// 10×10 entity at the origin.
fn entity() -> MovingEntity {
    MovingEntity::new(Rect::new(0.0, 0.0, 10.0, 10.0), Physics::default())
}

fn wall_at(x: f32) -> Rect {
    Rect::new(x, 0.0, 5.0, 10.0)
}

// ── empty board ───────────────────────────────────────────────────────────────

#[test]
fn empty_board_returns_sentinels() {
    let board = Gameboard::new();
    let e = entity();
    assert_eq!(board.limit_right(&e), f32::INFINITY);
    assert_eq!(board.limit_left(&e), f32::NEG_INFINITY);
    assert_eq!(board.limit_under(&e), f32::INFINITY);
    assert!(!board.is_colliding_wall_right(&e));
    assert!(!board.is_colliding_wall_left(&e));
}

// ── limit_right ───────────────────────────────────────────────────────────────

#[test]
fn limit_right_is_gap_to_nearest_wall() {
    let board = Gameboard::from_rects(&[wall_at(50.0), wall_at(15.0), wall_at(30.0)], &[], &[]);
    assert_eq!(board.limit_right(&entity()), 5.0);
}

#[test]
fn limit_right_ignores_walls_on_the_left() {
    let board = Gameboard::from_rects(&[wall_at(-20.0)], &[], &[]);
    assert_eq!(board.limit_right(&entity()), f32::INFINITY);
}

#[test]
fn limit_right_ignores_walls_touching_only_at_a_corner() {
    // Wall sits exactly below the entity's vertical extent
    let below = Rect::new(20.0, 10.0, 5.0, 10.0);
    let above = Rect::new(20.0, -10.0, 5.0, 10.0);
    let board = Gameboard::from_rects(&[below, above], &[], &[]);
    assert_eq!(board.limit_right(&entity()), f32::INFINITY);
}

#[test]
fn limit_right_ignores_ground_obstacles() {
    let board = Gameboard::from_rects(&[], &[wall_at(20.0)], &[wall_at(12.0)]);
    assert_eq!(board.limit_right(&entity()), f32::INFINITY);
}

#[test]
fn partial_vertical_overlap_counts() {
    let low = Rect::new(20.0, 9.0, 5.0, 10.0);
    let board = Gameboard::from_rects(&[low], &[], &[]);
    assert_eq!(board.limit_right(&entity()), 10.0);
}

// ── limit_left ────────────────────────────────────────────────────────────────

#[test]
fn limit_left_is_negative_gap_to_nearest_wall() {
    let board = Gameboard::from_rects(&[wall_at(-30.0), wall_at(-12.0)], &[], &[]);
    // nearest wall's right edge is at -7
    assert_eq!(board.limit_left(&entity()), -7.0);
}

#[test]
fn limit_left_ignores_walls_on_the_right() {
    let board = Gameboard::from_rects(&[wall_at(20.0)], &[], &[]);
    assert_eq!(board.limit_left(&entity()), f32::NEG_INFINITY);
}

// ── limit_under ───────────────────────────────────────────────────────────────

#[test]
fn limit_under_is_gap_to_nearest_floor() {
    let far = Rect::new(-50.0, 40.0, 100.0, 1.0);
    let near = Rect::new(5.0, 25.0, 20.0, 1.0);
    let board = Gameboard::from_rects(&[], &[far, near], &[]);
    assert_eq!(board.limit_under(&entity()), 15.0);
}

#[test]
fn limit_under_ignores_floors_beside_the_entity() {
    let beside = Rect::new(10.0, 20.0, 20.0, 1.0);
    let board = Gameboard::from_rects(&[], &[beside], &[]);
    assert_eq!(board.limit_under(&entity()), f32::INFINITY);
}

#[test]
fn limit_under_is_zero_when_standing() {
    let floor = Rect::new(-10.0, 10.0, 100.0, 1.0);
    let board = Gameboard::from_rects(&[], &[floor], &[]);
    assert_eq!(board.limit_under(&entity()), 0.0);
}

// ── wall contact ──────────────────────────────────────────────────────────────

#[test]
fn adjoining_wall_is_a_collision() {
    let board = Gameboard::from_rects(&[wall_at(10.0), wall_at(-5.0)], &[], &[]);
    let e = entity();
    assert!(board.is_colliding_wall_right(&e));
    assert!(board.is_colliding_wall_left(&e));
}

#[test]
fn distant_wall_is_not_a_collision() {
    let board = Gameboard::from_rects(&[wall_at(11.0), wall_at(-6.0)], &[], &[]);
    let e = entity();
    assert!(!board.is_colliding_wall_right(&e));
    assert!(!board.is_colliding_wall_left(&e));
}

#[test]
fn wall_within_tolerance_counts_as_adjoining() {
    let gap = CONTACT_TOLERANCE * 0.9;
    let board = Gameboard::from_rects(&[wall_at(10.0 + gap), wall_at(-5.0 - gap)], &[], &[]);
    let e = entity();
    assert!(board.is_colliding_wall_right(&e));
    assert!(board.is_colliding_wall_left(&e));
}

#[test]
fn wall_past_tolerance_is_not_adjoining() {
    let gap = 0.01;
    let board = Gameboard::from_rects(&[wall_at(10.0 + gap), wall_at(-5.0 - gap)], &[], &[]);
    let e = entity();
    assert!(!board.is_colliding_wall_right(&e));
    assert!(!board.is_colliding_wall_left(&e));
}

// ── collections ───────────────────────────────────────────────────────────────

#[test]
fn ids_are_unique_across_roles() {
    let mut board = Gameboard::new();
    let a = board.add(ObstacleRole::Wall, wall_at(20.0));
    let b = board.add(ObstacleRole::Ground, wall_at(20.0));
    let c = board.add(ObstacleRole::Decoration, wall_at(20.0));
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
    assert_eq!(board.obstacles(ObstacleRole::Wall).len(), 1);
    assert_eq!(board.obstacles(ObstacleRole::Ground).len(), 1);
    assert_eq!(board.obstacles(ObstacleRole::Decoration).len(), 1);
}

#[test]
fn insertion_order_is_kept() {
    let mut board = Gameboard::new();
    let first = board.add(ObstacleRole::Wall, wall_at(40.0));
    let second = board.add(ObstacleRole::Wall, wall_at(20.0));
    let ids: Vec<_> = board.obstacles(ObstacleRole::Wall).iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn remove_takes_obstacle_out_of_queries() {
    let mut board = Gameboard::new();
    let id = board.add(ObstacleRole::Wall, wall_at(20.0));
    assert_eq!(board.limit_right(&entity()), 10.0);

    let removed = board.remove(id).expect("obstacle should exist");
    assert_eq!(removed.role, ObstacleRole::Wall);
    assert_eq!(board.limit_right(&entity()), f32::INFINITY);
    assert!(board.remove(id).is_none());
}

#[test]
fn sprite_payload_is_kept() {
    let mut board = Gameboard::new();
    board.add_with_sprite(ObstacleRole::Decoration, wall_at(0.0), Some("star".to_string()));
    let deco = &board.obstacles(ObstacleRole::Decoration)[0];
    assert_eq!(deco.sprite.as_deref(), Some("star"));
}

// ── bullets ───────────────────────────────────────────────────────────────────

fn bullet_at(left: f32, top: f32, v_y: f32) -> MovingEntity {
    MovingEntity {
        v_y,
        ..MovingEntity::new(Rect::new(left, top, 1.0, 1.5), Physics::default())
    }
}

#[test]
fn move_bullets_goes_straight_up() {
    let mut board = Gameboard::new();
    board.bullets.push(bullet_at(5.0, 50.0, -4.0));
    board.move_bullets();
    board.move_bullets();
    assert_eq!(board.bullets[0].rect.top, 42.0);
    assert_eq!(board.bullets[0].rect.left, 5.0);
}

#[test]
fn each_bullet_moves_by_its_own_velocity() {
    let mut board = Gameboard::new();
    board.bullets.push(bullet_at(5.0, 50.0, -1.0));
    board.bullets.push(bullet_at(20.0, 50.0, -10.0));
    board.move_bullets();
    assert_eq!(board.bullets[0].rect.top, 49.0);
    assert_eq!(board.bullets[1].rect.top, 40.0);
}

#[test]
fn cull_drops_only_offscreen_bullets() {
    let area = Rect::new(0.0, 0.0, 100.0, 100.0);
    let mut board = Gameboard::new();
    board.bullets.push(MovingEntity::new(Rect::new(5.0, 50.0, 1.0, 1.5), Physics::default()));
    board.bullets.push(MovingEntity::new(Rect::new(5.0, -2.0, 1.0, 1.5), Physics::default()));
    assert_eq!(board.cull_bullets(&area), 1);
    assert_eq!(board.bullets.len(), 1);
    assert_eq!(board.bullets[0].rect.top, 50.0);
}
