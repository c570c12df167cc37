//! Obstacle field: static obstacles partitioned by role, plus live bullets.
//!
//! Every query returns a signed distance from one of the entity's edges to
//! the nearest obstruction, never an absolute coordinate.  When nothing
//! obstructs, the distance is infinite (positive for rightward and downward
//! queries, negative for leftward ones), so callers can compare velocities
//! against it without special cases.

use crate::entities::{MovingEntity, Obstacle, ObstacleId, ObstacleRole};
use crate::geometry::Rect;

/// Gap at or below which an obstacle counts as touching the entity.  Also
/// how far an obstacle may reach past the entity's leading edge and still
/// count as ahead of it.
pub const CONTACT_TOLERANCE: f32 = 1e-3;

#[derive(Clone, Debug, Default)]
pub struct Gameboard {
    grounds: Vec<Obstacle>,
    walls: Vec<Obstacle>,
    decorations: Vec<Obstacle>,
    /// Projectiles in flight, owned here once fired.
    pub bullets: Vec<MovingEntity>,
    next_id: u32,
}

impl Gameboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from rectangles grouped by role.
    pub fn from_rects(walls: &[Rect], grounds: &[Rect], decorations: &[Rect]) -> Self {
        let mut board = Self::new();
        for rect in walls {
            board.add(ObstacleRole::Wall, *rect);
        }
        for rect in grounds {
            board.add(ObstacleRole::Ground, *rect);
        }
        for rect in decorations {
            board.add(ObstacleRole::Decoration, *rect);
        }
        board
    }

    pub fn add(&mut self, role: ObstacleRole, rect: Rect) -> ObstacleId {
        self.add_with_sprite(role, rect, None)
    }

    pub fn add_with_sprite(
        &mut self,
        role: ObstacleRole,
        rect: Rect,
        sprite: Option<String>,
    ) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.collection_mut(role).push(Obstacle { id, rect, role, sprite });
        id
    }

    /// Remove an obstacle from whichever collection holds it.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        for role in [ObstacleRole::Ground, ObstacleRole::Wall, ObstacleRole::Decoration] {
            let list = self.collection_mut(role);
            if let Some(pos) = list.iter().position(|o| o.id == id) {
                return Some(list.remove(pos));
            }
        }
        None
    }

    pub fn obstacles(&self, role: ObstacleRole) -> &[Obstacle] {
        match role {
            ObstacleRole::Ground => &self.grounds,
            ObstacleRole::Wall => &self.walls,
            ObstacleRole::Decoration => &self.decorations,
        }
    }

    fn collection_mut(&mut self, role: ObstacleRole) -> &mut Vec<Obstacle> {
        match role {
            ObstacleRole::Ground => &mut self.grounds,
            ObstacleRole::Wall => &mut self.walls,
            ObstacleRole::Decoration => &mut self.decorations,
        }
    }

    // ── Directional queries ───────────────────────────────────────────────────

    /// Gap from the entity's right edge to the nearest wall on its right
    /// that shares part of its vertical extent.
    pub fn limit_right(&self, entity: &MovingEntity) -> f32 {
        let r = &entity.rect;
        self.walls
            .iter()
            .filter(|w| w.rect.overlaps_y(r) && w.rect.left >= r.right() - CONTACT_TOLERANCE)
            .map(|w| w.rect.left - r.right())
            .fold(f32::INFINITY, f32::min)
    }

    /// Gap from the entity's left edge to the nearest wall on its left.
    /// Negative or zero; `-inf` when nothing is there.
    pub fn limit_left(&self, entity: &MovingEntity) -> f32 {
        let r = &entity.rect;
        self.walls
            .iter()
            .filter(|w| w.rect.overlaps_y(r) && w.rect.right() <= r.left + CONTACT_TOLERANCE)
            .map(|w| w.rect.right() - r.left)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Gap from the entity's bottom edge to the nearest floor below it that
    /// shares part of its horizontal extent.
    pub fn limit_under(&self, entity: &MovingEntity) -> f32 {
        let r = &entity.rect;
        self.grounds
            .iter()
            .filter(|g| g.rect.overlaps_x(r) && g.rect.top >= r.bottom() - CONTACT_TOLERANCE)
            .map(|g| g.rect.top - r.bottom())
            .fold(f32::INFINITY, f32::min)
    }

    /// True when a wall on the right is no more than `CONTACT_TOLERANCE`
    /// away.  An entity that stopped that close short of a wall counts as
    /// touching it and will not be pushed on by the running rule.
    pub fn is_colliding_wall_right(&self, entity: &MovingEntity) -> bool {
        self.limit_right(entity) <= CONTACT_TOLERANCE
    }

    /// Mirror of [`Gameboard::is_colliding_wall_right`], with the same
    /// tolerance.
    pub fn is_colliding_wall_left(&self, entity: &MovingEntity) -> bool {
        self.limit_left(entity) >= -CONTACT_TOLERANCE
    }

    // ── Bullets ───────────────────────────────────────────────────────────────

    /// Move every bullet by its own velocity.
    pub fn move_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.rect.translate(bullet.v_x, bullet.v_y);
        }
    }

    /// Drop bullets that no longer overlap `area`; returns how many went.
    pub fn cull_bullets(&mut self, area: &Rect) -> usize {
        let before = self.bullets.len();
        self.bullets.retain(|b| b.rect.overlaps(area));
        before - self.bullets.len()
    }
}
