//! All game entity types: pure data plus derived state predicates.
//!
//! Movement itself lives in `compute`, obstacle queries in `gameboard`.

use crate::config::{Physics, PlayBand};
use crate::gameboard::Gameboard;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Left,
    Right,
}

/// Visual state a presentation layer picks a sprite for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    MoveLeft,
    MoveRight,
    Crashed,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleRole {
    /// Floors and platforms; stop vertical motion.
    Ground,
    /// Vertical walls; stop horizontal motion.
    Wall,
    /// Scenery, never collides.
    Decoration,
}

/// Handle assigned by the gameboard on insertion, unique per board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub rect: Rect,
    pub role: ObstacleRole,
    /// Name of the visual the host should draw for this obstacle, if any.
    pub sprite: Option<String>,
}

// ── Moving entities ───────────────────────────────────────────────────────────

/// A player, a bullet or any other dynamic actor.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingEntity {
    pub rect: Rect,
    pub v_x: f32,
    pub v_y: f32,
    pub direction: Direction,
    pub physics: Physics,
}

impl MovingEntity {
    /// An entity at rest, facing left.
    pub fn new(rect: Rect, physics: Physics) -> Self {
        Self {
            rect,
            v_x: 0.0,
            v_y: 0.0,
            direction: Direction::Left,
            physics,
        }
    }

    /// The player starts facing left with a slight upward drift.
    pub fn player(rect: Rect, physics: Physics) -> Self {
        Self {
            v_y: -physics.speed_unit / 3.0,
            ..Self::new(rect, physics)
        }
    }

    pub fn is_mid_air(&self) -> bool {
        self.v_y != 0.0
    }

    pub fn is_jumping(&self) -> bool {
        self.v_y < 0.0
    }

    pub fn is_falling(&self) -> bool {
        self.v_y > 0.0
    }

    pub fn is_moving_right(&self) -> bool {
        self.v_x > 0.0
    }

    pub fn is_moving_left(&self) -> bool {
        self.v_x < 0.0
    }

    pub fn is_mid_x(&self) -> bool {
        self.is_moving_left() || self.is_moving_right()
    }

    /// True once the entity has left the playable band on either side.
    pub fn is_crashed(&self, band: &PlayBand) -> bool {
        self.rect.left < band.left || self.rect.right() > band.right
    }

    /// Crashed wins over motion; a still entity is idle.
    pub fn motion_state(&self, band: &PlayBand) -> MotionState {
        if self.is_crashed(band) {
            MotionState::Crashed
        } else if self.is_moving_right() {
            MotionState::MoveRight
        } else if self.is_moving_left() {
            MotionState::MoveLeft
        } else {
            MotionState::Idle
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one session mutates tick by tick.  The board never owns the
/// player; the player only reads the board.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: MovingEntity,
    pub board: Gameboard,
    pub band: PlayBand,
    /// Visible area; bullets leaving it are dropped.
    pub area: Rect,
    pub frame: u64,
}
