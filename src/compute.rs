//! Per-tick game logic.
//!
//! Movement is resolved one axis at a time, horizontal first, so a diagonal
//! approach to a corner always settles the same way.  Everything mutates in
//! place; the only outside input besides the state is the injected RNG used
//! when laying out a fresh board.

use rand::Rng;

use crate::config::{GameConfig, Landing};
use crate::entities::{GameState, MovingEntity, ObstacleRole};
use crate::gameboard::Gameboard;
use crate::geometry::Rect;
use crate::intent::{InputEvent, Intent};

/// Player size in world units.
const PLAYER_WIDTH: f32 = 3.0;
const PLAYER_HEIGHT: f32 = 2.0;

/// Decorations scattered over a fresh board.
const DECORATION_COUNT: usize = 12;

// ── Axis-independent movement ────────────────────────────────────────────────

impl MovingEntity {
    /// Advance horizontally, stopping flush against the first wall in the
    /// way.  A hit absorbs all horizontal momentum.
    pub fn move_x(&mut self, board: &Gameboard) {
        let limit_right = board.limit_right(self);
        let limit_left = board.limit_left(self);

        if self.is_moving_right() && self.v_x > limit_right {
            let wall = self.rect.right() + limit_right;
            log::debug!("wall hit on the right at x={wall}");
            self.rect.set_right(wall);
            self.v_x = 0.0;
        } else if self.is_moving_left() && self.v_x < limit_left {
            let wall = self.rect.left + limit_left;
            log::debug!("wall hit on the left at x={wall}");
            self.rect.left = wall;
            self.v_x = 0.0;
        } else {
            self.rect.left += self.v_x;
        }
    }

    /// Apply gravity, then advance vertically, landing on the first floor
    /// underneath.
    pub fn move_y(&mut self, board: &Gameboard) {
        let limit = board.limit_under(self);

        self.v_y += self.physics.mass * self.physics.gravity;

        if self.v_y > limit {
            let floor = self.rect.bottom() + limit;
            self.rect.set_bottom(floor);
            self.land();
        } else {
            self.rect.top += self.v_y;
        }
    }

    fn land(&mut self) {
        let impact = self.v_y;
        self.v_y = match self.physics.landing {
            Landing::Stop => 0.0,
            Landing::Bounce => {
                let rebound = -impact * self.physics.elasticity;
                if rebound.abs() < self.physics.zero {
                    0.0
                } else {
                    rebound
                }
            }
        };
        log::debug!("landed with v_y={impact}, now v_y={}", self.v_y);
    }

    /// Instant upward impulse.  Calling it mid-air re-impulses; gating is up
    /// to the caller.
    pub fn jump(&mut self) {
        self.v_y = -self.physics.speed_unit * self.physics.leap_force;
    }

    /// Shed horizontal speed by the drag factor, snapping to rest near zero.
    ///
    /// `tick` never calls this: a running player keeps full speed until a
    /// wall stops it.  Hosts that want entities to coast to a halt (sliding
    /// debris, a braking actor that has no facing to sustain) call it once
    /// per tick in place of the running rule.
    pub fn decelerate(&mut self) {
        self.v_x *= self.physics.drag;
        if self.v_x.abs() < self.physics.zero {
            self.v_x = 0.0;
        }
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session for a screen of `width` × `height` units.
///
/// The board gets a floor along the bottom, a wall at each screen edge, one
/// ledge to land on and some scenery.  The play band sits inside the walls,
/// so running past it shows as crashed before a wall stops the player.
pub fn init_state(
    config: &GameConfig,
    width: f32,
    height: f32,
    rng: &mut impl Rng,
) -> GameState {
    let band = config.play_band;
    let floor_top = height - 1.0;

    let mut board = Gameboard::new();
    board.add_with_sprite(
        ObstacleRole::Ground,
        Rect::new(0.0, floor_top, width, 1.0),
        Some("floor".to_string()),
    );
    board.add_with_sprite(
        ObstacleRole::Wall,
        Rect::new(0.0, 0.0, 1.0, floor_top),
        Some("wall".to_string()),
    );
    board.add_with_sprite(
        ObstacleRole::Wall,
        Rect::new(width - 1.0, 0.0, 1.0, floor_top),
        Some("wall".to_string()),
    );

    // A ledge in the right third, high enough to need a jump.
    let ledge = Rect::new(
        band.left + (band.right - band.left) * 2.0 / 3.0,
        floor_top - PLAYER_HEIGHT * 3.0,
        ((band.right - band.left) / 6.0).max(1.0),
        1.0,
    );
    board.add_with_sprite(ObstacleRole::Ground, ledge, Some("ledge".to_string()));

    for _ in 0..DECORATION_COUNT {
        let x = rng.gen_range(0.0..width.max(1.0));
        let y = rng.gen_range(0.0..(floor_top / 2.0).max(1.0));
        board.add_with_sprite(
            ObstacleRole::Decoration,
            Rect::new(x, y, 1.0, 1.0),
            Some("star".to_string()),
        );
    }

    let spawn = Rect::new(
        (band.left + band.right) / 2.0 - PLAYER_WIDTH / 2.0,
        floor_top - PLAYER_HEIGHT,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
    );
    log::info!("new session on a {width}x{height} board, player at {spawn:?}");

    GameState {
        player: MovingEntity::player(spawn, config.physics),
        board,
        band,
        area: Rect::new(0.0, 0.0, width, height),
        frame: 0,
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order: key events, sustained running, horizontal then vertical
/// movement, bullets, culling.
pub fn tick(state: &mut GameState, intent: &Intent, events: &[InputEvent]) {
    state.frame += 1;
    log::trace!("tick frame={} events={}", state.frame, events.len());

    for event in events {
        intent.handle(*event, &mut state.player, &mut state.board);
    }
    intent.sustain(&mut state.player, &state.board);

    state.player.move_x(&state.board);
    state.player.move_y(&state.board);

    state.board.move_bullets();
    let culled = state.board.cull_bullets(&state.area);
    if culled > 0 {
        log::debug!("{culled} bullet(s) left the screen");
    }
}
