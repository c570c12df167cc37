//! Input-to-intent mapping: key presses become velocity, facing and bullets.
//!
//! Keys are abstract identifiers; the host translates its own device events
//! into [`InputEvent`]s.  Which key means what is decided by a [`Controls`]
//! table handed in at construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::{BulletSpec, ConfigError, GameConfig, Physics};
use crate::entities::{Direction, MovingEntity};
use crate::gameboard::Gameboard;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Char(char),
}

impl Key {
    /// Keys the host keeps for itself: quit and restart.
    pub const RESERVED: [Key; 2] = [Key::Char('q'), Key::Char('r')];

    /// Letter keys arrive lowercased, whatever the shift state.
    pub fn from_char(c: char) -> Key {
        match c {
            ' ' => Key::Space,
            c => Key::Char(c.to_ascii_lowercase()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveRight,
    MoveLeft,
    Shoot,
    Jump,
}

/// Logical action → device keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub move_right: Vec<Key>,
    pub move_left: Vec<Key>,
    pub shoot: Vec<Key>,
    /// May be left empty to disable jumping.
    pub jump: Vec<Key>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            move_right: vec![Key::Right, Key::Char('d')],
            move_left: vec![Key::Left, Key::Char('a')],
            shoot: vec![Key::Space],
            jump: vec![Key::Up, Key::Char('w')],
        }
    }
}

impl Controls {
    fn bindings(&self) -> [(Action, &[Key]); 4] {
        [
            (Action::MoveRight, self.move_right.as_slice()),
            (Action::MoveLeft, self.move_left.as_slice()),
            (Action::Shoot, self.shoot.as_slice()),
            (Action::Jump, self.jump.as_slice()),
        ]
    }

    pub fn action_for(&self, key: Key) -> Option<Action> {
        self.bindings()
            .into_iter()
            .find(|(_, keys)| keys.contains(&key))
            .map(|(action, _)| action)
    }

    /// Every action but `Jump` needs a key, and no key may serve two actions.
    /// Keys the host never delivers (reserved or uppercase letters) are
    /// rejected too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<Key, Action> = HashMap::new();
        for (action, keys) in self.bindings() {
            if keys.is_empty() && action != Action::Jump {
                return Err(ConfigError::Unbound(action));
            }
            for key in keys {
                if Key::RESERVED.contains(key) {
                    return Err(ConfigError::ReservedKey(format!("{key:?}")));
                }
                if let Key::Char(c) = key {
                    if Key::from_char(*c) != *key {
                        return Err(ConfigError::UppercaseKey(format!("{key:?}")));
                    }
                }
                if let Some(first) = seen.insert(*key, action) {
                    if first != action {
                        return Err(ConfigError::ConflictingBinding {
                            key: format!("{key:?}"),
                            first,
                            second: action,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Applies key events and the per-tick running rule to a player.
#[derive(Clone, Debug)]
pub struct Intent {
    controls: Controls,
    bullet: BulletSpec,
}

impl Intent {
    pub fn new(controls: Controls, bullet: BulletSpec) -> Self {
        Self { controls, bullet }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.controls.clone(), config.bullet)
    }

    /// React to one input event.  Direction keys only take effect while the
    /// player stands still horizontally; key releases are ignored.
    pub fn handle(&self, event: InputEvent, player: &mut MovingEntity, board: &mut Gameboard) {
        let InputEvent::KeyDown(key) = event else {
            return;
        };
        let Some(action) = self.controls.action_for(key) else {
            return;
        };

        match action {
            Action::MoveRight if !player.is_mid_x() => {
                player.direction = Direction::Right;
                player.v_x = player.physics.speed_unit;
            }
            Action::MoveLeft if !player.is_mid_x() => {
                player.direction = Direction::Left;
                player.v_x = -player.physics.speed_unit;
            }
            Action::Shoot => {
                let bullet = spawn_bullet(player, &self.bullet);
                log::debug!("bullet fired from {:?}", bullet.rect);
                board.bullets.push(bullet);
            }
            Action::Jump if !player.is_mid_air() => player.jump(),
            _ => {}
        }
    }

    /// Keep running the way the player faces until a wall is touched on
    /// that side.  Releasing the key does not stop the player.
    pub fn sustain(&self, player: &mut MovingEntity, board: &Gameboard) {
        match player.direction {
            Direction::Right if !board.is_colliding_wall_right(player) => {
                player.v_x = player.physics.speed_unit;
            }
            Direction::Left if !board.is_colliding_wall_left(player) => {
                player.v_x = -player.physics.speed_unit;
            }
            _ => {}
        }
    }
}

/// A bullet centred on the shooter's top edge, heading straight up.
pub fn spawn_bullet(shooter: &MovingEntity, bullet: &BulletSpec) -> MovingEntity {
    let width = bullet.width;
    let rect = Rect::new(
        shooter.rect.center().x - width / 2.0,
        shooter.rect.top,
        width,
        width * 1.5,
    );
    let physics = Physics {
        speed_unit: bullet.speed,
        gravity: 0.0,
        ..Physics::default()
    };
    MovingEntity {
        v_y: -bullet.speed,
        direction: shooter.direction,
        ..MovingEntity::new(rect, physics)
    }
}
