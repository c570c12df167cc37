//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only picks glyphs
//! from the derived motion state and obstacle roles.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use bounce::entities::{GameState, MotionState, Obstacle, ObstacleRole};
use bounce::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_GROUND: Color = Color::DarkGreen;
const C_WALL: Color = Color::DarkBlue;
const C_DECORATION: Color = Color::DarkGrey;
const C_BULLET: Color = Color::Magenta;
const C_PLAYER: Color = Color::White;
const C_CRASHED: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for role in [ObstacleRole::Decoration, ObstacleRole::Ground, ObstacleRole::Wall] {
        for obstacle in state.board.obstacles(role) {
            draw_obstacle(out, obstacle)?;
        }
    }

    out.queue(style::SetForegroundColor(C_BULLET))?;
    for bullet in &state.board.bullets {
        fill(out, &bullet.rect, '|')?;
    }

    draw_player(out, state)?;
    draw_hud(out, state)?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

fn draw_obstacle<W: Write>(out: &mut W, obstacle: &Obstacle) -> std::io::Result<()> {
    let (color, glyph) = match obstacle.role {
        ObstacleRole::Ground => (C_GROUND, '▀'),
        ObstacleRole::Wall => (C_WALL, '█'),
        ObstacleRole::Decoration => (C_DECORATION, '·'),
    };
    out.queue(style::SetForegroundColor(color))?;
    fill(out, &obstacle.rect, glyph)
}

/// Paint every cell a rectangle covers.  Cells off the top or left edge
/// are skipped.
fn fill<W: Write>(out: &mut W, rect: &Rect, glyph: char) -> std::io::Result<()> {
    let left = rect.left.floor().max(0.0) as u16;
    let top = rect.top.floor().max(0.0) as u16;
    let right = rect.right().ceil().max(0.0) as u16;
    let bottom = rect.bottom().ceil().max(0.0) as u16;

    let row: String = std::iter::repeat(glyph)
        .take(right.saturating_sub(left) as usize)
        .collect();
    for y in top..bottom {
        out.queue(cursor::MoveTo(left, y))?;
        out.queue(Print(&row))?;
    }
    Ok(())
}

// ── Player ────────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (color, head, body) = match state.player.motion_state(&state.band) {
        MotionState::Idle => (C_PLAYER, " o ", "/|\\"),
        MotionState::MoveLeft => (C_PLAYER, "o  ", "<|\\"),
        MotionState::MoveRight => (C_PLAYER, "  o", "/|>"),
        MotionState::Crashed => (C_CRASHED, "x_x", "/ \\"),
    };

    let x = state.player.rect.left.round().max(0.0) as u16;
    let y = state.player.rect.top.round().max(0.0) as u16;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(Print(head))?;
    out.queue(cursor::MoveTo(x, y + 1))?;
    out.queue(Print(body))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let player = &state.player;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Frame:{:>6}  x:{:>6.1} y:{:>5.1}  vx:{:>5.2} vy:{:>5.2}  {:?}",
        state.frame,
        player.rect.left,
        player.rect.top,
        player.v_x,
        player.v_y,
        player.motion_state(&state.band),
    )))?;

    let hint = "← → / A D : Run   ↑ / W : Jump   SPACE : Shoot   R : Restart   Q : Quit";
    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
