mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use bounce::compute::{init_state, tick};
use bounce::config::{BulletSpec, GameConfig, Physics, PlayBand};
use bounce::intent::{InputEvent, Intent, Key};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Columns kept between the screen edge and the play band.
const BAND_MARGIN: f32 = 4.0;

#[derive(Parser, Debug)]
#[command(name = "bounce")]
#[command(about = "Run-and-jump arcade toy in the terminal")]
struct Cli {
    /// RON file with physics, play band, bullet and control settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where log output goes; the terminal itself is busy drawing
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("bounce.log"));
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Settings in terminal cells, used when no config file is given.
fn terminal_config(width: f32) -> GameConfig {
    GameConfig {
        physics: Physics {
            speed_unit: 0.5,
            gravity: 0.04,
            leap_force: 3.0,
            ..Physics::default()
        },
        play_band: PlayBand {
            left: BAND_MARGIN,
            right: (width - BAND_MARGIN).max(BAND_MARGIN + 1.0),
        },
        bullet: BulletSpec { speed: 1.0, width: 1.0 },
        ..GameConfig::default()
    }
}

/// Translate a terminal key into the core's key identifiers.
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char(c) => Some(Key::from_char(c)),
        _ => None,
    }
}

enum LoopExit {
    Quit,
    Restart,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> Result<LoopExit> {
    let (width, height) = terminal::size()?;
    let mut state = init_state(config, width as f32, height as f32, &mut thread_rng());
    let intent = Intent::from_config(config);
    let mut events = Vec::new();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        events.clear();
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if code == KeyCode::Esc
                || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
            {
                return Ok(LoopExit::Quit);
            }
            if let Some(key) = map_key(code) {
                // Reserved keys never reach the intent layer; validation
                // refuses to bind them.
                match key {
                    Key::Char('q') => return Ok(LoopExit::Quit),
                    Key::Char('r') => return Ok(LoopExit::Restart),
                    _ => {}
                }
                events.push(match kind {
                    KeyEventKind::Release => InputEvent::KeyUp(key),
                    KeyEventKind::Press | KeyEventKind::Repeat => InputEvent::KeyDown(key),
                });
            }
        }

        tick(&mut state, &intent, &events);
        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log)?;

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => {
            let (width, _) = terminal::size()?;
            let config = terminal_config(width as f32);
            config.validate().context("built-in terminal config")?;
            config
        }
    };
    log::info!("starting with {config:?}");

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &config, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, config: &GameConfig, rx: &mpsc::Receiver<Event>) -> Result<()> {
    loop {
        match game_loop(out, config, rx)? {
            LoopExit::Quit => break,
            LoopExit::Restart => log::info!("restarting session"),
        }
    }
    Ok(())
}
