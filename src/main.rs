//! Terminal arcade runner (default binary).
//!
//! Picks a game from the environment and arguments, then runs a fixed 16ms tick
//! loop: render, poll input until the next tick, advance the gravity clock.

use std::env;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_arcade::config::{Cli, Config, GameKind, USAGE};
use tui_arcade::core::{GameState, GravityClock, SnakeGame};
use tui_arcade::input::{handle_key_event, handle_snake_key, is_restart, should_quit};
use tui_arcade::journal::Journal;
use tui_arcade::term::{BlocksView, FrameBuffer, SnakeView, TerminalRenderer, Viewport};
use tui_arcade::types::{GameAction, Phase, SnakeStep, SNAKE_STEP_MS, TICK_MS};

/// Best result of the session, reported after the terminal is restored.
struct Summary {
    best_score: u32,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match Config::from_env().with_args(&args)? {
        Cli::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Cli::Run(config) => config,
    };

    let mut journal = match config.log_path.as_deref() {
        Some(path) => Journal::open(path)?,
        None => Journal::disabled(),
    };
    journal.session_start(config.game.as_str(), config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match config.game {
        GameKind::Blocks => run_blocks(&mut term, &config, &mut journal),
        GameKind::Snake => run_snake(&mut term, &config, &mut journal),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    journal.session_end(config.game.as_str());

    let summary = result?;
    eprintln!(
        "[arcade] {} seed={} best_score={} games_finished={}",
        config.game.as_str(),
        config.seed,
        summary.best_score,
        journal.games_finished()
    );
    Ok(())
}

/// Wait until the next tick for a key event. Release events are dropped;
/// repeats count as presses.
fn poll_key(
    term: &mut TerminalRenderer,
    last_tick: Instant,
    tick: Duration,
) -> Result<Option<KeyEvent>> {
    let timeout = tick.saturating_sub(last_tick.elapsed());
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
        Event::Resize(..) => {
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run_blocks(
    term: &mut TerminalRenderer,
    config: &Config,
    journal: &mut Journal,
) -> Result<Summary> {
    let mut game = GameState::new(config.seed);
    let mut clock = GravityClock::new();
    let view = BlocksView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut summary = Summary { best_score: 0 };

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        view.render_into(&game.snapshot(), viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(key) = poll_key(term, last_tick, tick)? {
            if should_quit(key) {
                summary.best_score = summary.best_score.max(game.score());
                return Ok(summary);
            }
            if let Some(action) = handle_key_event(key) {
                if action == GameAction::Reset {
                    summary.best_score = summary.best_score.max(game.score());
                }
                let restarts = matches!(action, GameAction::Start | GameAction::Reset);
                if game.apply_action(action) && restarts {
                    clock.reset();
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            let running = game.phase() == Phase::Running;
            if running && clock.advance(elapsed_ms, game.drop_interval_ms()) {
                game.soft_drop();
            }
        }

        if let Some(ev) = game.take_last_event() {
            journal.lock(ev);
            if ev.game_over {
                let snap = game.snapshot();
                summary.best_score = summary.best_score.max(snap.score);
                journal.blocks_over(&snap);
            }
        }
    }
}

fn run_snake(
    term: &mut TerminalRenderer,
    config: &Config,
    journal: &mut Journal,
) -> Result<Summary> {
    let mut game = SnakeGame::new(config.seed);
    let mut clock = GravityClock::new();
    let view = SnakeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut summary = Summary { best_score: 0 };

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        view.render_into(&game.snapshot(), viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(key) = poll_key(term, last_tick, tick)? {
            if should_quit(key) {
                summary.best_score = summary.best_score.max(game.score());
                return Ok(summary);
            }
            if is_restart(key) {
                summary.best_score = summary.best_score.max(game.score());
                game.restart();
                clock.reset();
            } else if let Some(dir) = handle_snake_key(key) {
                game.steer(dir);
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed < tick {
            continue;
        }
        last_tick = Instant::now();
        let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
        if !clock.advance(elapsed_ms, SNAKE_STEP_MS) {
            continue;
        }

        let step = game.step();
        let ended = step == SnakeStep::Died || (step == SnakeStep::Ate && game.game_over());
        if ended {
            let snap = game.snapshot();
            summary.best_score = summary.best_score.max(snap.score);
            journal.snake_over(&snap);
        }
    }
}
