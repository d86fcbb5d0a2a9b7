//! Terminal blockfall runner.
//!
//! Fixed-timestep frame loop: render the current scene, poll input until
//! the tick deadline, then advance the simulation one step. Scenes move
//! Title -> Play -> GameOver and back to Play on restart.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{handle_key_event, is_confirm, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{FrameInput, Scene, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(clock_seed());
    let mut scene = Scene::Title;

    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut frame: u64 = 0;
    let mut input = FrameInput::default();
    let mut confirm = false;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game.board(), scene, frame, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_confirm(key) {
                        confirm = true;
                    }
                    if let Some(action) = handle_key_event(key) {
                        input.press(action);
                    }
                }
                // Terminal auto-repeat and releases carry no new presses.
                Event::Key(_) => {}
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            frame = frame.wrapping_add(1);

            scene = advance_scene(scene, &mut game, frame, &input, confirm);
            input = FrameInput::default();
            confirm = false;
        }
    }
}

/// One scene-machine step per tick.
fn advance_scene(
    scene: Scene,
    game: &mut Game,
    frame: u64,
    input: &FrameInput,
    confirm: bool,
) -> Scene {
    match scene {
        Scene::Title => {
            if confirm {
                Scene::Play
            } else {
                Scene::Title
            }
        }
        Scene::Play => {
            game.update(frame, input);
            if game.active() {
                Scene::Play
            } else {
                Scene::GameOver
            }
        }
        Scene::GameOver => {
            if confirm {
                game.reset();
                Scene::Play
            } else {
                Scene::GameOver
            }
        }
    }
}

/// Seed from the wall clock; a fixed seed would deal the same pieces every
/// run.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
