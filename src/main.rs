//! Terminal lane-dodging runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer; the
//! simulation itself lives in `lane_rush::core` and advances on a fixed
//! 16 ms tick regardless of render or input timing.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use lane_rush::core::GameState;
use lane_rush::input::{map_key, should_quit, ControlScheme, IntentQueue};
use lane_rush::term::{FrameBuffer, RoadView, TerminalRenderer, Viewport};
use lane_rush::types::{GameAction, VehicleKind, TICK_MS};

struct Options {
    vehicle: VehicleKind,
    controls: ControlScheme,
    seed: u32,
}

fn parse_args() -> Result<Options> {
    let mut vehicle = VehicleKind::Car;
    let mut controls = ControlScheme::Arrows;
    let mut seed = default_seed();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--vehicle" => {
                let value = match args.next() {
                    Some(v) => v,
                    None => bail!("--vehicle requires a value (bike, car, truck)"),
                };
                vehicle = match VehicleKind::from_str(&value) {
                    Some(kind) => kind,
                    None => bail!("unknown vehicle '{value}' (expected bike, car, or truck)"),
                };
            }
            "--controls" => {
                let value = match args.next() {
                    Some(v) => v,
                    None => bail!("--controls requires a value (arrows, qd)"),
                };
                controls = match ControlScheme::from_str(&value) {
                    Some(scheme) => scheme,
                    None => bail!("unknown control scheme '{value}' (expected arrows or qd)"),
                };
            }
            "--seed" => {
                let value = match args.next() {
                    Some(v) => v,
                    None => bail!("--seed requires a value"),
                };
                seed = match value.parse() {
                    Ok(n) => n,
                    Err(_) => bail!("invalid seed '{value}' (expected a u32)"),
                };
            }
            other => bail!("unknown argument '{other}'"),
        }
    }

    Ok(Options {
        vehicle,
        controls,
        seed,
    })
}

fn default_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let options = parse_args()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &options);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, options: &Options) -> Result<()> {
    let mut game_state = GameState::new(options.vehicle, options.seed);
    let bindings = options.controls.bindings();

    let mut view = RoadView::default();
    let mut queue = IntentQueue::new();
    let mut snap = game_state.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key, &bindings) {
                        // After a crash, Enter restarts instead of starting.
                        let action = if action == GameAction::Start && game_state.game_over() {
                            GameAction::Restart
                        } else {
                            action
                        };
                        queue.push(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in queue.take() {
                game_state.apply_action(action);
            }
            game_state.tick();
        }
    }
}
