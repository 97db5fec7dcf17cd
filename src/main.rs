//! Wrap Snake entry point
//!
//! Runs a session in the terminal: an autopilot feeds the input queue,
//! the clock paces ticks at the snake's current speed, and every frame is
//! drawn as text.
//!
//! Usage: wrap-snake [--config FILE] [--ticks N] [--seed N] [--keys K,..] [--json] [--quiet]

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use wrap_snake::GameConfig;
use wrap_snake::clock::TickClock;
use wrap_snake::input::{InputEvent, InputQueue};
use wrap_snake::renderer::{Frame, Renderer, TextTarget};
use wrap_snake::sim::{BoardStatus, Direction, EntityKind, GameEvent, GameSession, tick};

/// Wrap-around snake in the terminal
#[derive(Parser, Debug)]
#[command(name = "wrap-snake")]
#[command(version, about = "Wrap-around grid snake, driven by an autopilot")]
struct Cli {
    /// JSON game config (defaults apply to missing fields)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(long, default_value = "300")]
    ticks: u64,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Key presses to replay, one per tick from the first (e.g. up,q,q,left)
    #[arg(long, value_delimiter = ',')]
    keys: Vec<String>,

    /// Dump the final frame as JSON
    #[arg(long)]
    json: bool,

    /// Do not draw frames
    #[arg(long)]
    quiet: bool,
}

/// Map replayed key names to input events
fn key_script(keys: &[String]) -> Result<Vec<InputEvent>, String> {
    keys.iter()
        .map(|key| InputEvent::from_key(key).ok_or_else(|| format!("unknown key: {key}")))
        .collect()
}

/// Wrap-aware step count from `from` to `to` along one axis
fn wrap_distance(from: i32, to: i32, size: i32) -> i32 {
    let d = (to - from).rem_euclid(size);
    d.min(size - d)
}

/// Pick a turn: stay alive first, then head for the nearest good apple
fn autopilot(session: &GameSession, rng: &mut Pcg32) -> Option<InputEvent> {
    let snake = &session.snake;
    let grid = session.grid;
    let current = snake.direction();

    let safe = |dir: Direction| {
        let next = grid.wrap(snake.head(), dir.delta());
        let tail = snake.body().back().copied();
        let hits_body = snake.body().iter().any(|c| *c == next && Some(*c) != tail);
        let hits_hazard = session
            .entity_at(next)
            .is_some_and(|e| e.kind != EntityKind::GoodApple);
        !hits_body && !hits_hazard
    };
    let distance = |dir: Direction, target: IVec2| {
        let next = grid.wrap(snake.head(), dir.delta());
        wrap_distance(next.x, target.x, grid.width) + wrap_distance(next.y, target.y, grid.height)
    };

    let mut options: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|d| current.can_turn_to(*d) && safe(*d))
        .collect();
    if options.is_empty() {
        return None;
    }

    let apple = session
        .entities
        .iter()
        .filter(|e| e.kind == EntityKind::GoodApple)
        .map(|e| e.position)
        .min_by_key(|p| {
            wrap_distance(snake.head().x, p.x, grid.width)
                + wrap_distance(snake.head().y, p.y, grid.height)
        });

    let choice = match apple {
        Some(target) => {
            options.sort_by_key(|d| distance(*d, target));
            options[0]
        }
        None => options[rng.random_range(0..options.len())],
    };
    (choice != current).then_some(InputEvent::Turn(choice))
}

fn run(options: Cli) -> Result<(), Box<dyn Error>> {
    let script = key_script(&options.keys)?;
    let config = match &options.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let seed = options.seed.unwrap_or_else(|| rand::rng().random());
    let mut session = GameSession::new(config, seed)?;
    let mut pilot_rng = Pcg32::seed_from_u64(seed ^ 0x5eed);

    let renderer = Renderer::new(session.config.cell_size);
    let mut target = TextTarget::new(
        session.grid.width,
        session.grid.height,
        session.config.cell_size,
    );
    let mut queue = InputQueue::new();
    let mut clock = TickClock::new();
    let mut last_time = Instant::now();
    let mut resets = 0u32;

    while !session.is_finished() {
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f32();
        last_time = now;

        for _ in 0..clock.advance(dt, session.snake.speed()) {
            let scripted = usize::try_from(session.time_ticks)
                .ok()
                .and_then(|i| script.get(i).copied());
            if session.time_ticks >= options.ticks {
                queue.push(InputEvent::Quit);
            } else if let Some(event) = scripted {
                queue.push(event);
            } else if let Some(event) = autopilot(&session, &mut pilot_rng) {
                queue.push(event);
            }

            let report = tick(&mut session, &queue.drain());
            for event in &report.events {
                match event {
                    GameEvent::SnakeReset { .. } => resets += 1,
                    GameEvent::SpawnFailed { kind, .. } => {
                        log::warn!("Board full, {} waiting for a free cell", kind.as_str())
                    }
                    _ => log::trace!("tick {}: {:?}", report.tick, event),
                }
            }

            let frame = Frame::capture(&session);
            renderer.draw(&frame, &mut target);
            if !options.quiet {
                let status = match &report.status {
                    BoardStatus::Running => "running".to_string(),
                    BoardStatus::Exhausted { pending } => format!("exhausted ({pending:?})"),
                    BoardStatus::Finished => "finished".to_string(),
                };
                println!(
                    "\x1b[2J\x1b[H{}tick {} | length {} | speed {} | resets {} | {}",
                    target.render(),
                    report.tick,
                    session.snake.length(),
                    session.snake.speed(),
                    resets,
                    status
                );
            }
            if session.is_finished() {
                break;
            }
        }

        let wait = clock.until_next(session.snake.speed());
        std::thread::sleep(Duration::from_secs_f32(wait.max(0.001)));
    }

    log::info!(
        "Finished after {} ticks: length {}, {} resets, seed {}",
        session.time_ticks,
        session.snake.length(),
        resets,
        session.seed()
    );
    if options.json {
        println!("{}", serde_json::to_string_pretty(&Frame::capture(&session))?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Wrap Snake starting...");

    let options = Cli::parse();

    if let Err(err) = run(options) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
