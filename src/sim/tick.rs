//! Fixed-order simulation tick
//!
//! One call advances the session by exactly one step:
//! input → turn → move → collisions → pending respawns → speed.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::entity::EntityKind;
use super::state::{BoardStatus, CollisionKind, GameEvent, GameSession, PendingRespawn};

/// Input buffered since the previous tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Turn requests in arrival order (last legal one wins)
    pub turns: Vec<Direction>,
    /// Net manual speed steps (positive = faster)
    pub speed_steps: i32,
    /// Stop the session
    pub quit: bool,
}

/// Outcome of one tick, handed on to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    pub events: Vec<GameEvent>,
    pub status: BoardStatus,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameSession, input: &TickInput) -> TickReport {
    let mut events = Vec::new();

    if state.finished {
        return TickReport {
            tick: state.time_ticks,
            events,
            status: state.status(),
        };
    }
    if input.quit {
        state.finished = true;
        events.push(GameEvent::Quit);
        log::info!("Session finished after {} ticks", state.time_ticks);
        return TickReport {
            tick: state.time_ticks,
            events,
            status: state.status(),
        };
    }

    state.time_ticks += 1;
    let speed_before = state.snake.speed();

    // 1. Pending input
    for &direction in &input.turns {
        state.snake.request_turn(direction);
    }
    let step = state.config.speed_step;
    for _ in 0..input.speed_steps.unsigned_abs() {
        if input.speed_steps > 0 {
            state.snake.speed_up(step);
        } else {
            state.snake.speed_down(step);
        }
    }

    // 2-3. Turn, then move
    state.snake.apply_turn();
    state.snake.advance();

    // 4. Collisions against the new head
    resolve_collisions(state, &mut events);

    // 5. Respawns that found no room earlier
    retry_pending_respawns(state, &mut events);

    // 6. Speed
    state.snake.update_speed();
    let speed_after = state.snake.speed();
    if speed_after != speed_before {
        events.push(GameEvent::SpeedChanged {
            from: speed_before,
            to: speed_after,
        });
    }

    TickReport {
        tick: state.time_ticks,
        events,
        status: state.status(),
    }
}

/// Self, then obstacle, then good apple, then bad apple.
///
/// Entities never share a cell, so at most one entity can match the head.
fn resolve_collisions(state: &mut GameSession, events: &mut Vec<GameEvent>) {
    let head = state.snake.head();

    if state.snake.collides_with_body(head) {
        reset_snake(state, CollisionKind::SelfCollision, events);
        return;
    }

    let Some(hit) = state.entity_at(head).cloned() else {
        return;
    };

    match hit.kind {
        EntityKind::Obstacle => reset_snake(state, CollisionKind::Obstacle, events),
        EntityKind::GoodApple | EntityKind::BadApple => {
            if hit.kind == EntityKind::GoodApple {
                state.snake.grow();
            } else {
                state.snake.shrink();
            }
            log::debug!(
                "Snake ate {} at ({}, {}), length now {}",
                hit.kind.as_str(),
                head.x,
                head.y,
                state.snake.length()
            );
            events.push(GameEvent::Consumed {
                kind: hit.kind,
                cell: head,
            });

            state.remove_entity(hit.id);
            respawn(state, PendingRespawn { id: hit.id, kind: hit.kind }, events);
        }
    }
}

fn reset_snake(state: &mut GameSession, cause: CollisionKind, events: &mut Vec<GameEvent>) {
    let length = state.snake.length();
    state.snake.reset(&mut state.rng);
    log::info!(
        "Snake reset after {:?} at length {}, heading {:?}",
        cause,
        length,
        state.snake.direction()
    );
    events.push(GameEvent::SnakeReset { cause, length });
}

/// Re-place an entity, or park it until a cell frees up
fn respawn(state: &mut GameSession, pending: PendingRespawn, events: &mut Vec<GameEvent>) -> bool {
    match state.place_entity(pending.id, pending.kind) {
        Ok(cell) => {
            events.push(GameEvent::Respawned {
                id: pending.id,
                kind: pending.kind,
                cell,
            });
            true
        }
        Err(err) => {
            log::warn!("Cannot respawn {}: {}", pending.kind.as_str(), err);
            events.push(GameEvent::SpawnFailed {
                id: pending.id,
                kind: pending.kind,
            });
            state.pending_respawns.push(pending);
            false
        }
    }
}

fn retry_pending_respawns(state: &mut GameSession, events: &mut Vec<GameEvent>) {
    if state.pending_respawns.is_empty() {
        return;
    }
    // Nothing to try while the board is still full
    if state.occupied_cells().len() >= state.grid.cell_count() {
        return;
    }

    let waiting = std::mem::take(&mut state.pending_respawns);
    let mut iter = waiting.into_iter();
    for pending in iter.by_ref() {
        if !respawn(state, pending, events) {
            break;
        }
    }
    state.pending_respawns.extend(iter);
}
