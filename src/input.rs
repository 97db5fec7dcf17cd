//! Input buffering between ticks
//!
//! Whatever produces events (keyboard, autopilot, tests) pushes them
//! here at any time; the driver drains the queue once per tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::sim::{Direction, TickInput};

/// A discrete player request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Turn(Direction),
    SpeedUp,
    SpeedDown,
    Quit,
}

impl InputEvent {
    /// Map a key name to an event (arrows/WASD to turn, q/w for speed)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "up" | "arrowup" | "k" => Some(InputEvent::Turn(Direction::Up)),
            "down" | "arrowdown" | "j" => Some(InputEvent::Turn(Direction::Down)),
            "left" | "arrowleft" | "h" => Some(InputEvent::Turn(Direction::Left)),
            "right" | "arrowright" | "l" => Some(InputEvent::Turn(Direction::Right)),
            "q" => Some(InputEvent::SpeedUp),
            "w" => Some(InputEvent::SpeedDown),
            "escape" | "esc" => Some(InputEvent::Quit),
            _ => None,
        }
    }
}

/// FIFO of events not yet seen by the simulation
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Fold everything queued so far into one tick's input
    pub fn drain(&mut self) -> TickInput {
        let mut input = TickInput::default();
        for event in self.events.drain(..) {
            match event {
                InputEvent::Turn(direction) => input.turns.push(direction),
                InputEvent::SpeedUp => input.speed_steps += 1,
                InputEvent::SpeedDown => input.speed_steps -= 1,
                InputEvent::Quit => input.quit = true,
            }
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_folds_events() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Turn(Direction::Up));
        queue.push(InputEvent::SpeedUp);
        queue.push(InputEvent::SpeedUp);
        queue.push(InputEvent::SpeedDown);
        queue.push(InputEvent::Turn(Direction::Left));
        assert_eq!(queue.len(), 5);

        let input = queue.drain();
        assert_eq!(input.turns, vec![Direction::Up, Direction::Left]);
        assert_eq!(input.speed_steps, 1);
        assert!(!input.quit);
        assert!(queue.is_empty());

        assert_eq!(queue.drain(), TickInput::default());
    }

    #[test]
    fn test_quit() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Quit);
        assert!(queue.drain().quit);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            InputEvent::from_key("ArrowUp"),
            Some(InputEvent::Turn(Direction::Up))
        );
        assert_eq!(InputEvent::from_key("q"), Some(InputEvent::SpeedUp));
        assert_eq!(InputEvent::from_key("W"), Some(InputEvent::SpeedDown));
        assert_eq!(InputEvent::from_key("Escape"), Some(InputEvent::Quit));
        assert_eq!(InputEvent::from_key("space"), None);
    }
}
