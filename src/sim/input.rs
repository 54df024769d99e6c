//! Input events and the per-tick queue
//!
//! Hosts push events whenever their event loop sees them; the queue is
//! drained once at the start of each tick and applied in arrival order.

use serde::{Deserialize, Serialize};

/// Abstract player input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Impulse the actor upward (Playing only)
    Flap,
    /// Start a new round (GameOver only)
    Reset,
    /// Leave the game; handled by the host, ignored by the session
    Quit,
}

/// Input commands for a single tick, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn flap() -> Self {
        Self::new(vec![InputEvent::Flap])
    }

    pub fn reset() -> Self {
        Self::new(vec![InputEvent::Reset])
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}

/// Events collected between ticks
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far, leaving the queue empty
    pub fn drain(&mut self) -> TickInput {
        TickInput::new(std::mem::take(&mut self.pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Reset);
        queue.push(InputEvent::Flap);
        queue.push(InputEvent::Flap);
        assert_eq!(queue.len(), 3);

        let input = queue.drain();
        assert_eq!(
            input.events,
            vec![InputEvent::Reset, InputEvent::Flap, InputEvent::Flap]
        );
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_quit_requested() {
        assert!(!TickInput::flap().quit_requested());
        assert!(TickInput::new(vec![InputEvent::Flap, InputEvent::Quit]).quit_requested());
    }
}
