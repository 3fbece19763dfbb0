use crossterm::event::KeyEvent;

use crate::transition::Transition;

/// Identifies one spawned task, issued in increasing order by the engine
pub type Ticket = u64;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// Periodic timer driving spinners and cursor blink
    Tick,
    Resize { width: u16, height: u16 },
    Transition(Transition),
    /// A spawned task finished
    Completed { ticket: Ticket, transition: Transition },
}

impl From<Transition> for Event {
    fn from(transition: Transition) -> Self {
        Event::Transition(transition)
    }
}
