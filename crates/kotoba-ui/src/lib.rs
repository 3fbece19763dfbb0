//! View/state engine for the kotoba terminal app.
//!
//! Every screen is a [`Screen`] kept alive in the fixed [`Screens`] struct.
//! The [`Engine`] forwards events either to the [`Router`] (for
//! [`Transition`]s) or to the screen of the current [`AppState`], and turns
//! the resulting [`Task`]s into [`Effect`]s the runtime executes.

pub mod engine;
pub mod event;
pub mod keys;
pub mod render;
pub mod router;
pub mod screens;
pub mod state;
pub mod task;
pub mod theme;
pub mod transition;
pub mod view;
pub mod widgets;

pub use engine::Engine;
pub use event::{Event, Ticket};
pub use router::{Handler, Router};
pub use screens::{Screen, Screens};
pub use state::AppState;
pub use task::{Effect, Task, TaskFuture};
pub use transition::{TaskError, Transition, TransitionKind};

#[cfg(test)]
mod tests;
