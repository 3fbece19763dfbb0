use std::fmt;
use std::future::Future;

use futures_util::future::BoxFuture;

use crate::event::Ticket;
use crate::transition::Transition;

pub type TaskFuture = BoxFuture<'static, Transition>;

/// Work a screen or route asks the engine to perform after an update
#[derive(Default)]
pub enum Task {
    #[default]
    None,
    /// Feed a transition back into the engine right away
    Emit(Transition),
    /// Run a future off the event loop; its output re-enters as a transition
    Spawn(TaskFuture),
    Quit,
    Batch(Vec<Task>),
}

impl Task {
    pub fn none() -> Self {
        Task::None
    }

    pub fn emit(transition: Transition) -> Self {
        Task::Emit(transition)
    }

    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Transition> + Send + 'static,
    {
        Task::Spawn(Box::pin(future))
    }

    pub fn batch(tasks: impl IntoIterator<Item = Task>) -> Self {
        Task::Batch(tasks.into_iter().collect())
    }

    /// Enter the loading screen and run `future`, always as one unit
    pub fn with_loading<F>(future: F) -> Self
    where
        F: Future<Output = Transition> + Send + 'static,
    {
        Task::batch([Task::emit(Transition::Loading), Task::spawn(future)])
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Task::None)
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::None => f.write_str("None"),
            Task::Emit(t) => f.debug_tuple("Emit").field(t).finish(),
            Task::Spawn(_) => f.write_str("Spawn(..)"),
            Task::Quit => f.write_str("Quit"),
            Task::Batch(tasks) => f.debug_tuple("Batch").field(tasks).finish(),
        }
    }
}

/// Side effects the runtime has to carry out for the engine
pub enum Effect {
    Spawn { ticket: Ticket, future: TaskFuture },
    Quit,
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Spawn { ticket, .. } => f.debug_struct("Spawn").field("ticket", ticket).finish(),
            Effect::Quit => f.write_str("Quit"),
        }
    }
}
