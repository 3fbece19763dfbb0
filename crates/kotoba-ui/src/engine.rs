use ratatui::text::Text;

use crate::event::{Event, Ticket};
use crate::keys::Keymap;
use crate::router::Router;
use crate::screens::Screens;
use crate::state::AppState;
use crate::task::{Effect, Task};
use crate::transition::Transition;

/// Owns the current state and every screen. Events go either through the
/// router (transitions) or to the active screen (everything else); the
/// resulting tasks come back as [`Effect`]s for the runtime to execute.
pub struct Engine {
    state: AppState,
    home: AppState,
    screens: Screens,
    router: Router,
    last_ticket: Ticket,
    awaiting: Option<Ticket>,
}

impl Engine {
    pub fn new(screens: Screens, home: AppState) -> Self {
        Self::with_router(screens, home, Router::with_default_routes())
    }

    pub fn with_router(screens: Screens, home: AppState, router: Router) -> Self {
        Self {
            state: home,
            home,
            screens,
            router,
            last_ticket: 0,
            awaiting: None,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn home(&self) -> AppState {
        self.home
    }

    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    /// Ticket of the spawned task whose completion is accepted next
    pub fn awaiting(&self) -> Option<Ticket> {
        self.awaiting
    }

    pub fn init(&mut self) -> Vec<Effect> {
        let task = self.screens.get_mut(self.state).init();
        self.schedule(task)
    }

    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        if let Event::Key(key) = &event {
            if Keymap::is_quit(key) {
                tracing::debug!(state = %self.state, "quit requested");
                return vec![Effect::Quit];
            }
        }

        let task = match event {
            Event::Completed { ticket, transition } => {
                if self.awaiting != Some(ticket) {
                    tracing::debug!(
                        ticket,
                        awaiting = ?self.awaiting,
                        kind = ?transition.kind(),
                        "dropping stale completion"
                    );
                    return Vec::new();
                }
                self.awaiting = None;
                self.apply(transition)
            }
            Event::Transition(transition) => self.apply(transition),
            other => self.screens.get_mut(self.state).update(&other),
        };

        self.schedule(task)
    }

    pub fn render(&self) -> Text<'static> {
        self.screens.get(self.state).view()
    }

    fn apply(&mut self, transition: Transition) -> Task {
        let Some(handler) = self.router.resolve(&transition) else {
            return self
                .screens
                .get_mut(self.state)
                .update(&Event::Transition(transition));
        };

        let kind = transition.kind();
        let (next, task) = handler(&mut self.screens, transition, self.home);
        tracing::debug!(from = %self.state, to = %next, ?kind, "transition");
        self.state = next;
        task
    }

    fn schedule(&mut self, task: Task) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.run(task, &mut effects);
        effects
    }

    /// Emits run depth first so a transition commits before any sibling
    /// after it is looked at.
    fn run(&mut self, task: Task, effects: &mut Vec<Effect>) {
        match task {
            Task::None => {}
            Task::Emit(transition) => {
                let follow_up = self.apply(transition);
                self.run(follow_up, effects);
            }
            Task::Spawn(future) => {
                self.last_ticket += 1;
                let ticket = self.last_ticket;
                self.awaiting = Some(ticket);
                effects.push(Effect::Spawn { ticket, future });
            }
            Task::Quit => effects.push(Effect::Quit),
            Task::Batch(tasks) => {
                for task in tasks {
                    self.run(task, effects);
                }
            }
        }
    }
}
