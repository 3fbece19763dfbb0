use std::ops::ControlFlow;
use std::time::Duration;

use crossterm::event::{self as term, KeyEventKind};
use kanal::{AsyncReceiver, AsyncSender, Sender};
use kotoba_ui::{Effect, Engine, Event, TaskError, TaskFuture, Ticket, Transition};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// How long the input thread waits for a key before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Every event source feeds the same queue, processed in arrival order
pub struct ChannelSet {
    pub events: (AsyncSender<Event>, AsyncReceiver<Event>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(256),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the event sources and drives the engine
pub struct AppController {
    channels: ChannelSet,
    cancel_token: CancellationToken,
    tick: Duration,
}

impl AppController {
    pub fn new(tick: Duration) -> Self {
        Self {
            channels: ChannelSet::new(),
            cancel_token: CancellationToken::new(),
            tick,
        }
    }

    pub fn sender(&self) -> AsyncSender<Event> {
        self.channels.events.0.clone()
    }

    pub async fn run<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        mut engine: Engine,
    ) -> anyhow::Result<()> {
        let mut sources = self.spawn_sources();
        let result = self.drive(terminal, &mut engine).await;

        self.shutdown();
        while let Some(joined) = sources.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("event source failed: {e:#}"),
                Err(e) => tracing::error!("event source panicked: {e}"),
            }
        }

        result
    }

    pub fn spawn_sources(&self) -> JoinSet<anyhow::Result<()>> {
        let mut sources = JoinSet::new();

        sources.spawn(tick_loop(
            self.sender(),
            self.tick,
            self.cancel_token.child_token(),
        ));

        sources.spawn(input_loop(self.sender(), self.cancel_token.child_token()));

        sources
    }

    /// Draw, wait for the next event, dispatch it, repeat until a quit
    /// effect comes back
    pub async fn drive<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        engine: &mut Engine,
    ) -> anyhow::Result<()> {
        let events = self.channels.events.1.clone();

        let effects = engine.init();
        if self.execute(effects).is_break() {
            return Ok(());
        }

        loop {
            terminal.draw(|frame| kotoba_ui::view::draw(frame, engine))?;

            let event = events.recv().await?;
            let effects = engine.dispatch(event);
            if self.execute(effects).is_break() {
                tracing::info!(state = %engine.state(), "quitting");
                return Ok(());
            }
        }
    }

    fn execute(&self, effects: Vec<Effect>) -> ControlFlow<()> {
        for effect in effects {
            match effect {
                Effect::Quit => return ControlFlow::Break(()),
                Effect::Spawn { ticket, future } => {
                    tracing::debug!(ticket, "spawning task");
                    spawn_task(self.sender(), ticket, future);
                }
            }
        }
        ControlFlow::Continue(())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

/// Run `future` on the runtime and report its transition under `ticket`.
/// A panicking task still completes, as an error.
pub fn spawn_task(tx: AsyncSender<Event>, ticket: Ticket, future: TaskFuture) -> JoinHandle<()> {
    tokio::spawn(async move {
        let transition = match tokio::spawn(future).await {
            Ok(transition) => transition,
            Err(e) => Transition::Error(TaskError::Invariant(format!("task {ticket} failed: {e}"))),
        };

        if let Err(e) = tx.send(Event::Completed { ticket, transition }).await {
            tracing::warn!(ticket, "completion dropped: {e}");
        }
    })
}

pub async fn tick_loop(
    tx: AsyncSender<Event>,
    period: Duration,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            _ = interval.tick() => {
                if tx.send(Event::Tick).await.is_err() {
                    return Ok(());
                }
            }
        }
    }
}

pub async fn input_loop(tx: AsyncSender<Event>, cancel: CancellationToken) -> anyhow::Result<()> {
    let tx = tx.to_sync();
    tokio::task::spawn_blocking(move || read_input(&tx, &cancel)).await?
}

fn read_input(tx: &Sender<Event>, cancel: &CancellationToken) -> anyhow::Result<()> {
    while !cancel.is_cancelled() {
        if !term::poll(INPUT_POLL)? {
            continue;
        }

        let event = match term::read()? {
            term::Event::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            term::Event::Resize(width, height) => Event::Resize { width, height },
            _ => continue,
        };

        if tx.send(event).is_err() {
            break;
        }
    }
    Ok(())
}
