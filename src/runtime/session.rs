//! Async driver owning one directory session.
//!
//! [`DirectorySession`] is the only owner of [`SessionState`]. It feeds events to
//! [`handle_event`] on the caller's task and carries out the returned actions: timers
//! and remote requests run on spawned tokio tasks that report back over an unbounded
//! channel and never touch state themselves.
//!
//! ```text
//! caller ──dispatch──▶ handle_event ──actions──▶ Debouncer / worker tasks
//!    ▲                                                   │
//!    └──────── next_completion ◀──── mpsc ◀──────────────┘
//! ```

use super::debounce::Debouncer;
use crate::app::{handle_event, Action, Event, SessionState};
use crate::domain::{FilterKind, Result, SortKey};
use crate::remote::{DirectoryPage, DirectoryService};
use crate::ui::DirectoryView;
use crate::worker::{DirectoryWorker, WorkerMessage};
use crate::Config;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

pub struct DirectorySession<S: DirectoryService + ?Sized + 'static> {
    state: SessionState,
    worker: DirectoryWorker<S>,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    debouncer: Debouncer,
    in_flight: usize,
}

impl<S: DirectoryService + ?Sized + 'static> DirectorySession<S> {
    /// Fetches the base collection and starts a session over it.
    ///
    /// A failed fetch is logged and yields an empty directory.
    pub async fn start(service: Arc<S>, config: &Config) -> Self {
        let page = match service
            .fetch_all()
            .instrument(tracing::info_span!("load_directory"))
            .await
        {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load users, starting empty");
                DirectoryPage::default()
            }
        };

        Self::from_page(service, page, config)
    }

    /// Starts a session over an already fetched page.
    #[must_use]
    pub fn from_page(service: Arc<S>, page: DirectoryPage, config: &Config) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::new(page, config),
            worker: DirectoryWorker::new(service),
            events_tx,
            events_rx,
            debouncer: Debouncer::new(),
            in_flight: 0,
        }
    }

    /// Processes one event and executes the resulting actions.
    ///
    /// Returns whether the view may have changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        match &event {
            Event::DebounceElapsed { ticket } => self.debouncer.fired(*ticket),
            Event::WorkerResponse(_) => self.in_flight = self.in_flight.saturating_sub(1),
            _ => {}
        }

        let (changed, actions) = handle_event(&mut self.state, &event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(changed)
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::ScheduleDebounce { ticket, delay } => {
                self.debouncer.schedule(ticket, delay, self.events_tx.clone());
            }
            Action::CancelDebounce => self.debouncer.cancel(),
            Action::PostToWorker(message) => self.post(message),
        }
    }

    fn post(&mut self, message: WorkerMessage) {
        let span = tracing::debug_span!(
            "worker_request",
            operation = message.operation(),
            ticket = message.ticket()
        );
        let worker = self.worker.clone();
        let events = self.events_tx.clone();

        self.in_flight += 1;
        tokio::spawn(
            async move {
                let response = worker.handle(message).await;
                let _ = events.send(Event::WorkerResponse(response));
            }
            .instrument(span),
        );
    }

    /// Updates the search term; the service is queried after the debounce delay.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub fn set_search_term(&mut self, term: impl Into<String>) -> Result<bool> {
        self.dispatch(Event::SearchTermChanged(term.into()))
    }

    /// Selects a hair color. Empty or `"all"` disables the filter.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub fn set_hair_color(&mut self, color: impl Into<String>) -> Result<bool> {
        self.dispatch(Event::HairColorChanged(color.into()))
    }

    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub fn set_sort_key(&mut self, key: SortKey) -> Result<bool> {
        self.dispatch(Event::SortChanged(key))
    }

    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub fn clear_filters(&mut self) -> Result<bool> {
        self.dispatch(Event::ClearFilters)
    }

    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub fn remove_filter(&mut self, kind: FilterKind) -> Result<bool> {
        self.dispatch(Event::RemoveFilter(kind))
    }

    /// Whether a timer or remote request may still deliver an event.
    #[must_use]
    pub const fn has_outstanding(&self) -> bool {
        self.in_flight > 0 || self.debouncer.is_armed()
    }

    /// Waits for the next timer or worker completion.
    ///
    /// Returns `None` once nothing is outstanding and no completion is queued.
    pub async fn next_completion(&mut self) -> Option<Event> {
        if let Ok(event) = self.events_rx.try_recv() {
            return Some(event);
        }
        if !self.has_outstanding() {
            return None;
        }
        self.events_rx.recv().await
    }

    /// Waits for the next completion and dispatches it.
    ///
    /// Returns `false` when there was nothing left to process.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub async fn process_next(&mut self) -> Result<bool> {
        let Some(event) = self.next_completion().await else {
            return Ok(false);
        };
        self.dispatch(event)?;
        Ok(true)
    }

    /// Processes completions until no timer or request is outstanding.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub async fn settle(&mut self) -> Result<()> {
        while self.process_next().await? {}
        Ok(())
    }

    #[must_use]
    pub fn view(&self) -> DirectoryView {
        self.state.compute_view()
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn service(&self) -> &S {
        self.worker.service()
    }
}
