//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes query edits, timer
//! expirations and worker responses, translating them into state changes and action
//! sequences. It performs no I/O: timers and remote calls are requested through
//! [`Action`]s and their completions come back as events.
//!
//! # Event Types
//!
//! - **Query edits**: `SearchTermChanged`, `HairColorChanged`, `SortChanged`
//! - **Filter reset**: `ClearFilters`, `RemoveFilter`
//! - **Completions**: `DebounceElapsed`, `WorkerResponse`
//!
//! # Staleness
//!
//! Every superseding edit draws a new ticket. Timers and responses carrying any
//! other ticket are dropped without touching state, so a slow response for `"al"`
//! can never overwrite the results for `"ali"`.
//!
//! # Example
//!
//! ```rust
//! use userdir::app::{handle_event, Action, Event, SessionState};
//! use userdir::{Config, DirectoryPage};
//!
//! let mut state = SessionState::new(DirectoryPage::default(), &Config::default());
//! let (changed, actions) = handle_event(&mut state, &Event::SearchTermChanged("ali".into()))?;
//! assert!(changed);
//! assert!(matches!(actions[0], Action::ScheduleDebounce { ticket: 1, .. }));
//! # Ok::<(), userdir::DirectoryError>(())
//! ```

use crate::app::{Action, SessionState, SessionStatus};
use crate::domain::error::Result;
use crate::domain::{FilterKind, SortKey};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events fed into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The search input changed. Debounced before reaching the service.
    SearchTermChanged(String),

    /// A debounce timer fired.
    DebounceElapsed {
        /// Ticket the timer was armed with.
        ticket: u64,
    },

    /// A hair color was picked. Empty or `"all"` disables the filter.
    HairColorChanged(String),

    SortChanged(SortKey),

    /// Resets every query field and shows the base collection.
    ClearFilters,

    /// Removes one active filter badge.
    RemoveFilter(FilterKind),

    /// Completion of a remote request posted with [`Action::PostToWorker`].
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates session state, and returns actions to execute.
///
/// # Returns
///
/// `(changed, actions)`: whether the view model may differ from before, and the
/// side effects the runtime must carry out in order.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for transitions
/// that may fail.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut SessionState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchTermChanged(term) => {
            state.query.search_term.clone_from(term);
            let ticket = state.issue_ticket();
            state.status = SessionStatus::Searching;

            tracing::trace!(term = %term, ticket, "search term updated");

            Ok((
                true,
                vec![Action::ScheduleDebounce {
                    ticket,
                    delay: state.debounce,
                }],
            ))
        }
        Event::DebounceElapsed { ticket } => {
            if !state.is_current(*ticket) {
                tracing::trace!(ticket, latest = state.latest_ticket, "stale debounce dropped");
                return Ok((false, vec![]));
            }

            let Some(term) = state.query.active_search().map(str::to_string) else {
                tracing::debug!("search term empty, showing local results");
                state.show_base_filtered();
                return Ok((true, vec![]));
            };

            tracing::debug!(term = %term, ticket, "search debounced");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::Search {
                    ticket: *ticket,
                    term,
                })],
            ))
        }
        Event::HairColorChanged(color) => {
            state.query.hair_color.clone_from(color);
            Ok((true, refilter(state)))
        }
        Event::SortChanged(key) => {
            state.query.sort_key = *key;
            state.recompute_visible();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            let ticket = state.issue_ticket();
            state.reset();
            tracing::debug!(ticket, base_len = state.base.len(), "filters cleared");
            Ok((true, vec![Action::CancelDebounce]))
        }
        Event::RemoveFilter(FilterKind::Search) => {
            state.query.search_term.clear();
            state.issue_ticket();
            state.show_base_filtered();
            Ok((true, vec![Action::CancelDebounce]))
        }
        Event::RemoveFilter(FilterKind::HairColor) => {
            state.query.hair_color.clear();
            Ok((true, refilter(state)))
        }
        Event::WorkerResponse(response) => {
            let ticket = response.ticket();
            if !state.is_current(ticket) {
                tracing::debug!(ticket, latest = state.latest_ticket, "stale response dropped");
                return Ok((false, vec![]));
            }

            match response {
                WorkerResponse::UsersLoaded { users, .. } => {
                    tracing::debug!(ticket, count = users.len(), "results committed");
                    state.commit_remote(users.clone());
                }
                WorkerResponse::Failed { message, .. } => {
                    tracing::warn!(ticket, error = %message, "remote request failed");
                    state.fail();
                }
            }
            Ok((true, vec![]))
        }
    }
}

/// Re-derives results after the hair color changed.
///
/// With a search term the term is re-sent to the service and the committed result is
/// color-filtered locally. Without one the base collection is filtered locally, unless
/// remote color filtering is enabled.
fn refilter(state: &mut SessionState) -> Vec<Action> {
    let ticket = state.issue_ticket();
    let mut actions = vec![Action::CancelDebounce];

    if let Some(term) = state.query.active_search() {
        state.status = SessionStatus::Searching;
        actions.push(Action::PostToWorker(WorkerMessage::Search {
            ticket,
            term: term.to_string(),
        }));
        return actions;
    }

    match state.query.active_hair_color() {
        Some(color) if state.remote_hair_filter => {
            state.status = SessionStatus::Searching;
            actions.push(Action::PostToWorker(WorkerMessage::FilterByHairColor {
                ticket,
                color: color.to_string(),
            }));
        }
        _ => state.show_base_filtered(),
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::REMOTE_FAILURE_MESSAGE;
    use crate::domain::UserRecord;
    use crate::remote::DirectoryPage;
    use crate::Config;

    fn user(id: u64, first: &str, last: &str, age: u32, hair: &str) -> UserRecord {
        let mut user = UserRecord::new(id, first, last);
        user.age = age;
        user.hair.color = hair.to_string();
        user
    }

    fn base() -> Vec<UserRecord> {
        vec![
            user(3, "Cara", "Moss", 40, "Black"),
            user(1, "Ann", "Lee", 30, "Brown"),
            user(2, "Ben", "Ray", 25, "Black"),
        ]
    }

    fn state_with(config: &Config) -> SessionState {
        SessionState::new(DirectoryPage::from_users(base()), config)
    }

    fn state() -> SessionState {
        state_with(&Config::default())
    }

    fn ids(state: &SessionState) -> Vec<u64> {
        state.visible.iter().map(|u| u.id).collect()
    }

    fn posted(actions: &[Action]) -> Option<&WorkerMessage> {
        actions.iter().find_map(|a| match a {
            Action::PostToWorker(msg) => Some(msg),
            _ => None,
        })
    }

    fn type_and_fire(state: &mut SessionState, term: &str) -> u64 {
        let (_, actions) = handle_event(state, &Event::SearchTermChanged(term.into())).unwrap();
        let &Action::ScheduleDebounce { ticket, .. } = &actions[0] else {
            panic!("expected debounce, got {actions:?}");
        };
        let (_, actions) = handle_event(state, &Event::DebounceElapsed { ticket }).unwrap();
        assert_eq!(
            posted(&actions),
            Some(&WorkerMessage::Search { ticket, term: term.into() })
        );
        ticket
    }

    fn respond(state: &mut SessionState, ticket: u64, users: Vec<UserRecord>) -> bool {
        let event = Event::WorkerResponse(WorkerResponse::UsersLoaded { ticket, users });
        handle_event(state, &event).unwrap().0
    }

    #[test]
    fn typing_schedules_debounce_and_marks_searching() {
        let mut state = state();
        let (changed, actions) =
            handle_event(&mut state, &Event::SearchTermChanged("a".into())).unwrap();

        assert!(changed);
        assert_eq!(state.query.search_term, "a");
        assert_eq!(state.status, SessionStatus::Searching);
        assert_eq!(
            actions,
            vec![Action::ScheduleDebounce {
                ticket: 1,
                delay: std::time::Duration::from_millis(500),
            }]
        );
    }

    #[test]
    fn superseded_debounce_is_ignored() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchTermChanged("a".into())).unwrap();
        handle_event(&mut state, &Event::SearchTermChanged("al".into())).unwrap();

        let (changed, actions) =
            handle_event(&mut state, &Event::DebounceElapsed { ticket: 1 }).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
    }

    #[test]
    fn stale_response_never_overwrites_latest() {
        let mut state = state();
        let al = type_and_fire(&mut state, "al");
        let ali = type_and_fire(&mut state, "ali");

        let alice = user(9, "Alice", "Moon", 22, "Red");
                assert!(respond(&mut state, ali, vec![alice]));
        assert!(!respond(&mut state, al, vec![user(8, "Albert", "Kay", 50, "Gray"), user(7, "Alma", "Ng", 33, "Red")]));

        assert_eq!(ids(&state), vec![9]);
        assert_eq!(state.status, SessionStatus::Idle);
    }

    #[test]
    fn empty_term_after_debounce_restores_local_results() {
        let mut state = state();
        let ticket = type_and_fire(&mut state, "zzz");
        respond(&mut state, ticket, vec![]);
        assert!(state.visible.is_empty());

        handle_event(&mut state, &Event::SearchTermChanged(String::new())).unwrap();
        let latest = state.latest_ticket;
        let (changed, actions) =
            handle_event(&mut state, &Event::DebounceElapsed { ticket: latest }).unwrap();

        assert!(changed);
        assert!(actions.is_empty());
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.status, SessionStatus::Idle);
    }

    #[test]
    fn search_then_hair_filter_refetches_and_filters() {
        let mut state = state();
        let ticket = type_and_fire(&mut state, "a");
        let ann = user(1, "Ann", "Lee", 30, "Brown");
        let ben = user(2, "Ben", "Ray", 25, "Black");
        respond(&mut state, ticket, vec![ann.clone(), ben.clone()]);
        assert_eq!(ids(&state), vec![1, 2]);

        let (_, actions) =
            handle_event(&mut state, &Event::HairColorChanged("Brown".into())).unwrap();
        assert_eq!(actions[0], Action::CancelDebounce);
        let Some(WorkerMessage::Search { ticket, term }) = posted(&actions).cloned() else {
            panic!("expected a search request, got {actions:?}");
        };
        assert_eq!(term, "a");
        assert_eq!(state.status, SessionStatus::Searching);

        respond(&mut state, ticket, vec![ann, ben]);
        assert_eq!(ids(&state), vec![1]);
        assert_eq!(
            state.compute_view().active_filters,
            vec!["Search: a", "Hair: Brown"]
        );
    }

    #[test]
    fn hair_filter_without_term_is_local() {
        let mut state = state();
        let (changed, actions) =
            handle_event(&mut state, &Event::HairColorChanged("Black".into())).unwrap();

        assert!(changed);
        assert_eq!(actions, vec![Action::CancelDebounce]);
        assert_eq!(ids(&state), vec![2, 3]);
        assert_eq!(state.status, SessionStatus::Idle);
    }

    #[test]
    fn hair_filter_without_term_can_refetch_remotely() {
        let config = Config {
            remote_hair_filter: true,
            ..Config::default()
        };
        let mut state = state_with(&config);
        let (_, actions) =
            handle_event(&mut state, &Event::HairColorChanged("Black".into())).unwrap();

        assert_eq!(
            posted(&actions),
            Some(&WorkerMessage::FilterByHairColor {
                ticket: 1,
                color: "Black".into()
            })
        );
        assert_eq!(state.status, SessionStatus::Searching);

        let (_, actions) = handle_event(&mut state, &Event::HairColorChanged("all".into())).unwrap();
        assert!(posted(&actions).is_none());
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn age_sort_orders_visible_without_remote_call() {
        let mut state = state();
        let (changed, actions) =
            handle_event(&mut state, &Event::SortChanged(SortKey::AgeAsc)).unwrap();

        assert!(changed);
        assert!(actions.is_empty());
        assert_eq!(ids(&state), vec![2, 1, 3]);

        handle_event(&mut state, &Event::SortChanged(SortKey::AgeDesc)).unwrap();
        assert_eq!(ids(&state), vec![3, 1, 2]);
    }

    #[test]
    fn sort_applies_to_committed_search_results() {
        let mut state = state();
        let ticket = type_and_fire(&mut state, "a");
        respond(
            &mut state,
            ticket,
            vec![user(1, "Ann", "Lee", 30, "Brown"), user(2, "Ben", "Ray", 25, "Black")],
        );

        handle_event(&mut state, &Event::SortChanged(SortKey::NameDesc)).unwrap();
        assert_eq!(ids(&state), vec![2, 1]);
    }

    #[test]
    fn failure_shows_error_until_filters_cleared() {
        let mut state = state();
        let ticket = type_and_fire(&mut state, "ali");
        let failed = Event::WorkerResponse(WorkerResponse::Failed {
            ticket,
            message: "search users: 503".into(),
        });
        handle_event(&mut state, &failed).unwrap();

        assert_eq!(state.status, SessionStatus::Error);
        assert!(state.visible.is_empty());
        assert_eq!(state.error.as_deref(), Some(REMOTE_FAILURE_MESSAGE));

        handle_event(&mut state, &Event::SortChanged(SortKey::NameAsc)).unwrap();
        assert!(state.visible.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::ClearFilters).unwrap();
        assert_eq!(actions, vec![Action::CancelDebounce]);
        assert_eq!(ids(&state), vec![3, 1, 2]);
        assert_eq!(state.status, SessionStatus::Idle);
        assert!(state.error.is_none());
        assert!(state.query.is_default());
    }

    #[test]
    fn clear_filters_invalidates_in_flight_search() {
        let mut state = state();
        let ticket = type_and_fire(&mut state, "ali");
        handle_event(&mut state, &Event::ClearFilters).unwrap();

        assert!(!respond(&mut state, ticket, vec![user(9, "Alice", "Moon", 22, "Red")]));
        assert_eq!(ids(&state), vec![3, 1, 2]);
    }

    #[test]
    fn removing_search_badge_keeps_hair_filter() {
        let mut state = state();
        handle_event(&mut state, &Event::HairColorChanged("Black".into())).unwrap();
        let ticket = type_and_fire(&mut state, "b");
        respond(&mut state, ticket, vec![user(2, "Ben", "Ray", 25, "Black")]);

        let (_, actions) =
            handle_event(&mut state, &Event::RemoveFilter(FilterKind::Search)).unwrap();
        assert_eq!(actions, vec![Action::CancelDebounce]);
        assert_eq!(state.query.search_term, "");
        assert_eq!(ids(&state), vec![2, 3]);
        assert_eq!(state.compute_view().active_filters, vec!["Hair: Black"]);
    }

    #[test]
    fn removing_hair_badge_re_searches_current_term() {
        let mut state = state();
        handle_event(&mut state, &Event::HairColorChanged("Black".into())).unwrap();
        type_and_fire(&mut state, "b");

        let (_, actions) =
            handle_event(&mut state, &Event::RemoveFilter(FilterKind::HairColor)).unwrap();
        assert!(matches!(
            posted(&actions),
            Some(WorkerMessage::Search { term, .. }) if term == "b"
        ));
        assert_eq!(state.query.hair_color, "");
    }
}
