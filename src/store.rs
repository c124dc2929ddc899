//! Centralized state store with an effect-aware reducer pattern.

use std::fmt::Debug;

use crate::effect::DispatchResult;

/// Marker trait for actions that can be dispatched to the store.
///
/// Actions describe state transitions. They are `Clone` because middleware
/// observes them alongside the reducer, `Debug` for logging, and
/// `Send + 'static` so async completions can cross task boundaries.
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name used for logging and filtering.
    fn name(&self) -> &'static str;
}

/// A reducer folds an action into the state it owns.
///
/// Returns whether the state changed plus any effects to run once the
/// reducer pass has settled. Given equal `(state, action)` inputs a reducer
/// must produce an equal result, and it must not perform I/O; an action it
/// does not recognize must leave the state untouched and report no change.
pub type Reducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Centralized state container.
///
/// Holds the state tree and provides the single mutation point through
/// [`Store::dispatch`]. Consumers read the current snapshot via
/// [`Store::state`]; there is no other mutation path.
pub struct Store<S, A: Action, E> {
    state: S,
    reducer: Reducer<S, A, E>,
}

impl<S, A: Action, E> Store<S, A, E> {
    /// Create a store with the given initial state and reducer.
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self { state, reducer }
    }

    /// Get a reference to the current state snapshot.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch an action to the store.
    ///
    /// Runs synchronously to completion; dispatches never interleave.
    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// Middleware hooks around each dispatch.
///
/// Implementations observe actions before the reducer runs and after the
/// dispatch turn (reducer plus effects) has settled. Middleware never
/// mutates state.
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer.
    fn before(&mut self, action: &A);

    /// Called after the dispatch turn, with the state-change indicator.
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs dispatched actions through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Log when the action enters the dispatch path.
    pub log_before: bool,
    /// Log once the dispatch turn has settled.
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Log settled dispatches only.
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Log both sides of every dispatch.
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                state_changed = state_changed,
                "action processed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, PartialEq, Debug)]
    struct Notes {
        entries: Vec<String>,
    }

    #[derive(Clone, Debug)]
    enum NoteAction {
        Add(String),
        ClearAll,
        Unrelated,
    }

    impl Action for NoteAction {
        fn name(&self) -> &'static str {
            match self {
                NoteAction::Add(_) => "Add",
                NoteAction::ClearAll => "ClearAll",
                NoteAction::Unrelated => "Unrelated",
            }
        }
    }

    fn notes_reducer(state: &mut Notes, action: NoteAction) -> DispatchResult<()> {
        match action {
            NoteAction::Add(entry) => {
                state.entries.push(entry);
                DispatchResult::changed()
            }
            NoteAction::ClearAll => {
                if state.entries.is_empty() {
                    DispatchResult::unchanged()
                } else {
                    state.entries.clear();
                    DispatchResult::changed()
                }
            }
            NoteAction::Unrelated => DispatchResult::unchanged(),
        }
    }

    #[test]
    fn dispatch_runs_reducer_and_reports_change() {
        let mut store = Store::new(Notes::default(), notes_reducer);

        assert!(store.dispatch(NoteAction::Add("first".into())).changed);
        assert_eq!(store.state().entries, vec!["first".to_string()]);

        assert!(store.dispatch(NoteAction::ClearAll).changed);
        assert!(store.state().entries.is_empty());
    }

    #[test]
    fn unrecognized_action_leaves_state_untouched() {
        let mut store = Store::new(Notes::default(), notes_reducer);
        store.dispatch(NoteAction::Add("kept".into()));

        let result = store.dispatch(NoteAction::Unrelated);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(store.state().entries, vec!["kept".to_string()]);
    }

    #[test]
    fn clear_on_empty_is_a_noop() {
        let mut store = Store::new(Notes::default(), notes_reducer);
        assert!(!store.dispatch(NoteAction::ClearAll).changed);
    }
}
