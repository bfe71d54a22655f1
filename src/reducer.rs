//! The reducer: routes actions to the resolved phase handlers.

use crate::core::{Action, Phase, State, TypeTriple};
use crate::handlers::{HandlerTriple, KeyTriple, Resolved};
use std::sync::Arc;

/// Pure `(state, action) -> state` function for one asynchronous operation.
///
/// Built by [`crate::create_reducer`] or [`crate::ReducerBuilder`]. All
/// configuration is fixed at construction; a reducer holds no state between
/// calls, and clones share the same immutable configuration.
#[derive(Clone, Debug)]
pub struct Reducer {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    types: TypeTriple,
    keys: KeyTriple,
    handlers: HandlerTriple,
    initial_state: State,
}

impl Reducer {
    pub(crate) fn new(types: TypeTriple, resolved: Resolved, initial_state: State) -> Self {
        let Resolved { keys, handlers } = resolved;
        tracing::debug!(
            loading = %types.loading,
            success = %types.success,
            error = %types.error,
            loading_key = %keys.loading,
            success_key = %keys.success,
            error_key = %keys.error,
            collapsed = types.is_collapsed(),
            "built phase reducer"
        );
        Self {
            inner: Arc::new(Inner {
                types,
                keys,
                handlers,
                initial_state,
            }),
        }
    }

    /// Action types this reducer responds to.
    pub fn types(&self) -> &TypeTriple {
        &self.inner.types
    }

    /// State keys written by the default handlers.
    pub fn keys(&self) -> &KeyTriple {
        &self.inner.keys
    }

    pub fn initial_state(&self) -> &State {
        &self.inner.initial_state
    }

    /// Which phase handler `action` would be routed to, if any.
    ///
    /// The loading type is checked first. An action matching the success or
    /// error type goes to the error phase when its error flag is set.
    pub fn phase_of(&self, action: &Action) -> Option<Phase> {
        let types = &self.inner.types;
        if action.kind == types.loading {
            Some(Phase::Loading)
        } else if action.kind == types.success || action.kind == types.error {
            if action.error {
                Some(Phase::Error)
            } else {
                Some(Phase::Success)
            }
        } else {
            None
        }
    }

    /// Produce the next state.
    ///
    /// Unrecognized actions return `state` unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phase_reducer::core::{action_types, Action, State};
    /// use phase_reducer::create_reducer;
    /// use serde_json::json;
    ///
    /// let reducer = create_reducer("FETCH", None, State::new());
    /// let types = action_types("FETCH");
    ///
    /// let state = reducer.reduce(State::new(), &Action::new(&types.loading));
    /// assert_eq!(state["loading"], json!(true));
    ///
    /// let state = reducer.reduce(state, &Action::new(&types.success).with_payload(json!([1, 2])));
    /// assert_eq!(state["loading"], json!(false));
    /// assert_eq!(state["data"], json!([1, 2]));
    /// ```
    pub fn reduce(&self, state: State, action: &Action) -> State {
        match self.phase_of(action) {
            Some(phase) => {
                tracing::trace!(
                    action = %action.kind,
                    %phase,
                    settled = phase.is_final(),
                    failed = phase.is_error(),
                    "reducing action"
                );
                self.inner.handlers.get(phase).call(state, action)
            }
            None => {
                tracing::trace!(action = %action.kind, "action not handled");
                state
            }
        }
    }

    /// Reduce with the host's optional arguments.
    ///
    /// A missing state starts from the initial state; a missing action
    /// matches nothing.
    pub fn apply(&self, state: Option<State>, action: Option<&Action>) -> State {
        let state = state.unwrap_or_else(|| self.inner.initial_state.clone());
        match action {
            Some(action) => self.reduce(state, action),
            None => state,
        }
    }

    /// The bootstrap call: no state, no action.
    pub fn init(&self) -> State {
        self.apply(None, None)
    }

    /// Turn the reducer into a plain closure for hosts that take one.
    pub fn into_fn(self) -> impl Fn(State, &Action) -> State + Clone + Send + Sync + 'static {
        move |state: State, action: &Action| self.reduce(state, action)
    }
}
