//! Phase handlers and payload transforms.

use crate::core::{Action, State};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shared handler function type.
pub type HandlerFn = Arc<dyn Fn(State, &Action) -> State + Send + Sync>;

/// Shared transform function type.
pub type TransformFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Pure function producing the next state for one phase.
///
/// Handlers receive the current state by value and the raw action, and
/// return the new state. They must be deterministic and thread-safe.
///
/// # Example
///
/// ```rust
/// use phase_reducer::core::{Action, State};
/// use phase_reducer::handlers::Handler;
/// use serde_json::json;
///
/// let mark_busy = Handler::new(|mut state: State, _action: &Action| {
///     state.insert("busy".to_string(), json!(true));
///     state
/// });
///
/// let next = mark_busy.call(State::new(), &Action::new("ANY"));
/// assert_eq!(next["busy"], json!(true));
/// ```
#[derive(Clone)]
pub struct Handler {
    func: HandlerFn,
}

impl Handler {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(State, &Action) -> State + Send + Sync + 'static,
    {
        Handler {
            func: Arc::new(func),
        }
    }

    /// Run the handler.
    pub fn call(&self, state: State, action: &Action) -> State {
        (self.func)(state, action)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Unary payload mapping applied before a default handler stores it.
#[derive(Clone)]
pub struct Transform {
    func: TransformFn,
}

impl Transform {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Transform {
            func: Arc::new(func),
        }
    }

    pub fn apply(&self, value: Value) -> Value {
        (self.func)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}
