//! Builder API for ergonomic reducer construction.
//!
//! [`create_reducer`] is the one-call factory; [`ReducerBuilder`] offers the
//! same configuration as a fluent chain.

pub mod reducer;

pub use reducer::ReducerBuilder;

use crate::core::{State, TypeTriple};
use crate::handlers::Overrides;
use crate::reducer::Reducer;

/// Create a reducer for one asynchronous operation.
///
/// `types` is either a base name, from which the default `_PENDING`,
/// `_FULFILLED` and `_REJECTED` types are derived, or a [`TypeTriple`]
/// used as-is. Missing overrides mean default keys and handlers.
///
/// # Example
///
/// ```
/// use phase_reducer::builder::create_reducer;
/// use phase_reducer::core::{Action, State};
/// use phase_reducer::handlers::Overrides;
/// use serde_json::json;
///
/// let mut initial = State::new();
/// initial.insert("init".to_string(), json!(true));
///
/// let reducer = create_reducer("MY_ACTION", None, initial.clone());
/// assert_eq!(reducer.init(), initial);
///
/// let reducer = create_reducer("MY_ACTION", Some(Overrides::new().success("myData")), State::new());
/// let state = reducer.reduce(
///     State::new(),
///     &Action::new("MY_ACTION_FULFILLED").with_payload(json!("payload")),
/// );
/// assert_eq!(state["myData"], json!("payload"));
/// assert!(!state.contains_key("data"));
/// ```
pub fn create_reducer(
    types: impl Into<TypeTriple>,
    overrides: Option<Overrides>,
    initial_state: State,
) -> Reducer {
    ReducerBuilder::new(types)
        .overrides(overrides.unwrap_or_default())
        .initial_state(initial_state)
        .build()
}
