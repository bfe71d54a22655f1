//! Phase Reducer: pure reducers for asynchronous operations
//!
//! An asynchronous operation seen by a dispatcher becomes three actions: one
//! when it starts (pending), one when it succeeds (fulfilled) and one when it
//! fails (rejected). This crate builds the `(state, action) -> state`
//! function that folds those actions into a loading flag, a data value and
//! an error value inside an open JSON state record.
//!
//! Everything is resolved once at construction. Dispatch is a pure,
//! synchronous function with no side effects beyond `tracing` events.
//!
//! # Core Concepts
//!
//! - **Type Triple**: the three action types a reducer matches
//! - **Key Triple**: the three state keys the default handlers write
//! - **Overrides**: per-phase key renames or replacement handlers, plus
//!   payload transforms
//!
//! # Example
//!
//! ```rust
//! use phase_reducer::core::{action_types, Action, State};
//! use phase_reducer::ReducerBuilder;
//! use serde_json::json;
//!
//! let types = action_types("FETCH_USER");
//! let reducer = ReducerBuilder::new("FETCH_USER")
//!     .success("user")
//!     .transform(|payload| json!({"profile": payload}))
//!     .build();
//!
//! let state = reducer.reduce(State::new(), &Action::new(&types.loading));
//! assert_eq!(state["loading"], json!(true));
//!
//! let state = reducer.reduce(state, &Action::new(&types.success).with_payload(json!("ada")));
//! assert_eq!(state["user"], json!({"profile": "ada"}));
//!
//! let state = reducer.reduce(state, &Action::failure(&types.error, json!("timeout")));
//! assert_eq!(state["error"], json!("timeout"));
//! assert_eq!(state["user"], json!({"profile": "ada"}));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod handlers;
pub mod reducer;

// Re-export commonly used types
pub use builder::{create_reducer, ReducerBuilder};
pub use config::{ConfigError, ReducerConfig};
pub use self::core::{
    action_types, derive_types, final_action_type, Action, Phase, State, Suffix, Suffixes,
    TypeTriple,
};
pub use handlers::{Handler, HandlerOverride, KeyTriple, Overrides};
pub use reducer::Reducer;
