//! Handler resolution.
//!
//! Turns user [`Overrides`] into a [`KeyTriple`] (where default handlers
//! store their values) and a [`HandlerTriple`] (one concrete handler per
//! phase). Resolution happens once, when a reducer is built; dispatch only
//! ever calls the resolved handlers.

mod handler;
mod overrides;
mod resolve;

pub use handler::{Handler, HandlerFn, Transform, TransformFn};
pub use overrides::{HandlerOverride, Overrides};
pub use resolve::{
    resolve, HandlerTriple, KeyTriple, Resolved, DEFAULT_ERROR_KEY, DEFAULT_LOADING_KEY,
    DEFAULT_SUCCESS_KEY,
};
