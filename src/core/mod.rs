//! Core data types.
//!
//! This module contains the pure building blocks every reducer closes over:
//! - Action records as delivered by the host dispatcher
//! - Phases of an asynchronous operation
//! - Action-type derivation from a base name
//! - The open state record and its shallow merge
//!
//! Nothing here has side effects.

mod action;
mod phase;
mod state;
mod types;

pub use action::Action;
pub use phase::Phase;
pub use state::{merge, State};
pub use types::{
    action_types, derive_types, final_action_type, Suffix, Suffixes, TypeTriple,
    FULFILLED_SUFFIX, PENDING_SUFFIX, REJECTED_SUFFIX,
};
