//! Builder for constructing reducers.

use crate::core::{Action, State, TypeTriple};
use crate::handlers::{resolve, HandlerOverride, Overrides};
use crate::reducer::Reducer;
use serde_json::Value;

/// Builder for constructing reducers with a fluent API.
///
/// Building never fails: every phase without an override gets the default
/// key and handler.
#[derive(Clone, Debug)]
pub struct ReducerBuilder {
    types: TypeTriple,
    overrides: Overrides,
    initial_state: State,
}

impl ReducerBuilder {
    /// Start from a base name (default suffixes) or a ready-made triple.
    pub fn new(types: impl Into<TypeTriple>) -> Self {
        Self {
            types: types.into(),
            overrides: Overrides::default(),
            initial_state: State::new(),
        }
    }

    /// Replace all overrides at once.
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Override the loading phase with a key rename or a handler.
    pub fn loading(mut self, value: impl Into<HandlerOverride>) -> Self {
        self.overrides.loading = value.into();
        self
    }

    /// Override the success phase with a key rename or a handler.
    pub fn success(mut self, value: impl Into<HandlerOverride>) -> Self {
        self.overrides.success = value.into();
        self
    }

    /// Override the error phase with a key rename or a handler.
    pub fn error(mut self, value: impl Into<HandlerOverride>) -> Self {
        self.overrides.error = value.into();
        self
    }

    pub fn on_loading<F>(mut self, func: F) -> Self
    where
        F: Fn(State, &Action) -> State + Send + Sync + 'static,
    {
        self.overrides = self.overrides.on_loading(func);
        self
    }

    pub fn on_success<F>(mut self, func: F) -> Self
    where
        F: Fn(State, &Action) -> State + Send + Sync + 'static,
    {
        self.overrides = self.overrides.on_success(func);
        self
    }

    pub fn on_error<F>(mut self, func: F) -> Self
    where
        F: Fn(State, &Action) -> State + Send + Sync + 'static,
    {
        self.overrides = self.overrides.on_error(func);
        self
    }

    /// Map the success payload before the default success handler stores it.
    pub fn transform<F>(mut self, func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.overrides = self.overrides.transform(func);
        self
    }

    /// Map the error payload before the default error handler stores it.
    pub fn transform_error<F>(mut self, func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.overrides = self.overrides.transform_error(func);
        self
    }

    /// State returned when the host calls the reducer without one.
    pub fn initial_state(mut self, state: State) -> Self {
        self.initial_state = state;
        self
    }

    /// Build the reducer.
    pub fn build(self) -> Reducer {
        Reducer::new(self.types, resolve(&self.overrides), self.initial_state)
    }
}
