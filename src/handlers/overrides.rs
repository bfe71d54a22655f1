//! User overrides for the default phase handlers.

use super::handler::{Handler, Transform};
use crate::core::{Action, State};
use serde_json::Value;

/// How one phase deviates from the default behaviour.
#[derive(Clone, Debug, Default)]
pub enum HandlerOverride {
    /// Default key and default merge.
    #[default]
    Default,
    /// Default merge, but store under this key.
    Key(String),
    /// Replace the handler entirely. Transforms do not apply.
    Replace(Handler),
}

impl HandlerOverride {
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    pub fn replace<F>(func: F) -> Self
    where
        F: Fn(State, &Action) -> State + Send + Sync + 'static,
    {
        Self::Replace(Handler::new(func))
    }

    /// Interpret a loosely typed configuration value.
    ///
    /// Strings rename the key; anything else falls back to the default.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(name)) => Self::Key(name.clone()),
            _ => Self::Default,
        }
    }

    pub(crate) fn key_name(&self) -> Option<&str> {
        match self {
            Self::Key(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub(crate) fn handler(&self) -> Option<&Handler> {
        match self {
            Self::Replace(handler) => Some(handler),
            _ => None,
        }
    }
}

impl From<&str> for HandlerOverride {
    fn from(name: &str) -> Self {
        Self::Key(name.to_string())
    }
}

impl From<String> for HandlerOverride {
    fn from(name: String) -> Self {
        Self::Key(name)
    }
}

impl From<Handler> for HandlerOverride {
    fn from(handler: Handler) -> Self {
        Self::Replace(handler)
    }
}

impl<T: Into<HandlerOverride>> From<Option<T>> for HandlerOverride {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Default, Into::into)
    }
}

/// Per-phase overrides plus optional payload transforms.
///
/// # Example
///
/// ```rust
/// use phase_reducer::handlers::Overrides;
/// use serde_json::json;
///
/// let overrides = Overrides::new()
///     .success("items")
///     .transform(|payload| json!([payload]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub loading: HandlerOverride,
    pub success: HandlerOverride,
    pub error: HandlerOverride,
    pub transform: Option<Transform>,
    pub transform_error: Option<Transform>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(mut self, value: impl Into<HandlerOverride>) -> Self {
        self.loading = value.into();
        self
    }

    pub fn success(mut self, value: impl Into<HandlerOverride>) -> Self {
        self.success = value.into();
        self
    }

    pub fn error(mut self, value: impl Into<HandlerOverride>) -> Self {
        self.error = value.into();
        self
    }

    /// Replace the loading handler with a closure.
    pub fn on_loading<F>(self, func: F) -> Self
    where
        F: Fn(State, &Action) -> State + Send + Sync + 'static,
    {
        self.loading(HandlerOverride::replace(func))
    }

    /// Replace the success handler with a closure.
    pub fn on_success<F>(self, func: F) -> Self
    where
        F: Fn(State, &Action) -> State + Send + Sync + 'static,
    {
        self.success(HandlerOverride::replace(func))
    }

    /// Replace the error handler with a closure.
    pub fn on_error<F>(self, func: F) -> Self
    where
        F: Fn(State, &Action) -> State + Send + Sync + 'static,
    {
        self.error(HandlerOverride::replace(func))
    }

    /// Map the success payload before the default success handler stores it.
    pub fn transform<F>(mut self, func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.transform = Some(Transform::new(func));
        self
    }

    /// Map the error payload before the default error handler stores it.
    pub fn transform_error<F>(mut self, func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.transform_error = Some(Transform::new(func));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_become_key_overrides() {
        let overrides = Overrides::new().loading("busy").success(String::from("items"));

        assert_eq!(overrides.loading.key_name(), Some("busy"));
        assert_eq!(overrides.success.key_name(), Some("items"));
        assert!(matches!(overrides.error, HandlerOverride::Default));
    }

    #[test]
    fn none_is_default() {
        let overrides = Overrides::new().error(None::<&str>);
        assert!(matches!(overrides.error, HandlerOverride::Default));
    }

    #[test]
    fn closures_become_replacements() {
        let overrides = Overrides::new().on_success(|state, _| state);

        assert!(overrides.success.handler().is_some());
        assert!(overrides.success.key_name().is_none());
    }

    #[test]
    fn from_value_is_permissive() {
        assert!(matches!(
            HandlerOverride::from_value(Some(&json!("k"))),
            HandlerOverride::Key(ref k) if k == "k"
        ));
        assert!(matches!(
            HandlerOverride::from_value(Some(&json!(42))),
            HandlerOverride::Default
        ));
        assert!(matches!(
            HandlerOverride::from_value(Some(&json!({"nested": true}))),
            HandlerOverride::Default
        ));
        assert!(matches!(
            HandlerOverride::from_value(None),
            HandlerOverride::Default
        ));
    }

    #[test]
    fn transforms_are_stored() {
        let overrides = Overrides::new()
            .transform(|v| v)
            .transform_error(|_| Value::Null);

        assert!(overrides.transform.is_some());
        assert_eq!(
            overrides.transform_error.unwrap().apply(json!("x")),
            Value::Null
        );
    }
}
