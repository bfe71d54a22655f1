//! Resolution of overrides into concrete keys and handlers.

use super::handler::{Handler, Transform};
use super::overrides::Overrides;
use crate::core::{merge, Action, Phase, State};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// State key holding the loading flag by default.
pub const DEFAULT_LOADING_KEY: &str = "loading";

/// State key holding the success payload by default.
pub const DEFAULT_SUCCESS_KEY: &str = "data";

/// State key holding the error value by default.
pub const DEFAULT_ERROR_KEY: &str = "error";

/// State field names written by the default handlers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTriple {
    pub loading: String,
    pub success: String,
    pub error: String,
}

impl Default for KeyTriple {
    fn default() -> Self {
        Self {
            loading: DEFAULT_LOADING_KEY.to_string(),
            success: DEFAULT_SUCCESS_KEY.to_string(),
            error: DEFAULT_ERROR_KEY.to_string(),
        }
    }
}

impl KeyTriple {
    pub fn get(&self, phase: Phase) -> &str {
        match phase {
            Phase::Loading => &self.loading,
            Phase::Success => &self.success,
            Phase::Error => &self.error,
        }
    }
}

/// One handler per phase, always present.
#[derive(Clone, Debug)]
pub struct HandlerTriple {
    pub loading: Handler,
    pub success: Handler,
    pub error: Handler,
}

impl HandlerTriple {
    pub fn get(&self, phase: Phase) -> &Handler {
        match phase {
            Phase::Loading => &self.loading,
            Phase::Success => &self.success,
            Phase::Error => &self.error,
        }
    }
}

/// Output of [`resolve`].
#[derive(Clone, Debug)]
pub struct Resolved {
    pub keys: KeyTriple,
    pub handlers: HandlerTriple,
}

/// Resolve overrides into the key mapping and the three handlers.
///
/// Key renames are collected first so that every default handler writes
/// the renamed keys. Replacement handlers are taken as-is; the matching
/// transform is dropped for them.
///
/// # Example
///
/// ```rust
/// use phase_reducer::core::{Action, State};
/// use phase_reducer::handlers::{resolve, Overrides};
/// use serde_json::json;
///
/// let resolved = resolve(&Overrides::new().success("items"));
/// assert_eq!(resolved.keys.success, "items");
///
/// let next = resolved
///     .handlers
///     .success
///     .call(State::new(), &Action::new("DONE").with_payload(json!([1])));
/// assert_eq!(next["items"], json!([1]));
/// assert!(!next.contains_key("data"));
/// ```
pub fn resolve(overrides: &Overrides) -> Resolved {
    let defaults = KeyTriple::default();
    let keys = KeyTriple {
        loading: overrides
            .loading
            .key_name()
            .map_or(defaults.loading, str::to_string),
        success: overrides
            .success
            .key_name()
            .map_or(defaults.success, str::to_string),
        error: overrides
            .error
            .key_name()
            .map_or(defaults.error, str::to_string),
    };

    let handlers = HandlerTriple {
        loading: overrides
            .loading
            .handler()
            .cloned()
            .unwrap_or_else(|| default_loading(&keys)),
        success: overrides
            .success
            .handler()
            .cloned()
            .unwrap_or_else(|| default_success(&keys, overrides.transform.clone())),
        error: overrides
            .error
            .handler()
            .cloned()
            .unwrap_or_else(|| default_error(&keys, overrides.transform_error.clone())),
    };

    Resolved { keys, handlers }
}

fn default_loading(keys: &KeyTriple) -> Handler {
    let loading = keys.loading.clone();
    let error = keys.error.clone();
    Handler::new(move |state: State, _action: &Action| {
        merge(
            state,
            [
                (loading.clone(), Value::Bool(true)),
                (error.clone(), Value::Null),
            ],
        )
    })
}

fn default_success(keys: &KeyTriple, transform: Option<Transform>) -> Handler {
    let KeyTriple {
        loading,
        success,
        error,
    } = keys.clone();
    Handler::new(move |state: State, action: &Action| {
        let payload = payload_of(action, transform.as_ref());
        merge(
            state,
            [
                (loading.clone(), Value::Bool(false)),
                (error.clone(), Value::Null),
                (success.clone(), payload),
            ],
        )
    })
}

fn default_error(keys: &KeyTriple, transform: Option<Transform>) -> Handler {
    let loading = keys.loading.clone();
    let error = keys.error.clone();
    Handler::new(move |state: State, action: &Action| {
        let payload = payload_of(action, transform.as_ref());
        merge(
            state,
            [
                (loading.clone(), Value::Bool(false)),
                (error.clone(), payload),
            ],
        )
    })
}

fn payload_of(action: &Action, transform: Option<&Transform>) -> Value {
    let payload = action.payload_or_null();
    match transform {
        Some(transform) => transform.apply(payload),
        None => payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::HandlerOverride;
    use serde_json::json;

    fn obj(value: Value) -> State {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn defaults_resolve_default_keys() {
        let resolved = resolve(&Overrides::default());

        assert_eq!(resolved.keys, KeyTriple::default());
        assert_eq!(resolved.keys.get(Phase::Success), "data");
    }

    #[test]
    fn default_loading_sets_flag_and_clears_error() {
        let resolved = resolve(&Overrides::default());
        let next = resolved.handlers.loading.call(
            obj(json!({"loading": false, "data": "d", "error": "e"})),
            &Action::new("ANY"),
        );

        assert_eq!(
            Value::Object(next),
            json!({"loading": true, "data": "d", "error": null})
        );
    }

    #[test]
    fn default_success_stores_payload() {
        let resolved = resolve(&Overrides::default());
        let next = resolved.handlers.success.call(
            obj(json!({"loading": true, "error": "e"})),
            &Action::new("ANY").with_payload(json!("d")),
        );

        assert_eq!(
            Value::Object(next),
            json!({"loading": false, "data": "d", "error": null})
        );
    }

    #[test]
    fn default_success_without_payload_stores_null() {
        let resolved = resolve(&Overrides::default());
        let next = resolved
            .handlers
            .success
            .call(State::new(), &Action::new("ANY"));

        assert_eq!(next["data"], Value::Null);
    }

    #[test]
    fn default_error_keeps_data() {
        let resolved = resolve(&Overrides::default());
        let next = resolved.handlers.error.call(
            obj(json!({"loading": true, "data": "d"})),
            &Action::failure("ANY", json!("oops")),
        );

        assert_eq!(
            Value::Object(next),
            json!({"loading": false, "data": "d", "error": "oops"})
        );
    }

    #[test]
    fn renamed_keys_apply_to_every_default_handler() {
        let resolved = resolve(
            &Overrides::new()
                .loading("myLoading")
                .success("myData")
                .error("myError"),
        );
        let action = Action::new("ANY").with_payload(json!(1));

        assert_eq!(
            Value::Object(resolved.handlers.loading.call(State::new(), &action)),
            json!({"myLoading": true, "myError": null})
        );
        assert_eq!(
            Value::Object(resolved.handlers.success.call(State::new(), &action)),
            json!({"myLoading": false, "myData": 1, "myError": null})
        );
        assert_eq!(
            Value::Object(resolved.handlers.error.call(State::new(), &action)),
            json!({"myLoading": false, "myError": 1})
        );
    }

    #[test]
    fn replacement_handler_is_used_verbatim() {
        let resolved = resolve(&Overrides::new().on_loading(|_, _| obj(json!({"only": true}))));
        let next = resolved
            .handlers
            .loading
            .call(obj(json!({"foo": "bar"})), &Action::new("ANY"));

        assert_eq!(Value::Object(next), json!({"only": true}));
    }

    #[test]
    fn transforms_apply_to_default_handlers() {
        let resolved = resolve(
            &Overrides::new()
                .transform(|v| json!(v.as_i64().unwrap_or(0) + 1))
                .transform_error(|v| json!(v.as_i64().unwrap_or(0) - 1)),
        );

        let ok = resolved
            .handlers
            .success
            .call(State::new(), &Action::new("ANY").with_payload(json!(1)));
        let err = resolved
            .handlers
            .error
            .call(State::new(), &Action::failure("ANY", json!(1)));

        assert_eq!(ok["data"], json!(2));
        assert_eq!(err["error"], json!(0));
    }

    #[test]
    fn transforms_skip_replaced_handlers() {
        let resolved = resolve(
            &Overrides::new()
                .on_success(|mut state, action| {
                    state.insert("raw".to_string(), action.payload_or_null());
                    state
                })
                .transform(|_| json!("transformed")),
        );

        let next = resolved
            .handlers
            .success
            .call(State::new(), &Action::new("ANY").with_payload(json!(1)));

        assert_eq!(Value::Object(next), json!({"raw": 1}));
    }

    #[test]
    fn error_transform_skips_replaced_error_handler() {
        let resolved = resolve(
            &Overrides::new()
                .on_error(|mut state, action| {
                    state.insert("rawError".to_string(), action.payload_or_null());
                    state
                })
                .transform_error(|_| json!("transformed")),
        );

        let next = resolved
            .handlers
            .error
            .call(State::new(), &Action::failure("ANY", json!("boom")));

        assert_eq!(Value::Object(next), json!({"rawError": "boom"}));
    }

    #[test]
    fn key_override_does_not_replace_handler() {
        let overrides = Overrides::new().error(HandlerOverride::key("failure"));
        let resolved = resolve(&overrides);
        let next = resolved
            .handlers
            .error
            .call(State::new(), &Action::failure("ANY", json!("boom")));

        assert_eq!(
            Value::Object(next),
            json!({"loading": false, "failure": "boom"})
        );
    }
}
