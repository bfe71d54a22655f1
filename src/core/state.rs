//! The open state record produced by reducers.

use serde_json::{Map, Value};

/// State is an open JSON object. Reducers only add or overwrite their own
/// keys and carry every other entry through untouched.
pub type State = Map<String, Value>;

/// Shallow merge: the result is `state` with each of `entries` written over it.
///
/// Takes `state` by value so the caller's record is never changed behind
/// its back; the returned map is the new state.
///
/// # Example
///
/// ```rust
/// use phase_reducer::core::{merge, State};
/// use serde_json::json;
///
/// let mut state = State::new();
/// state.insert("keep".to_string(), json!(1));
/// state.insert("loading".to_string(), json!(false));
///
/// let next = merge(state, [("loading", json!(true))]);
///
/// assert_eq!(next["keep"], json!(1));
/// assert_eq!(next["loading"], json!(true));
/// ```
pub fn merge<K, I>(mut state: State, entries: I) -> State
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    for (key, value) in entries {
        state.insert(key.into(), value);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(value: Value) -> State {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn merge_preserves_unrelated_keys() {
        let before = state(json!({"foo": "bar", "loading": false}));
        let after = merge(before, [("loading", json!(true)), ("error", Value::Null)]);

        assert_eq!(
            Value::Object(after),
            json!({"foo": "bar", "loading": true, "error": null})
        );
    }

    #[test]
    fn merge_later_entries_win() {
        let after = merge(State::new(), [("k", json!(1)), ("k", json!(2))]);
        assert_eq!(after["k"], json!(2));
    }

    #[test]
    fn merge_with_no_entries_is_identity() {
        let before = state(json!({"a": [1, 2]}));
        let after = merge(before.clone(), Vec::<(String, Value)>::new());
        assert_eq!(before, after);
    }
}
