//! Property-based tests for type derivation and reducer dispatch.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use phase_reducer::core::{action_types, derive_types, final_action_type, Action, State, Suffixes};
use phase_reducer::{create_reducer, Overrides};
use proptest::prelude::*;
use serde_json::{json, Value};

prop_compose! {
    fn arbitrary_base()(base in "[A-Z][A-Z_]{0,15}") -> String {
        base
    }
}

prop_compose! {
    fn arbitrary_value()(variant in 0..5u8, n in any::<i64>(), s in "[a-z]{0,8}") -> Value {
        match variant {
            0 => Value::Null,
            1 => json!(n),
            2 => json!(s),
            3 => json!([n, s]),
            _ => json!({"inner": s}),
        }
    }
}

prop_compose! {
    fn arbitrary_state()(
        entries in prop::collection::btree_map("[a-z]{1,6}", arbitrary_value(), 0..6)
    ) -> State {
        entries.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn default_suffixes_are_appended(base in arbitrary_base()) {
        let types = action_types(&base);
        prop_assert_eq!(types.loading, format!("{base}_PENDING"));
        prop_assert_eq!(types.success, format!("{base}_FULFILLED"));
        prop_assert_eq!(types.error, format!("{base}_REJECTED"));
    }

    #[test]
    fn suppressed_suffixes_yield_bare_name(base in arbitrary_base()) {
        let types = derive_types(&base, &Suffixes::new("", false, ""));
        prop_assert_eq!(&types.loading, &base);
        prop_assert_eq!(&types.success, &base);
        prop_assert_eq!(&types.error, &base);
    }

    #[test]
    fn final_type_shares_settled_identifier(base in arbitrary_base()) {
        let types = final_action_type(&base);
        prop_assert_eq!(types.loading, format!("{base}_PENDING"));
        prop_assert_eq!(&types.success, &base);
        prop_assert_eq!(&types.error, &base);
    }

    #[test]
    fn derivation_is_deterministic(base in arbitrary_base(), suffix in "[A-Z_]{0,6}") {
        let suffixes = Suffixes::new(suffix.as_str(), None::<&str>, suffix.as_str());
        prop_assert_eq!(derive_types(&base, &suffixes), derive_types(&base, &suffixes));
    }

    #[test]
    fn unknown_actions_are_identity(state in arbitrary_state(), kind in "[a-z]{1,10}") {
        // Generated kinds are lowercase and never match the uppercase types.
        let reducer = create_reducer("MY_ACTION", None, State::new());
        let next = reducer.reduce(state.clone(), &Action::new(kind));
        prop_assert_eq!(next, state);
    }

    #[test]
    fn loading_preserves_unrelated_keys(state in arbitrary_state()) {
        let reducer = create_reducer("MY_ACTION", None, State::new());
        let next = reducer.reduce(state.clone(), &Action::new("MY_ACTION_PENDING"));

        prop_assert_eq!(&next["loading"], &json!(true));
        prop_assert_eq!(&next["error"], &Value::Null);
        for (key, value) in &state {
            if key != "loading" && key != "error" {
                prop_assert_eq!(&next[key], value);
            }
        }
    }

    #[test]
    fn success_stores_payload(state in arbitrary_state(), payload in arbitrary_value()) {
        let reducer = create_reducer("MY_ACTION", None, State::new());
        let next = reducer.reduce(
            state,
            &Action::new("MY_ACTION_FULFILLED").with_payload(payload.clone()),
        );

        prop_assert_eq!(&next["loading"], &json!(false));
        prop_assert_eq!(&next["error"], &Value::Null);
        prop_assert_eq!(&next["data"], &payload);
    }

    #[test]
    fn error_keeps_data(state in arbitrary_state(), payload in arbitrary_value()) {
        let reducer = create_reducer("MY_ACTION", None, State::new());
        let before = state.get("data").cloned();
        let next = reducer.reduce(state, &Action::failure("MY_ACTION_REJECTED", payload.clone()));

        prop_assert_eq!(&next["loading"], &json!(false));
        prop_assert_eq!(&next["error"], &payload);
        prop_assert_eq!(next.get("data").cloned(), before);
    }

    #[test]
    fn renamed_success_key_replaces_data(payload in arbitrary_value()) {
        let reducer = create_reducer(
            "MY_ACTION",
            Some(Overrides::new().success("myData")),
            State::new(),
        );
        let next = reducer.reduce(
            State::new(),
            &Action::new("MY_ACTION_FULFILLED").with_payload(payload.clone()),
        );

        prop_assert_eq!(&next["myData"], &payload);
        prop_assert!(!next.contains_key("data"));
    }

    #[test]
    fn transform_applies_to_default_success(n in -1_000_000i64..1_000_000) {
        let reducer = create_reducer(
            "MY_ACTION",
            Some(Overrides::new().transform(|v| json!(v.as_i64().unwrap_or(0) + 1))),
            State::new(),
        );
        let next = reducer.reduce(
            State::new(),
            &Action::new("MY_ACTION_FULFILLED").with_payload(json!(n)),
        );

        prop_assert_eq!(&next["data"], &json!(n + 1));
    }

    #[test]
    fn bootstrap_returns_initial_state(initial in arbitrary_state()) {
        let reducer = create_reducer("MY_ACTION", None, initial.clone());
        prop_assert_eq!(reducer.init(), initial);
    }

    #[test]
    fn action_roundtrip_serialization(
        kind in "[A-Z_]{1,12}",
        payload in arbitrary_value().prop_filter("null payload reads back as absent", |v| !v.is_null()),
        error in any::<bool>()
    ) {
        let action = Action::new(kind).with_payload(payload).with_error(error);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(action, deserialized);
    }
}
