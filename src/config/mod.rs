//! Declarative reducer configuration.
//!
//! A [`ReducerConfig`] describes a reducer in plain data so it can live in a
//! JSON file next to the host's other settings. Only what is expressible as
//! data is covered here: action types, key renames and the initial state.
//! Replacement handlers and transforms are attached to the builder returned
//! by [`ReducerConfig::into_builder`].
//!
//! Validation accumulates every violation instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use phase_reducer::config::ReducerConfig;
//! use phase_reducer::core::Action;
//! use serde_json::json;
//!
//! let config = ReducerConfig::from_json(
//!     r#"{
//!         "types": {"base": "USERS", "final": true},
//!         "keys": {"success": "users"},
//!         "initial_state": {"users": []}
//!     }"#,
//! )
//! .unwrap();
//!
//! let reducer = config.build().unwrap();
//! let state = reducer.reduce(reducer.init(), &Action::new("USERS").with_payload(json!(["ada"])));
//! assert_eq!(state["users"], json!(["ada"]));
//! ```

use crate::builder::ReducerBuilder;
use crate::core::{derive_types, final_action_type, Phase, State, Suffixes, TypeTriple};
use crate::handlers::HandlerOverride;
use crate::reducer::Reducer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// Where the action types come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypesConfig {
    /// A bare base name with the default suffixes.
    Base(String),
    /// Explicit identifiers, used as-is.
    Explicit(TypeTriple),
    /// A base name with per-phase suffix choices, or final type mode.
    Derived {
        base: String,
        #[serde(default)]
        suffixes: Suffixes,
        #[serde(default, rename = "final")]
        final_type: bool,
    },
}

impl TypesConfig {
    /// Compute the type triple this configuration describes.
    pub fn to_types(&self) -> TypeTriple {
        match self {
            Self::Base(base) => TypeTriple::from(base),
            Self::Explicit(types) => types.clone(),
            Self::Derived {
                base,
                final_type: true,
                ..
            } => final_action_type(base),
            Self::Derived { base, suffixes, .. } => derive_types(base, suffixes),
        }
    }

    fn base(&self) -> Option<&str> {
        match self {
            Self::Base(base) | Self::Derived { base, .. } => Some(base.as_str()),
            Self::Explicit(_) => None,
        }
    }
}

/// Key renames, one loosely typed value per phase.
///
/// A string renames the key. Any other value, or no value, keeps the default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub loading: Option<Value>,
    pub success: Option<Value>,
    pub error: Option<Value>,
}

/// Serializable description of a reducer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReducerConfig {
    pub types: TypesConfig,
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub initial_state: Option<Value>,
}

impl ReducerConfig {
    pub fn new(types: TypesConfig) -> Self {
        Self {
            types,
            keys: KeysConfig::default(),
            initial_state: None,
        }
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from an already-decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Check the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if self.types.base().is_some_and(str::is_empty) {
            checks.push(Validation::fail(ConfigViolation::EmptyBaseName));
        }

        if let TypesConfig::Derived {
            suffixes,
            final_type: true,
            ..
        } = &self.types
        {
            if *suffixes != Suffixes::default() {
                checks.push(Validation::fail(ConfigViolation::SuffixesWithFinalType));
            }
        }

        let types = self.types.to_types();
        for phase in Phase::ALL {
            let check = if types.get(phase).is_empty() {
                Validation::fail(ConfigViolation::EmptyTypeIdentifier { phase })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        match &self.initial_state {
            None | Some(Value::Object(_)) => checks.push(Validation::success(())),
            Some(other) => checks.push(Validation::fail(ConfigViolation::InitialStateNotObject {
                found: kind_of(other).to_string(),
            })),
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and turn the configuration into a builder.
    pub fn into_builder(self) -> Result<ReducerBuilder, ConfigError> {
        if let Validation::Failure(errors) = self.validate() {
            let violations: Vec<ConfigViolation> = errors.iter().cloned().collect();
            tracing::debug!(count = violations.len(), "rejected reducer configuration");
            return Err(ConfigError::Invalid { violations });
        }

        let initial_state = match self.initial_state {
            Some(Value::Object(map)) => map,
            _ => State::new(),
        };

        Ok(ReducerBuilder::new(self.types.to_types())
            .loading(HandlerOverride::from_value(self.keys.loading.as_ref()))
            .success(HandlerOverride::from_value(self.keys.success.as_ref()))
            .error(HandlerOverride::from_value(self.keys.error.as_ref()))
            .initial_state(initial_state))
    }

    /// Validate and build the reducer.
    pub fn build(self) -> Result<Reducer, ConfigError> {
        Ok(self.into_builder()?.build())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
