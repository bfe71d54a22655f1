//! Action-type identifier derivation.
//!
//! An asynchronous operation is tracked through three action types, one per
//! phase. These are usually derived from a single base name by appending a
//! suffix per phase.

use super::phase::Phase;
use serde::{Deserialize, Serialize};

/// Suffix appended to the base name for the loading type by default.
pub const PENDING_SUFFIX: &str = "_PENDING";

/// Suffix appended to the base name for the success type by default.
pub const FULFILLED_SUFFIX: &str = "_FULFILLED";

/// Suffix appended to the base name for the error type by default.
pub const REJECTED_SUFFIX: &str = "_REJECTED";

/// How a single phase suffix is chosen.
///
/// # Example
///
/// ```rust
/// use phase_reducer::core::Suffix;
///
/// assert_eq!(Suffix::from(None::<&str>), Suffix::Default);
/// assert_eq!(Suffix::from(""), Suffix::Suppressed);
/// assert_eq!(Suffix::from(false), Suffix::Suppressed);
/// assert_eq!(Suffix::from(0), Suffix::Suppressed);
/// assert_eq!(Suffix::from("_LOADING"), Suffix::Custom("_LOADING".to_string()));
/// ```
///
/// In JSON a suffix is written the same way: `null` for the default, `""`,
/// `false` or `0` for none, and any other string or number verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SuffixRepr", into = "SuffixRepr")]
pub enum Suffix {
    /// Use the phase's default suffix.
    #[default]
    Default,
    /// No suffix: the identifier is the bare base name.
    Suppressed,
    /// Append this suffix verbatim.
    Custom(String),
}

impl Suffix {
    fn apply(&self, base: &str, default: &str) -> String {
        match self {
            Self::Default => format!("{base}{default}"),
            Self::Suppressed => base.to_string(),
            Self::Custom(suffix) => format!("{base}{suffix}"),
        }
    }
}

impl From<&str> for Suffix {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Suppressed
        } else {
            Self::Custom(value.to_string())
        }
    }
}

impl From<String> for Suffix {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::Suppressed
        } else {
            Self::Custom(value)
        }
    }
}

impl<T: Into<Suffix>> From<Option<T>> for Suffix {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Default, Into::into)
    }
}

/// `false` switches the suffix off; `true` keeps the default.
impl From<bool> for Suffix {
    fn from(value: bool) -> Self {
        if value {
            Self::Default
        } else {
            Self::Suppressed
        }
    }
}

/// `0` switches the suffix off; other numbers are appended as digits.
impl From<i32> for Suffix {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i64> for Suffix {
    fn from(value: i64) -> Self {
        if value == 0 {
            Self::Suppressed
        } else {
            Self::Custom(value.to_string())
        }
    }
}

/// Loosely typed wire form of [`Suffix`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum SuffixRepr {
    Unset,
    Flag(bool),
    Number(i64),
    Text(String),
}

impl From<SuffixRepr> for Suffix {
    fn from(repr: SuffixRepr) -> Self {
        match repr {
            SuffixRepr::Unset => Self::Default,
            SuffixRepr::Flag(flag) => flag.into(),
            SuffixRepr::Number(n) => n.into(),
            SuffixRepr::Text(text) => text.into(),
        }
    }
}

impl From<Suffix> for SuffixRepr {
    fn from(suffix: Suffix) -> Self {
        match suffix {
            Suffix::Default => Self::Unset,
            Suffix::Suppressed => Self::Text(String::new()),
            Suffix::Custom(text) => Self::Text(text),
        }
    }
}

/// Per-phase suffix choices for [`derive_types`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suffixes {
    pub loading: Suffix,
    pub success: Suffix,
    pub error: Suffix,
}

impl Suffixes {
    pub fn new(
        loading: impl Into<Suffix>,
        success: impl Into<Suffix>,
        error: impl Into<Suffix>,
    ) -> Self {
        Self {
            loading: loading.into(),
            success: success.into(),
            error: error.into(),
        }
    }

    pub fn loading(mut self, suffix: impl Into<Suffix>) -> Self {
        self.loading = suffix.into();
        self
    }

    pub fn success(mut self, suffix: impl Into<Suffix>) -> Self {
        self.success = suffix.into();
        self
    }

    pub fn error(mut self, suffix: impl Into<Suffix>) -> Self {
        self.error = suffix.into();
        self
    }
}

/// The three action-type identifiers matched by a reducer.
///
/// `success` and `error` may be the same string (see [`final_action_type`]);
/// the action's error flag then decides which handler runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeTriple {
    pub loading: String,
    pub success: String,
    pub error: String,
}

impl TypeTriple {
    pub fn new(
        loading: impl Into<String>,
        success: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            loading: loading.into(),
            success: success.into(),
            error: error.into(),
        }
    }

    pub fn get(&self, phase: Phase) -> &str {
        match phase {
            Phase::Loading => &self.loading,
            Phase::Success => &self.success,
            Phase::Error => &self.error,
        }
    }

    /// True when success and error share one identifier.
    pub fn is_collapsed(&self) -> bool {
        self.success == self.error
    }
}

/// A bare base name derives the default suffixed types.
impl From<&str> for TypeTriple {
    fn from(base: &str) -> Self {
        action_types(base)
    }
}

impl From<String> for TypeTriple {
    fn from(base: String) -> Self {
        action_types(&base)
    }
}

impl From<&String> for TypeTriple {
    fn from(base: &String) -> Self {
        action_types(base)
    }
}

impl From<&TypeTriple> for TypeTriple {
    fn from(types: &TypeTriple) -> Self {
        types.clone()
    }
}

/// Derive the type triple for `base` using the given suffixes.
///
/// # Example
///
/// ```rust
/// use phase_reducer::core::{derive_types, Suffixes};
///
/// let types = derive_types("FETCH", &Suffixes::default().loading("_LOADING"));
/// assert_eq!(types.loading, "FETCH_LOADING");
/// assert_eq!(types.success, "FETCH_FULFILLED");
///
/// let bare = derive_types("FETCH", &Suffixes::new(None::<&str>, "", false));
/// assert_eq!(bare.loading, "FETCH_PENDING");
/// assert_eq!(bare.success, "FETCH");
/// assert_eq!(bare.error, "FETCH");
/// ```
pub fn derive_types(base: &str, suffixes: &Suffixes) -> TypeTriple {
    TypeTriple {
        loading: suffixes.loading.apply(base, PENDING_SUFFIX),
        success: suffixes.success.apply(base, FULFILLED_SUFFIX),
        error: suffixes.error.apply(base, REJECTED_SUFFIX),
    }
}

/// Derive the type triple for `base` with the default suffixes.
///
/// ```rust
/// use phase_reducer::core::action_types;
///
/// let types = action_types("MY_ACTION");
/// assert_eq!(types.loading, "MY_ACTION_PENDING");
/// assert_eq!(types.success, "MY_ACTION_FULFILLED");
/// assert_eq!(types.error, "MY_ACTION_REJECTED");
/// ```
pub fn action_types(base: &str) -> TypeTriple {
    derive_types(base, &Suffixes::default())
}

/// Type triple where success and error share the bare base name.
///
/// Used with dispatchers that emit a single settled action and flag
/// failures with `error: true`.
pub fn final_action_type(base: &str) -> TypeTriple {
    TypeTriple {
        loading: format!("{base}{PENDING_SUFFIX}"),
        success: base.to_string(),
        error: base.to_string(),
    }
}
