//! The immutable State container.
//!
//! A `State` is a snapshot of named values threaded through a pipeline of
//! transformation steps. Updates never mutate in place: `assign` and
//! `discard` return new snapshots, so any number of holders can keep reading
//! an older snapshot while derived ones move forward.

use super::error::{value_type_name, StateError};
use super::truthy::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// An immutable mapping from string keys to arbitrary JSON values.
///
/// All update operations are pure - they return a new `State` and leave the
/// receiver untouched. Values are opaque to the container: no validation,
/// no schema.
///
/// # Example
///
/// ```rust
/// use flowstate::State;
/// use serde_json::json;
///
/// let before = State::from_iter([("dog", json!("water")), ("horses", json!(5))]);
/// let after = before.assign([("dog", json!("not water"))]);
///
/// assert_eq!(after.fetch("dog"), &json!("not water"));
/// assert_eq!(before.fetch("dog"), &json!("water")); // original unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    entries: Map<String, Value>,
}

impl State {
    /// Create an empty state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::State;
    ///
    /// let state = State::new();
    /// assert!(state.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            entries: Map::new(),
        }
    }

    /// Produce a new state with `overrides` layered on top of the receiver.
    ///
    /// An override wins on key collision. This is a pure function - the
    /// receiver keeps its entries, so pipelines can fork from a shared
    /// ancestor snapshot without interference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::State;
    /// use serde_json::json;
    ///
    /// let s = State::from_iter([("a", json!(1)), ("b", json!(2))]);
    /// let t = s.assign([("b", json!(3)), ("c", json!(4))]);
    ///
    /// assert_eq!(t, State::from_iter([("a", json!(1)), ("b", json!(3)), ("c", json!(4))]));
    /// assert_eq!(s, State::from_iter([("a", json!(1)), ("b", json!(2))]));
    /// ```
    pub fn assign<I, K, V>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut entries = self.entries.clone();
        for (key, value) in overrides {
            entries.insert(key.into(), value.into());
        }
        Self { entries }
    }

    /// Produce a new state without the named keys.
    ///
    /// Keys not present in the receiver are silently ignored, so discarding
    /// is idempotent and never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::State;
    /// use serde_json::json;
    ///
    /// let s = State::from_iter([("a", json!(1)), ("b", json!(2)), ("c", json!(3))]);
    ///
    /// assert_eq!(s.discard(["b"]), State::from_iter([("a", json!(1)), ("c", json!(3))]));
    /// assert_eq!(s.discard(["z"]), s); // missing key is a no-op
    /// ```
    pub fn discard<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut entries = self.entries.clone();
        for key in keys {
            entries.remove(key.as_ref());
        }
        Self { entries }
    }

    /// Look up a key, reporting presence.
    ///
    /// This is the presence-aware accessor: `None` means the key is absent,
    /// as opposed to present with a null value. Callers apply their own
    /// fallback idiom (`unwrap_or`, `map_or`, ...).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Read a key, yielding `Value::Null` for a missing key.
    ///
    /// Missing keys are not an error on this path; `Null` is the absence
    /// sentinel, falsy under [`is_truthy`](super::is_truthy) so the usual
    /// fallback idioms apply.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::State;
    /// use serde_json::Value;
    ///
    /// let state = State::new();
    /// assert_eq!(state.fetch("missing"), &Value::Null);
    /// ```
    pub fn fetch(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NULL)
    }

    /// Read a key, falling back when the stored value is absent or falsy.
    ///
    /// Returns the stored value if it is [truthy](super::is_truthy),
    /// otherwise `fallback`. A stored value that is itself falsy (null,
    /// `false`, `0`, `""`, `[]`, `{}`) yields the fallback even though the
    /// key is present - absence and falsiness are deliberately conflated on
    /// this path. Use [`get`](Self::get) when presence matters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::State;
    /// use serde_json::json;
    ///
    /// let state = State::from_iter([("count", json!(0))]);
    ///
    /// assert_eq!(state.fetch_or("missing", 42), json!(42));
    /// assert_eq!(state.fetch_or("count", 99), json!(99)); // 0 is falsy
    /// ```
    pub fn fetch_or<V: Into<Value>>(&self, key: &str, fallback: V) -> Value {
        let stored = self.fetch(key);
        if is_truthy(stored) {
            stored.clone()
        } else {
            fallback.into()
        }
    }

    /// Apply `f` to this state and return its result unmodified.
    ///
    /// `f` conventionally returns another `State` to keep the chain going,
    /// but any return type works. Chaining keeps the textual order of steps
    /// aligned with their execution order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::State;
    /// use serde_json::json;
    ///
    /// fn step_one(state: State) -> State {
    ///     state.assign([("x", json!(1))])
    /// }
    ///
    /// fn step_two(state: State) -> State {
    ///     let next = state.fetch_or("x", 0).as_i64().unwrap_or(0) + 1;
    ///     state.assign([("y", json!(next))])
    /// }
    ///
    /// let state = State::new().then(step_one).then(step_two);
    ///
    /// assert_eq!(state.fetch("x"), &json!(1));
    /// assert_eq!(state.fetch("y"), &json!(2));
    /// ```
    pub fn then<T, F>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the state holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a key is present, regardless of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Iterate over entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Borrow the backing map.
    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Consume the state, yielding the backing map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }
}

impl<K, V> FromIterator<(K, V)> for State
where
    K: Into<String>,
    V: Into<Value>,
{
    /// Build a state from key-value pairs; later pairs win on collision.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Map::new();
        for (key, value) in iter {
            entries.insert(key.into(), value.into());
        }
        Self { entries }
    }
}

impl From<Map<String, Value>> for State {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl TryFrom<Value> for State {
    type Error = StateError;

    /// Adopt a JSON object as a state; any other JSON type is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowstate::State;
    /// use serde_json::json;
    ///
    /// let state = State::try_from(json!({"items": ["house", "car", "bear"]})).unwrap();
    /// assert_eq!(state.len(), 1);
    ///
    /// assert!(State::try_from(json!([1, 2, 3])).is_err());
    /// ```
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(StateError::NotAnObject {
                found: value_type_name(&other),
            }),
        }
    }
}

impl IntoIterator for State {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::ops::Index<&str> for State {
    type Output = Value;

    /// Index by key, yielding `Value::Null` for a missing key.
    fn index(&self, key: &str) -> &Value {
        self.fetch(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> State {
        State::from_iter([("a", json!(1)), ("b", json!(2))])
    }

    #[test]
    fn new_state_is_empty() {
        let state = State::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn assign_layers_overrides_on_top() {
        let state = sample().assign([("b", json!(3)), ("c", json!(4))]);

        assert_eq!(
            state,
            State::from_iter([("a", json!(1)), ("b", json!(3)), ("c", json!(4))])
        );
    }

    #[test]
    fn assign_is_immutable() {
        let state = sample();
        let derived = state.assign([("b", json!(3))]);

        assert_eq!(state, sample());
        assert_eq!(derived.fetch("b"), &json!(3));
    }

    #[test]
    fn assign_accepts_another_state_as_source() {
        let base = sample();
        let overlay = State::from_iter([("b", json!(9)), ("d", json!(10))]);

        let merged = base.assign(overlay);

        assert_eq!(merged.fetch("a"), &json!(1));
        assert_eq!(merged.fetch("b"), &json!(9));
        assert_eq!(merged.fetch("d"), &json!(10));
    }

    #[test]
    fn discard_removes_named_keys() {
        let state = State::from_iter([("a", json!(1)), ("b", json!(2)), ("c", json!(3))]);

        let remaining = state.discard(["b"]);

        assert_eq!(
            remaining,
            State::from_iter([("a", json!(1)), ("c", json!(3))])
        );
    }

    #[test]
    fn discard_ignores_missing_keys() {
        let state = sample();
        assert_eq!(state.discard(["z"]), state);
    }

    #[test]
    fn discard_is_immutable() {
        let state = sample();
        let _ = state.discard(["a"]);
        assert_eq!(state, sample());
    }

    #[test]
    fn discard_is_idempotent() {
        let state = State::from_iter([("a", json!(1)), ("b", json!(2))]);
        assert_eq!(state.discard(["b"]).discard(["b"]), state.discard(["b"]));
    }

    #[test]
    fn assign_then_discard_restores_key_set() {
        let state = sample();
        assert_eq!(
            state.assign([("k", json!("v"))]).discard(["k"]),
            state.discard(["k"])
        );
    }

    #[test]
    fn fetch_yields_null_for_missing_key() {
        let state = State::new();
        assert_eq!(state.fetch("missing"), &Value::Null);
    }

    #[test]
    fn fetch_or_falls_back_for_missing_key() {
        let state = State::new();
        assert_eq!(state.fetch_or("missing", 42), json!(42));
    }

    #[test]
    fn fetch_or_conflates_present_falsy_with_absent() {
        let state = State::from_iter([("count", json!(0))]);
        assert_eq!(state.fetch_or("count", 99), json!(99));
    }

    #[test]
    fn fetch_or_returns_present_truthy_value() {
        let state = State::from_iter([("count", json!(7))]);
        assert_eq!(state.fetch_or("count", 99), json!(7));
    }

    #[test]
    fn get_distinguishes_presence_from_truthiness() {
        let state = State::from_iter([("count", json!(0))]);

        assert_eq!(state.get("count"), Some(&json!(0)));
        assert_eq!(state.get("missing"), None);
    }

    #[test]
    fn index_matches_fetch() {
        let state = sample();
        assert_eq!(&state["a"], &json!(1));
        assert_eq!(&state["missing"], &Value::Null);
    }

    #[test]
    fn then_applies_function_and_returns_its_result() {
        let state = sample();
        let len = state.then(|s| s.len());
        assert_eq!(len, 2);
    }

    #[test]
    fn then_chains_left_to_right() {
        let state = State::new()
            .then(|s| s.assign([("x", json!(1))]))
            .then(|s| {
                let next = s.fetch_or("x", 0).as_i64().unwrap_or(0) + 1;
                s.assign([("y", json!(next))])
            });

        assert_eq!(state, State::from_iter([("x", json!(1)), ("y", json!(2))]));
    }

    #[test]
    fn from_iter_merges_left_to_right() {
        let state = State::from_iter([("k", json!(1)), ("k", json!(2))]);
        assert_eq!(state.fetch("k"), &json!(2));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn try_from_accepts_objects_only() {
        let state = State::try_from(json!({"a": 1})).unwrap();
        assert_eq!(state.fetch("a"), &json!(1));

        let err = State::try_from(json!([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), "expected a JSON object, found array");
    }

    #[test]
    fn state_serializes_as_plain_object() {
        let state = sample();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: State = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn shared_ancestor_supports_concurrent_derivation() {
        let ancestor = sample();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let base = ancestor.clone();
                std::thread::spawn(move || base.assign([("worker", json!(i))]))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let derived = handle.join().unwrap();
            assert_eq!(derived.fetch("worker"), &json!(i as i32));
            assert_eq!(derived.fetch("a"), &json!(1));
        }

        assert_eq!(ancestor, sample());
    }
}
