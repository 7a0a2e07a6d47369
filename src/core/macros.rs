//! Macros for ergonomic state construction.

/// Build a [`State`](crate::core::State) from a mapping literal.
///
/// Values go through [`serde_json::json!`], so plain literals, arrays, and
/// any `Serialize` expression work. Later entries win on key collision.
///
/// # Example
///
/// ```
/// use flowstate::state;
/// use serde_json::json;
///
/// let empty = state! {};
/// assert!(empty.is_empty());
///
/// let snapshot = state! {
///     "dog" => "water",
///     "horses" => 5,
///     "items" => ["house", "car", "bear"],
/// };
///
/// assert_eq!(snapshot.fetch("horses"), &json!(5));
/// assert_eq!(snapshot.fetch("items"), &json!(["house", "car", "bear"]));
/// ```
#[macro_export]
macro_rules! state {
    () => {
        $crate::core::State::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = ::serde_json::Map::new();
        $(
            entries.insert(
                ::std::string::String::from($key),
                ::serde_json::json!($value),
            );
        )+
        $crate::core::State::from(entries)
    }};
}
