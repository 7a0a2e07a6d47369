//! Reusable pipelines of state transformation steps.
//!
//! [`State::then`](crate::core::State::then) composes steps inline at the
//! call site. A [`Pipeline`] packages the same steps as a value, so one
//! pipeline can be built once and run over many initial states.

use crate::core::State;

type BoxedStep = Box<dyn Fn(State) -> State + Send + Sync>;

/// An ordered sequence of `State -> State` steps with a fluent API.
///
/// Running a pipeline threads a state through every step in order, exactly
/// as the equivalent `then` chain would. The pipeline performs no error
/// handling of its own; whatever a step does is what happens.
///
/// # Example
///
/// ```rust
/// use flowstate::{Pipeline, State};
/// use serde_json::json;
///
/// let pipeline = Pipeline::new()
///     .step(|s: State| s.assign([("greeting", json!("hello"))]))
///     .step(|s: State| s.assign([("audience", json!("world"))]));
///
/// let state = pipeline.run(State::new());
///
/// assert_eq!(state.fetch("greeting"), &json!("hello"));
/// assert_eq!(state.fetch("audience"), &json!("world"));
/// ```
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<BoxedStep>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to the end of the pipeline.
    pub fn step<F>(mut self, step: F) -> Self
    where
        F: Fn(State) -> State + Send + Sync + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Thread `initial` through every step in order.
    ///
    /// An empty pipeline returns `initial` unchanged. The pipeline itself is
    /// only borrowed, so it can be run again with a different initial state.
    pub fn run(&self, initial: State) -> State {
        self.steps.iter().fold(initial, |state, step| step(state))
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_pipeline_returns_initial_state() {
        let pipeline = Pipeline::new();
        let initial = State::from_iter([("a", json!(1))]);

        assert!(pipeline.is_empty());
        assert_eq!(pipeline.run(initial.clone()), initial);
    }

    #[test]
    fn steps_run_in_insertion_order() {
        let pipeline = Pipeline::new()
            .step(|s: State| s.assign([("order", json!("first"))]))
            .step(|s: State| s.assign([("order", json!("second"))]));

        let state = pipeline.run(State::new());

        assert_eq!(pipeline.len(), 2);
        assert_eq!(state.fetch("order"), &json!("second"));
    }

    #[test]
    fn later_steps_see_earlier_output() {
        let pipeline = Pipeline::new()
            .step(|s: State| s.assign([("x", json!(1))]))
            .step(|s: State| {
                let next = s.fetch_or("x", 0).as_i64().unwrap_or(0) + 1;
                s.assign([("y", json!(next))])
            });

        let state = pipeline.run(State::new());

        assert_eq!(state.fetch("y"), &json!(2));
    }

    #[test]
    fn pipeline_is_reusable_across_initial_states() {
        let pipeline =
            Pipeline::new().step(|s: State| s.assign([("stamped", json!(true))]));

        let a = pipeline.run(State::from_iter([("id", json!("a"))]));
        let b = pipeline.run(State::from_iter([("id", json!("b"))]));

        assert_eq!(a.fetch("id"), &json!("a"));
        assert_eq!(b.fetch("id"), &json!("b"));
        assert_eq!(a.fetch("stamped"), &json!(true));
        assert_eq!(b.fetch("stamped"), &json!(true));
    }

    #[test]
    fn pipeline_matches_equivalent_then_chain() {
        fn add_x(state: State) -> State {
            state.assign([("x", json!(1))])
        }

        fn drop_seed(state: State) -> State {
            state.discard(["seed"])
        }

        let pipeline = Pipeline::new().step(add_x).step(drop_seed);
        let initial = State::from_iter([("seed", json!("s"))]);

        let chained = initial.clone().then(add_x).then(drop_seed);

        assert_eq!(pipeline.run(initial), chained);
    }
}
