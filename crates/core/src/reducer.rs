//! Pure state transition contract.

/// A reducer maps `(state, action)` to the next state.
///
/// - **Total**: every action has a defined outcome; actions a reducer does not
///   understand leave the state unchanged.
/// - **Pure**: the incoming state is borrowed, never mutated. The caller swaps
///   the returned value in as a whole.
/// - **Deterministic**: equal inputs always produce equal outputs.
///
/// Reducers must not perform IO or schedule work. Anything time- or
/// rendering-related belongs to the component that owns the state.
pub trait Reducer {
    type State: Clone + core::fmt::Debug;
    type Action: Clone + core::fmt::Debug;

    /// The state a fresh container starts from (and `reset`-style actions return to).
    fn initial_state(&self) -> Self::State;

    /// Compute the next state for `action`.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Fold a sequence of actions over `state`, in order.
    fn reduce_all<'a, I>(&self, state: &Self::State, actions: I) -> Self::State
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
    {
        actions
            .into_iter()
            .fold(state.clone(), |acc, action| self.reduce(&acc, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Add(i64),
        Clear,
    }

    struct Tally;

    impl Reducer for Tally {
        type State = i64;
        type Action = Step;

        fn initial_state(&self) -> i64 {
            0
        }

        fn reduce(&self, state: &i64, action: &Step) -> i64 {
            match action {
                Step::Add(n) => state + n,
                Step::Clear => self.initial_state(),
            }
        }
    }

    #[test]
    fn reduce_all_applies_actions_in_order() {
        let actions = [Step::Add(2), Step::Add(3), Step::Clear, Step::Add(7)];
        assert_eq!(Tally.reduce_all(&0, actions.iter()), 7);
    }

    #[test]
    fn reduce_all_with_no_actions_returns_the_input() {
        assert_eq!(Tally.reduce_all(&41, core::iter::empty()), 41);
    }
}
