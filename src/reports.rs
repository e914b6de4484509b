//! Details on the result of an exploration.

/// High-level reports regarding an exploration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// The agent reached the goal cell.
    GoalReached,

    /// Every permitted attempt ended without reaching the goal.
    Exhausted,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::GoalReached => write!(f, "Goal reached"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}
