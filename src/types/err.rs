//! Error types used in the library.
//!
//! The reasoning engine raises no errors of its own --- resolution on an exhausted clause sequence derives nothing further, and further passes are no-ops.
//! What remains is configuration: malformed input is reported rather than left to misbehave.

/// Noted errors when validating a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The requested dimension is outside the supported range.
    DimensionBound,

    /// The start cell is beyond the bounds of the world.
    StartBeyondBounds,

    /// The goal cell is beyond the bounds of the world.
    GoalBeyondBounds,
}
