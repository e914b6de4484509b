//! The abstract elements of the domain, and their representation.
//!
//! - [Cells](cell) locate things in the grid world.
//! - [Literals](literal) pair a predicate over a cell with a polarity.
//! - [Clauses](clause) are collections of literals, interpreted as disjunctions.

pub mod cell;
pub mod clause;
pub mod literal;
