//! A knowledge-based agent for wumpus-world grids.
//!
//! The agent explores a partially observable square world.
//! Each visited cell yields a percept (safe / breeze / stench), percepts are encoded as propositional clauses, and pairwise resolution over the accumulated clauses classifies unvisited cells as safe, traversable, hazardous, or unknown.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [knowledge base](knowledge::KnowledgeBase): an ordered, grow-only clause sequence paired with a monotonic classification grid.
//!
//! - The [structures] define the logical objects: [cells](structures::cell), [literals](structures::literal), and [clauses](structures::clause).
//! - [Percept ingestion](knowledge::KnowledgeBase::ingest) turns a perceived cell into clauses: the percept as a unit, mutual exclusion of the other classifications, and either unconditional neighbor safety or a hazard disjunction over suspect neighbors.
//! - [A saturation pass](knowledge::KnowledgeBase::resolve) resolves clause pairs over the growing sequence and commits positive unit resolvents to the grid.
//! - The [exploration procedure](procedures::explore) walks the world depth-first, trusting the grid and nothing else.
//! - The [world] module supplies ground truth, with hazard placement driven by an explicit seed.
//!
//! Everything outside the knowledge base is thin scaffolding; the engine is the clause representation, the encoding rules, and the saturation pass.
//!
//! # Example
//!
//! ```rust
//! use wumpus_kb::knowledge::{CellState, KnowledgeBase};
//! use wumpus_kb::structures::cell::Cell;
//! use wumpus_kb::structures::literal::Predicate;
//!
//! let mut knowledge = KnowledgeBase::new(4);
//!
//! // The start cell is asserted safe on construction.
//! assert_eq!(knowledge.classification(Cell::new(0, 0)), CellState::Safe);
//!
//! knowledge.ingest(Cell::new(0, 0), Predicate::Safe);
//! knowledge.ingest(Cell::new(1, 0), Predicate::Breeze);
//! knowledge.ingest(Cell::new(0, 1), Predicate::Safe);
//! knowledge.resolve();
//!
//! // [0,0] and [1,1] are excluded as pit hosts, so the breeze pins the pit.
//! assert_eq!(knowledge.classification(Cell::new(2, 0)), CellState::Pit);
//! assert_eq!(knowledge.classification(Cell::new(1, 1)), CellState::Traversable);
//! ```
//!
//! # Scope
//!
//! The engine is not a general-purpose satisfiability solver: it supports exactly the fixed literal vocabulary and the fixed neighbor-adjacency encoding of this domain, and the saturation pass is a single ordered scan rather than a refutation search.
//! In the same spirit, safety propagation is deliberately strong --- a safe cell marks *all* of its neighbors non-hazardous, whether or not they have been perceived.
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log] to help narrow output to relevant parts of the library.
//! No log implementation is provided; the cli initialises [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.

pub mod config;
pub mod generic;
pub mod knowledge;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
pub mod world;
