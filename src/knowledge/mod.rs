//! The knowledge base --- accumulated clauses, and the believed state of every cell.
//!
//! A knowledge base is the conjunction of an ordered sequence of [clauses](crate::structures::clause) together with a classification grid recording what is currently believed about each cell of the world.
//!
//! The clause sequence only grows.
//! Clauses are never removed or revised in place, and the sequence order is observable: the [saturation pass](KnowledgeBase::resolve) scans the sequence by index, so two knowledge bases which agree on the sequence agree on everything a pass derives.
//!
//! The grid refines monotonically.
//! States form a lattice of specificity with `Unknown` at the bottom, `Traversable` above it, and the five specific classifications at the top; a commit which would weaken a cell's entry is ignored.
//!
//! A knowledge base is intended to live across repeated traversal attempts of the same world, so knowledge compounds --- the agent does not forget.

mod percepts;
mod resolution;

use crate::{
    misc::log::targets::{self},
    structures::{
        cell::Cell,
        clause::{CClause, Clause},
        literal::{CLiteral, Predicate},
    },
};

/// The believed state of a cell, as recorded in the classification grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Nothing is believed about the cell.
    Unknown,

    /// The cell is believed free of hazards, though which of the three non-hazard classifications it has is not settled.
    Traversable,

    Safe,
    Breeze,
    Stench,
    Wumpus,
    Pit,
}

impl CellState {
    /// The single-character code used by the textual trace.
    pub fn as_char(self) -> char {
        match self {
            Self::Unknown => 'U',
            Self::Traversable => 'T',
            Self::Safe => 'S',
            Self::Breeze => 'B',
            Self::Stench => 'R',
            Self::Wumpus => 'W',
            Self::Pit => 'P',
        }
    }

    /// Whether a cell in the state may be stepped on.
    pub fn traversable(self) -> bool {
        matches!(
            self,
            Self::Traversable | Self::Safe | Self::Breeze | Self::Stench
        )
    }
}

impl From<Predicate> for CellState {
    fn from(predicate: Predicate) -> Self {
        match predicate {
            Predicate::Safe => Self::Safe,
            Predicate::Breeze => Self::Breeze,
            Predicate::Stench => Self::Stench,
            Predicate::Wumpus => Self::Wumpus,
            Predicate::Pit => Self::Pit,
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ok results when adding a clause to the knowledge base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was appended to the sequence.
    Added,

    /// Some clause in the sequence already matches the clause.
    Known,

    /// The clause simplified to the empty clause and carries no information.
    Tautology,
}

/// A knowledge base over a square world of some dimension.
pub struct KnowledgeBase {
    /// The dimension of the world the knowledge base describes.
    dimension: usize,

    /// The clause sequence --- the conjunction.
    clauses: Vec<CClause>,

    /// The classification grid, row-major by x.
    states: Vec<CellState>,
}

impl KnowledgeBase {
    /// A fresh knowledge base for a `dimension` × `dimension` world.
    ///
    /// The start cell [0,0] is asserted safe as a unit clause and classified accordingly, independent of any percept.
    pub fn new(dimension: usize) -> Self {
        let mut knowledge = Self {
            dimension,
            clauses: Vec::default(),
            states: vec![CellState::Unknown; dimension * dimension],
        };

        let start = Cell::new(0, 0);
        knowledge
            .clauses
            .push(vec![CLiteral::new(Predicate::Safe, start, true)]);
        knowledge.commit(start, CellState::Safe);

        knowledge
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The number of clauses in the sequence.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the clause sequence, in sequence order.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// The current classification of `cell`, with `Unknown` for any cell beyond the grid.
    pub fn classification(&self, cell: Cell) -> CellState {
        match self.index_of(cell) {
            Some(index) => self.states[index],
            None => CellState::Unknown,
        }
    }

    /// Appends `clause` to the sequence, unless it is already known or simplifies to nothing.
    ///
    /// The clause is simplified first, so a tautology (or an empty disjunction) is discarded rather than stored.
    pub fn add_clause(&mut self, clause: CClause) -> ClauseOk {
        let mut clause = clause;
        clause.simplify();

        if clause.is_empty() {
            return ClauseOk::Tautology;
        }

        if self.clauses.iter().any(|known| known.matches(&clause)) {
            return ClauseOk::Known;
        }

        log::trace!(target: targets::KNOWLEDGE, "Noted: {}", clause.as_string());
        self.clauses.push(clause);
        ClauseOk::Added
    }

    /// A textual dump of the classification grid, one x-row per line.
    pub fn state_string(&self) -> String {
        let mut the_string = String::default();

        for x in 0..self.dimension {
            for y in 0..self.dimension {
                the_string.push(self.states[x * self.dimension + y].as_char());
                the_string.push(' ');
            }
            the_string.push('\n');
        }

        the_string
    }

    /// Records `state` for `cell`, if doing so refines the grid.
    ///
    /// `Unknown` accepts any state, `Traversable` accepts any of the five specific states, and a specific state is never revised.
    fn commit(&mut self, cell: Cell, state: CellState) {
        let Some(index) = self.index_of(cell) else {
            return;
        };

        let refined = match self.states[index] {
            CellState::Unknown => state != CellState::Unknown,
            CellState::Traversable => {
                !matches!(state, CellState::Unknown | CellState::Traversable)
            }
            _ => false,
        };

        if refined {
            log::trace!(target: targets::KNOWLEDGE, "{cell} classified {state}");
            self.states[index] = state;
        }
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        match cell.x < self.dimension && cell.y < self.dimension {
            true => Some(cell.x * self.dimension + cell.y),
            false => None,
        }
    }
}
