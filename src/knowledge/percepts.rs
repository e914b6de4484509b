//! Percept ingestion --- the rules which turn a perceived cell into clauses.
//!
//! Each of the three informative percepts asserts the perceived classification as a unit clause, denies every other primary classification at the cell (a cell has exactly one), and records the classification in the grid.
//! The percepts differ in what they say about the cell's neighbors:
//!
//! - A safe cell marks every in-bounds neighbor walkable, unconditionally.
//!   Safety propagates outward whether or not the neighbor has ever been perceived.
//! - A breeze (resp. stench) asserts at least one in-bounds neighbor *not already believed safe* holds a pit (resp. the wumpus).
//!   Neighbors proven safe are left out of the disjunction, as safety overrides hazard membership.
//!
//! Hazard ground truths carry no percept, so ingesting them encodes nothing.

use crate::{
    knowledge::{CellState, KnowledgeBase},
    misc::log::targets::{self},
    structures::{
        cell::Cell,
        clause::CClause,
        literal::{CLiteral, Predicate},
    },
};

/// The iteration order for mutual-exclusion units.
///
/// Fixed, as the clause sequence (and hence saturation order) is observable.
const EXCLUSION_ORDER: [Predicate; 5] = [
    Predicate::Wumpus,
    Predicate::Pit,
    Predicate::Safe,
    Predicate::Stench,
    Predicate::Breeze,
];

impl KnowledgeBase {
    /// Folds a percept into the knowledge base.
    ///
    /// `perceived` is the ground truth of the visited cell; only the three non-hazard classifications inform the encoding.
    pub fn ingest(&mut self, cell: Cell, perceived: Predicate) {
        if self.index_of(cell).is_none() {
            log::warn!(target: targets::ENCODING, "Percept beyond the grid at {cell}");
            return;
        }

        log::info!(target: targets::ENCODING, "{perceived} perceived at {cell}");

        match perceived {
            Predicate::Safe => self.encode_safe(cell),
            Predicate::Breeze => self.encode_hazard_adjacency(cell, perceived, Predicate::Pit),
            Predicate::Stench => self.encode_hazard_adjacency(cell, perceived, Predicate::Wumpus),

            // Stepping onto a hazard is not a percept.
            Predicate::Wumpus | Predicate::Pit => {}
        }
    }

    /// The cell is safe, and so are its surroundings.
    fn encode_safe(&mut self, cell: Cell) {
        self.add_clause(vec![CLiteral::new(Predicate::Safe, cell, true)]);
        self.exclude_others(cell, Predicate::Safe);
        self.commit(cell, CellState::Safe);

        for neighbor in cell.neighbors(self.dimension) {
            self.encode_walkable(neighbor);
        }
    }

    /// The cell holds `percept`, and at least one neighbor not already believed safe holds `hazard`.
    fn encode_hazard_adjacency(&mut self, cell: Cell, percept: Predicate, hazard: Predicate) {
        self.add_clause(vec![CLiteral::new(percept, cell, true)]);
        self.exclude_others(cell, percept);
        self.commit(cell, percept.into());

        let mut suspects: CClause = Vec::default();
        for neighbor in cell.neighbors(self.dimension) {
            if self.classification(neighbor) != CellState::Safe {
                suspects.push(CLiteral::new(hazard, neighbor, true));
            }
        }

        // With every neighbor proven safe the disjunction is empty, and add_clause discards it.
        self.add_clause(suspects);
    }

    /// The cell has one of the three non-hazard classifications, though which is not settled.
    fn encode_walkable(&mut self, cell: Cell) {
        self.add_clause(vec![
            CLiteral::new(Predicate::Safe, cell, true),
            CLiteral::new(Predicate::Breeze, cell, true),
            CLiteral::new(Predicate::Stench, cell, true),
        ]);
        self.add_clause(vec![CLiteral::new(Predicate::Pit, cell, false)]);
        self.add_clause(vec![CLiteral::new(Predicate::Wumpus, cell, false)]);

        self.commit(cell, CellState::Traversable);
    }

    /// Denies every primary classification at `cell` other than `except`.
    fn exclude_others(&mut self, cell: Cell, except: Predicate) {
        for predicate in EXCLUSION_ORDER {
            if predicate != except {
                self.add_clause(vec![CLiteral::new(predicate, cell, false)]);
            }
        }
    }
}
