//! World generation --- the collaborator supplying ground truth to the agent.
//!
//! A world is a square grid in which every cell holds exactly one primary classification.
//! One cell holds the wumpus and one a pit; the wumpus's in-bounds neighbors are stamped with stench and the pit's with breeze, wumpus first and pit second.
//! The stamp order is observable --- a later stamp overwrites an earlier one, so a cell adjacent to both hazards reads as breeze, and a pit lands on top of a stench.
//!
//! Placement is driven by an explicit seed; the reasoning engine itself consumes no randomness.

use rand::{Rng, SeedableRng};

use crate::{
    generic::minimal_pcg::MinimalPCG32,
    misc::log::targets::{self},
    structures::{cell::Cell, literal::Predicate},
};

/// A world of cell ground truths, row-major by x.
pub struct World {
    dimension: usize,
    cells: Vec<Predicate>,
}

impl World {
    /// A world with hazards placed by the given seed.
    ///
    /// The start cell [0,0] is never a hazard, and the two hazards land on distinct cells.
    pub fn generate(dimension: usize, seed: u64) -> Self {
        if dimension < 2 {
            // Nowhere to place a hazard.
            return Self {
                dimension,
                cells: vec![Predicate::Safe; dimension * dimension],
            };
        }

        let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());
        let start = Cell::new(0, 0);

        let wumpus = loop {
            let candidate = Cell::new(rng.gen_range(0..dimension), rng.gen_range(0..dimension));
            if candidate != start {
                break candidate;
            }
        };

        let pit = loop {
            let candidate = Cell::new(rng.gen_range(0..dimension), rng.gen_range(0..dimension));
            if candidate != start && candidate != wumpus {
                break candidate;
            }
        };

        log::info!(target: targets::WORLD, "Wumpus at {wumpus}, pit at {pit}");
        Self::with_hazards(dimension, wumpus, pit)
    }

    /// A world with the wumpus and pit at fixed cells.
    ///
    /// Out-of-bounds hazard cells are ignored, leaving an entirely safe world.
    pub fn with_hazards(dimension: usize, wumpus: Cell, pit: Cell) -> Self {
        let mut world = Self {
            dimension,
            cells: vec![Predicate::Safe; dimension * dimension],
        };

        world.stamp(wumpus, Predicate::Wumpus);
        for neighbor in wumpus.neighbors(dimension) {
            world.stamp(neighbor, Predicate::Stench);
        }

        world.stamp(pit, Predicate::Pit);
        for neighbor in pit.neighbors(dimension) {
            world.stamp(neighbor, Predicate::Breeze);
        }

        world
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The ground truth of `cell`, if the cell is within the world.
    pub fn perceived(&self, cell: Cell) -> Option<Predicate> {
        self.index_of(cell).map(|index| self.cells[index])
    }

    fn stamp(&mut self, cell: Cell, truth: Predicate) {
        if let Some(index) = self.index_of(cell) {
            self.cells[index] = truth;
        }
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        match cell.x < self.dimension && cell.y < self.dimension {
            true => Some(cell.x * self.dimension + cell.y),
            false => None,
        }
    }
}

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for x in 0..self.dimension {
            for y in 0..self.dimension {
                write!(f, "{} ", self.cells[x * self.dimension + y])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
