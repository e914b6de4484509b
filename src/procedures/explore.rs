//! Depth-first exploration --- the policy which feeds and consumes the knowledge base.
//!
//! The policy contains no inference logic.
//! On each visit the perceived ground truth is [ingested](crate::knowledge::KnowledgeBase::ingest), a [saturation pass](crate::knowledge::KnowledgeBase::resolve) is run, and the classification grid alone decides which neighbors may be stepped to.
//! The goal check happens *before* perception: on arrival at the goal the cell is asserted safe and the descent unwinds.
//!
//! Exploration makes up to dimension² attempts over a single knowledge base, so anything learned during a failed attempt narrows the next one.
//! Descent recurses with the knowledge base held by exclusive mutable reference, and visit tracking is sized by the actual grid.

use crate::{
    config::Config,
    knowledge::KnowledgeBase,
    misc::log::targets::{self},
    reports::Report,
    structures::{cell::Cell, literal::Predicate},
    world::World,
};

/// Callback on each visited cell, after ingestion and resolution.
pub type VisitCallback = dyn FnMut(Cell, &KnowledgeBase);

/// The exploration policy for a world of some dimension.
pub struct Explorer {
    dimension: usize,

    start: Cell,

    goal: Cell,

    /// Attempts made before exploration is abandoned.
    attempt_bound: usize,

    /// Cells visited during the current attempt, row-major by x.
    visited: Vec<bool>,

    /// Visited cells are passed in, with the knowledge base as it stood on the visit.
    callback_visit: Option<Box<VisitCallback>>,
}

impl Explorer {
    /// An explorer for the world `config` describes.
    pub fn from_config(config: &Config) -> Self {
        Self {
            dimension: config.dimension,
            start: config.start,
            goal: config.goal,
            attempt_bound: config.attempt_bound(),
            visited: vec![false; config.dimension * config.dimension],
            callback_visit: None,
        }
    }

    /// Sets a callback to be made on each visited cell.
    pub fn set_callback_visit(&mut self, callback: Box<VisitCallback>) {
        self.callback_visit = Some(callback);
    }

    /// Explores `world` until the goal is reached or the attempt bound is exhausted.
    ///
    /// The knowledge base is shared across attempts, and is left holding whatever was learned regardless of the report.
    pub fn explore(&mut self, world: &World, knowledge: &mut KnowledgeBase) -> Report {
        let mut report = Report::Exhausted;

        if self.start.x >= self.dimension || self.start.y >= self.dimension {
            log::warn!(target: targets::EXPLORE, "Start beyond the world at {}", self.start);
            return report;
        }

        'attempt_loop: for attempt in 0..self.attempt_bound {
            log::info!(target: targets::EXPLORE, "Attempt {attempt} from {}", self.start);

            self.visited.fill(false);
            if self.descend(world, knowledge, self.start) {
                report = Report::GoalReached;
                break 'attempt_loop;
            }
        }

        log::info!(target: targets::EXPLORE, "Report: {report}");
        report
    }

    /// Visits `at` and descends into any unvisited neighbor believed traversable.
    fn descend(&mut self, world: &World, knowledge: &mut KnowledgeBase, at: Cell) -> bool {
        if at == self.goal {
            knowledge.ingest(at, Predicate::Safe);
            return true;
        }

        if let Some(perceived) = world.perceived(at) {
            knowledge.ingest(at, perceived);
        }
        knowledge.resolve();

        self.visited[at.x * self.dimension + at.y] = true;

        if let Some(callback) = &mut self.callback_visit {
            callback(at, knowledge);
        }

        for step in at.neighbors(self.dimension) {
            if !self.visited[step.x * self.dimension + step.y]
                && knowledge.classification(step).traversable()
                && self.descend(world, knowledge, step)
            {
                return true;
            }
        }

        false
    }
}
