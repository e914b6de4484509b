//! The saturation pass --- pairwise resolution over the clause sequence.
//!
//! A pass is a doubly-nested index scan: every clause is resolved against every later clause, and the sequence length is re-read on each step.
//! So, a resolvent appended mid-pass is itself scanned against later in the same pass, and the pass ends once the indices exhaust the sequence as it stood during traversal --- a single pass, not a fixed-point loop.
//!
//! A pass is quadratic in the length of the sequence, and appended resolvents push the effective cost higher.
//! This is an accepted property of the design: the scan order determines which facts a single pass commits, and downstream behavior depends on it, so the scan is not replaced by a cheaper worklist scheme.

use crate::{
    knowledge::KnowledgeBase,
    misc::log::targets::{self},
    structures::clause::Clause,
};

impl KnowledgeBase {
    /// One saturation pass over the current clause sequence.
    ///
    /// Every resolvent which is not a tautology is offered to the sequence, and every *positive* unit resolvent is committed to the classification grid --- this is how the engine concludes things like 'the pit is at [3,2]' without hazard-specific logic.
    /// Negative unit resolvents record exclusions as clauses, but set no state.
    pub fn resolve(&mut self) {
        let initial = self.clauses.len();

        let mut i = 0;
        while i < self.clauses.len() {
            let mut j = i + 1;
            while j < self.clauses.len() {
                if let Some(resolved) = self.clauses[i].resolvent(&self.clauses[j]) {
                    if resolved.is_empty() {
                        // Tautology: nothing can be concluded from the pair.
                        j += 1;
                        continue;
                    }

                    let inference = resolved.unit_literal();
                    self.add_clause(resolved);

                    if let Some(literal) = inference {
                        if literal.polarity() {
                            log::info!(target: targets::RESOLUTION, "Derived {literal}");
                            self.commit(literal.cell(), literal.predicate().into());
                        }
                    }
                }

                j += 1;
            }
            i += 1;
        }

        log::info!(
            target: targets::RESOLUTION,
            "Pass extended {initial} clauses to {}",
            self.clauses.len()
        );
    }
}
