//! Clauses, aka. collections of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! The vector is read as an unordered collection: clause equality is bag equality, so two clauses match regardless of the order literals were collected in.
//!
//! ```rust
//! # use wumpus_kb::structures::cell::Cell;
//! # use wumpus_kb::structures::clause::{CClause, Clause};
//! # use wumpus_kb::structures::literal::{CLiteral, Predicate};
//! let pit_here = CLiteral::new(Predicate::Pit, Cell::new(1, 2), true);
//! let pit_there = CLiteral::new(Predicate::Pit, Cell::new(2, 1), true);
//!
//! let clause: CClause = vec![pit_here, pit_there];
//! let reordered: CClause = vec![pit_there, pit_here];
//!
//! assert!(clause.matches(&reordered));
//! assert_eq!(clause.resolvent(&vec![-pit_here]), Some(vec![pit_there]));
//! ```
//!
//! - The empty clause is used as a sentinel for 'no information': a simplified tautology, or a resolvent with nothing left to say.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::literal::CLiteral;

/// The canonical implementation of a clause as a vector of literals.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the literals in the clause, in collection order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The literal of the clause, if the clause is a unit clause.
    fn unit_literal(&self) -> Option<CLiteral>;

    /// Simplifies the clause in place.
    ///
    /// Duplicate literals are removed on sight, and if any complementary pair is found the clause is cleared --- a disjunction containing *p* ∨ ¬*p* is always true and carries no information.
    /// Simplification is idempotent.
    fn simplify(&mut self);

    /// Whether the clause and `other` contain the same literals, as bags.
    ///
    /// Matching is by removal rather than set comparison, as the representation tolerates transient duplicates prior to simplification.
    fn matches(&self, other: &Self) -> bool;

    /// The resolvent of the clause with `other` on the first complementary pair, if one exists.
    ///
    /// The pair is located by scanning the literals of the clause (outer) against the literals of `other` (inner) in collection order.
    /// The resolvent is the union of both clauses with the pair removed, simplified.
    /// So, `Some` of an empty clause signals a tautological resolvent, while `None` signals the pair admits no resolution at all.
    fn resolvent(&self, other: &Self) -> Option<CClause>;
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ∨ ")
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn unit_literal(&self) -> Option<CLiteral> {
        match self.len() {
            1 => Some(self[0]),
            _ => None,
        }
    }

    fn simplify(&mut self) {
        let mut i = 0;
        while i < self.len() {
            let mut j = i + 1;
            while j < self.len() {
                if self[i] == self[j] {
                    self.remove(j);
                } else if self[i].complements(&self[j]) {
                    self.clear();
                    return;
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
    }

    fn matches(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut unmatched = other.clone();
        'literal_scan: for literal in self {
            for index in 0..unmatched.len() {
                if unmatched[index] == *literal {
                    unmatched.swap_remove(index);
                    continue 'literal_scan;
                }
            }
            return false;
        }

        unmatched.is_empty()
    }

    fn resolvent(&self, other: &Self) -> Option<CClause> {
        for (i, left) in self.iter().enumerate() {
            for (j, right) in other.iter().enumerate() {
                if left.complements(right) {
                    let mut resolved: CClause = Vec::with_capacity(self.len() + other.len() - 2);

                    resolved.extend(self.iter().take(i));
                    resolved.extend(self.iter().skip(i + 1));
                    resolved.extend(other.iter().take(j));
                    resolved.extend(other.iter().skip(j + 1));

                    resolved.simplify();
                    return Some(resolved);
                }
            }
        }

        None
    }
}
