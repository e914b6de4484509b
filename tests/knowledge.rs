use wumpus_kb::{
    knowledge::{CellState, ClauseOk, KnowledgeBase},
    structures::{
        cell::Cell,
        clause::Clause,
        literal::{CLiteral, Predicate},
    },
};

mod bootstrap {
    use super::*;

    #[test]
    fn start_cell_is_safe() {
        let knowledge = KnowledgeBase::new(4);

        assert_eq!(knowledge.dimension(), 4);
        assert_eq!(knowledge.classification(Cell::new(0, 0)), CellState::Safe);
        assert_eq!(knowledge.clause_count(), 1);

        assert_eq!(knowledge.state_string().lines().next(), Some("S U U U "));
    }

    #[test]
    fn everything_else_is_unknown() {
        let knowledge = KnowledgeBase::new(4);

        for x in 0..4 {
            for y in 0..4 {
                if (x, y) != (0, 0) {
                    assert_eq!(
                        knowledge.classification(Cell::new(x, y)),
                        CellState::Unknown
                    );
                }
            }
        }
    }
}

mod ingestion {
    use super::*;

    #[test]
    fn safety_propagates_to_neighbors() {
        let mut knowledge = KnowledgeBase::new(4);
        knowledge.ingest(Cell::new(0, 0), Predicate::Safe);

        assert_eq!(
            knowledge.classification(Cell::new(1, 0)),
            CellState::Traversable
        );
        assert_eq!(
            knowledge.classification(Cell::new(0, 1)),
            CellState::Traversable
        );
        assert_eq!(
            knowledge.classification(Cell::new(1, 1)),
            CellState::Unknown
        );
    }

    #[test]
    fn repeated_percepts_add_nothing() {
        let mut knowledge = KnowledgeBase::new(4);

        knowledge.ingest(Cell::new(0, 0), Predicate::Safe);
        let after_first = knowledge.clause_count();

        knowledge.ingest(Cell::new(0, 0), Predicate::Safe);
        assert_eq!(knowledge.clause_count(), after_first);

        // And no pair of stored clauses matches: the sequence is free of logical duplicates.
        let stored: Vec<_> = knowledge.clauses().collect();
        for (index, clause) in stored.iter().enumerate() {
            for other in stored.iter().skip(index + 1) {
                assert!(!clause.matches(other));
            }
        }
    }

    #[test]
    fn duplicate_clauses_are_known() {
        let mut knowledge = KnowledgeBase::new(4);

        let bootstrap = vec![CLiteral::new(Predicate::Safe, Cell::new(0, 0), true)];
        assert_eq!(knowledge.add_clause(bootstrap), ClauseOk::Known);

        let fresh = vec![CLiteral::new(Predicate::Pit, Cell::new(2, 2), false)];
        assert_eq!(knowledge.add_clause(fresh), ClauseOk::Added);
    }

    #[test]
    fn tautologies_are_discarded() {
        let mut knowledge = KnowledgeBase::new(4);
        let wumpus_there = CLiteral::new(Predicate::Wumpus, Cell::new(2, 2), true);

        assert_eq!(
            knowledge.add_clause(vec![wumpus_there, -wumpus_there]),
            ClauseOk::Tautology
        );
        assert_eq!(knowledge.clause_count(), 1);
    }

    #[test]
    fn hazard_ground_truths_are_inert() {
        let mut knowledge = KnowledgeBase::new(4);

        knowledge.ingest(Cell::new(1, 1), Predicate::Pit);
        knowledge.ingest(Cell::new(2, 2), Predicate::Wumpus);

        assert_eq!(knowledge.clause_count(), 1);
        assert_eq!(
            knowledge.classification(Cell::new(1, 1)),
            CellState::Unknown
        );
    }

    #[test]
    fn percepts_beyond_the_grid_are_ignored() {
        let mut knowledge = KnowledgeBase::new(4);

        knowledge.ingest(Cell::new(9, 9), Predicate::Safe);

        assert_eq!(knowledge.clause_count(), 1);
        assert_eq!(
            knowledge.classification(Cell::new(9, 9)),
            CellState::Unknown
        );
    }
}

mod saturation {
    use super::*;

    /// A breeze at [1,0] with [0,0] and [1,1] ruled out leaves [2,0] as the only pit host.
    #[test]
    fn a_lone_suspect_is_committed() {
        let mut knowledge = KnowledgeBase::new(4);

        knowledge.ingest(Cell::new(0, 0), Predicate::Safe);
        knowledge.ingest(Cell::new(1, 0), Predicate::Breeze);
        knowledge.ingest(Cell::new(0, 1), Predicate::Safe);
        knowledge.resolve();

        assert_eq!(knowledge.classification(Cell::new(2, 0)), CellState::Pit);
        assert_eq!(
            knowledge.classification(Cell::new(1, 1)),
            CellState::Traversable
        );
    }

    #[test]
    fn committed_hazards_are_terminal() {
        let mut knowledge = KnowledgeBase::new(4);

        knowledge.ingest(Cell::new(0, 0), Predicate::Safe);
        knowledge.ingest(Cell::new(1, 0), Predicate::Breeze);
        knowledge.ingest(Cell::new(0, 1), Predicate::Safe);
        knowledge.resolve();
        assert_eq!(knowledge.classification(Cell::new(2, 0)), CellState::Pit);

        // Safety at [2,1] marks its neighbors walkable, but the pit at [2,0] stands.
        knowledge.ingest(Cell::new(2, 1), Predicate::Safe);
        knowledge.resolve();

        assert_eq!(knowledge.classification(Cell::new(2, 0)), CellState::Pit);
    }

    #[test]
    fn contradicted_percepts_never_weaken_the_grid() {
        let mut knowledge = KnowledgeBase::new(4);

        // The bootstrap holds [0,0] safe; a breeze percept there is recorded as clauses
        // but the classification stands, and the S/¬S resolvent is discarded quietly.
        knowledge.ingest(Cell::new(0, 0), Predicate::Breeze);
        knowledge.resolve();

        assert_eq!(knowledge.classification(Cell::new(0, 0)), CellState::Safe);
    }

    #[test]
    fn exhausted_sequences_resolve_to_no_ops() {
        let mut knowledge = KnowledgeBase::new(4);

        knowledge.ingest(Cell::new(0, 0), Predicate::Safe);
        knowledge.ingest(Cell::new(1, 0), Predicate::Breeze);
        knowledge.ingest(Cell::new(0, 1), Predicate::Safe);

        knowledge.resolve();
        let settled = knowledge.clause_count();

        knowledge.resolve();
        assert_eq!(knowledge.clause_count(), settled);
    }
}
