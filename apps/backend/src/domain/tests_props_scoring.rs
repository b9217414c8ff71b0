//! Property tests for hole scoring and round aggregation.

use proptest::prelude::*;

use crate::domain::{score_hole, score_round, test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// One more stroke never earns more points.
    #[test]
    fn prop_stableford_non_increasing_in_gross(
        par in test_gens::par(),
        h in test_gens::playing_handicap(),
        si in test_gens::stroke_index(),
        gross in 1i32..15,
    ) {
        let better = score_hole(1, par, Some(h), Some(si), Some(gross)).unwrap();
        let worse = score_hole(1, par, Some(h), Some(si), Some(gross + 1)).unwrap();
        prop_assert!(worse.stableford <= better.stableford);
        prop_assert_eq!(worse.nett, better.nett + 1);
    }

    /// Front nine plus back nine equals the total for every measure.
    #[test]
    fn prop_halves_add_up(
        layout in test_gens::complete_layout(),
        h in test_gens::playing_handicap(),
        entries in test_gens::full_card(),
    ) {
        let s = score_round(&layout, Some(h), &entries).unwrap().summary;
        prop_assert_eq!(s.gross.front9 + s.gross.back9, s.gross.total);
        prop_assert_eq!(s.nett.front9 + s.nett.back9, s.nett.total);
        prop_assert_eq!(s.stableford.front9 + s.stableford.back9, s.stableford.total);
        // allocation sums to h, so nett trails gross by exactly h
        prop_assert_eq!(s.gross.total - s.nett.total, h);
    }

    /// Scoring the same card twice gives the same scorecard.
    #[test]
    fn prop_scoring_idempotent(
        layout in test_gens::complete_layout(),
        h in test_gens::playing_handicap(),
        entries in test_gens::full_card(),
    ) {
        let first = score_round(&layout, Some(h), &entries).unwrap();
        let second = score_round(&layout, Some(h), &entries).unwrap();
        prop_assert_eq!(first, second);
    }
}
