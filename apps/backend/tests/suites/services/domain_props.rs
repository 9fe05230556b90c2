//! Property tests for score card invariants.

use backend::domain::{standings, Hole, ScoreCard, ScoreRules, HOLE_COUNT};
use proptest::prelude::*;

use crate::common::proptest_prelude::proptest_prelude_config;

fn hole() -> impl Strategy<Value = Hole> {
    (1i64..=HOLE_COUNT as i64).prop_map(|n| Hole::new(n).expect("generated in range"))
}

fn writes() -> impl Strategy<Value = Vec<(Hole, i32)>> {
    prop::collection::vec((hole(), -10i32..=10), 0..40)
}

fn card() -> impl Strategy<Value = ScoreCard> {
    ("[A-Z][a-z]{1,8}", prop::array::uniform9(-10i32..=10))
        .prop_map(|(name, holes)| ScoreCard::from_holes(name, holes))
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn total_is_sum_after_any_writes(writes in writes()) {
        let mut card = ScoreCard::new("Alice");
        let mut shadow = [0i32; HOLE_COUNT];

        for (hole, score) in writes {
            card.set_hole(hole, score);
            shadow[usize::from(hole.number()) - 1] = score;
            prop_assert_eq!(card.total(), shadow.iter().sum::<i32>());
        }
        prop_assert_eq!(card.holes(), &shadow);
    }

    #[test]
    fn last_write_to_a_hole_wins(hole in hole(), first in -10i32..=10, second in -10i32..=10) {
        let mut card = ScoreCard::new("Alice");
        card.set_hole(hole, first);
        card.set_hole(hole, second);
        prop_assert_eq!(card.hole(hole), second);
        prop_assert_eq!(card.total(), second);
    }

    #[test]
    fn standings_are_sorted_and_stable(cards in prop::collection::vec(card(), 0..12)) {
        let sorted = standings(cards.clone());
        prop_assert_eq!(sorted.len(), cards.len());

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].total() <= pair[1].total());
        }

        // Equal totals keep their input order
        for total in sorted.iter().map(ScoreCard::total) {
            let input: Vec<_> = cards.iter().filter(|c| c.total() == total).collect();
            let output: Vec<_> = sorted.iter().filter(|c| c.total() == total).collect();
            prop_assert_eq!(input, output);
        }
    }

    #[test]
    fn strict_rules_accept_exactly_the_valid_range(h in -3i64..15, s in -20i64..20) {
        let verdict = ScoreRules::default().check_submission("Alice", h, s);
        let valid = (1..=9).contains(&h) && (-10..=10).contains(&s);
        prop_assert_eq!(matches!(verdict, Ok(Some(_))), valid);
        prop_assert_eq!(verdict.is_err(), !valid);
    }

    #[test]
    fn permissive_rules_never_reject_named_input(h in -3i64..15, s in -20i64..20) {
        let verdict = ScoreRules::permissive().check_submission("Alice", h, s);
        let valid = (1..=9).contains(&h) && (-10..=10).contains(&s);
        prop_assert!(verdict.is_ok());
        prop_assert_eq!(verdict.unwrap().is_some(), valid);
    }
}
