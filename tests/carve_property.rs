use std::collections::BTreeSet;

use proptest::prelude::*;
use subseq_sum::{carve_all, carve_groups, find_pick, Carver, Pick, Reserved};

proptest! {
    #[test]
    fn carved_groups_are_disjoint_and_exact(
        queue in prop::collection::vec(1i64..8, 0..30),
        targets in prop::collection::vec(1i64..10, 0..5),
    ) {
        if let Some(picks) = carve_groups(&queue, &targets, &Reserved::new()).unwrap() {
            prop_assert_eq!(picks.len(), targets.len());
            let mut seen = BTreeSet::new();
            for (pick, &target) in picks.iter().zip(&targets) {
                prop_assert_eq!(pick.sum(), target);
                for (&v, &i) in pick.values().iter().zip(pick.indices()) {
                    prop_assert_eq!(queue[i], v);
                    prop_assert!(seen.insert(i), "position {} used twice", i);
                }
            }
        }
    }

    #[test]
    fn carver_matches_repeated_reserved_search(
        queue in prop::collection::vec(1i64..8, 0..25),
        target in 1i64..10,
    ) {
        let carved: Vec<_> = carve_all(&queue, target).unwrap().collect();

        let mut reserved = Reserved::new();
        let mut expected = Vec::new();
        while let Some(pick) = find_pick(&queue, target, &reserved).unwrap() {
            reserved.extend_from_pick(&pick);
            expected.push(pick);
        }
        prop_assert_eq!(carved, expected);
    }
}

#[test]
fn teams_from_party_sizes() {
    // Parties of 1-5 players queueing for three teams of five.
    let queue = [2, 4, 3, 1, 1, 5, 2, 3];
    let teams = carve_groups(&queue, &[5, 5, 5], &Reserved::new())
        .unwrap()
        .unwrap();
    let indices: Vec<_> = teams.iter().map(|t| t.indices().to_vec()).collect();
    assert_eq!(indices, vec![vec![0, 2], vec![1, 3], vec![5]]);
}

#[test]
fn carver_respects_initial_reservations() {
    let queue = [5, 5, 5];
    let carver = Carver::with_reserved(&queue, 5, &Reserved::from([1])).unwrap();
    let indices: Vec<_> = carver.map(Pick::into_indices).collect();
    assert_eq!(indices, vec![vec![0], vec![2]]);
}
