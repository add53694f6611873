#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use subseq_sum::{carve_all, find_pick, Reserved};

fn random_queue(rng: &mut StdRng, len: usize, max_weight: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(1..=max_weight)).collect()
}

#[test]
fn heavy_long_random_queue() {
    let mut rng = StdRng::seed_from_u64(123);
    let queue = random_queue(&mut rng, 500_000, 9);
    let pick = find_pick(&queue, 50, &Reserved::new()).unwrap().unwrap();
    assert_eq!(pick.sum(), 50);
    assert!(pick.indices().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn heavy_deep_single_match() {
    // Every element is needed: the trail grows to the full queue length.
    let len = 1_000_000;
    let queue = vec![1i64; len];
    let pick = find_pick(&queue, len as i64, &Reserved::new()).unwrap().unwrap();
    assert_eq!(pick.len(), len);
}

#[test]
fn heavy_carve_random_queue() {
    let mut rng = StdRng::seed_from_u64(7);
    let queue = random_queue(&mut rng, 5_000, 5);
    let mut used = vec![false; queue.len()];
    let mut groups = 0usize;
    for pick in carve_all(&queue, 5).unwrap() {
        assert_eq!(pick.sum(), 5);
        for &i in pick.indices() {
            assert!(!used[i]);
            used[i] = true;
        }
        groups += 1;
    }
    let total: i64 = queue.iter().sum();
    assert!(groups as i64 <= total / 5);
    assert!(groups > 0);
}
