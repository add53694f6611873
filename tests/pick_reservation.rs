use subseq_sum::{find_pick, Reserved};

#[test]
fn reserving_a_pick_only_reserves_searched_positions() {
    let queue = [99, 2, 3];
    let pick = find_pick(&queue, 5, &Reserved::new()).unwrap().unwrap();
    let mut reserved = Reserved::new();
    reserved.extend_from_pick(&pick);
    assert_eq!(reserved.iter().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(pick.values(), &[2, 3]);
    assert_eq!(pick.len(), pick.values().len());
}
