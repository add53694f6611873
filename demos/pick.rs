//! Example: first subsequence summing to a target.
//!
//! Run with:
//! `cargo run --example pick`

use subseq_sum::{find_pick, Reserved, DEFAULT_TARGET};

fn main() {
    let queue = [1, 1, 2, 1, 1, 5];

    match find_pick(&queue, DEFAULT_TARGET, &Reserved::new()) {
        Ok(Some(pick)) => {
            println!("values:  {:?}", pick.values());
            println!("indices: {:?}", pick.indices());
            println!("{}", render(&queue, pick.indices()));
        }
        Ok(None) => println!("no subsequence sums to {DEFAULT_TARGET}"),
        Err(err) => eprintln!("invalid input: {err}"),
    }
}

/// Underline the chosen positions.
fn render(queue: &[i64], indices: &[usize]) -> String {
    let cells: Vec<String> = queue.iter().map(|w| format!("{w:>3}")).collect();
    let marks: Vec<&str> = (0..queue.len())
        .map(|i| if indices.contains(&i) { "  -" } else { "   " })
        .collect();
    format!("{}\n{}", cells.join(""), marks.join(""))
}
