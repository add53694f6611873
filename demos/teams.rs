//! Example: fill teams of five from a queue of party sizes.
//!
//! Run with:
//! `cargo run --example teams`

use subseq_sum::{carve_all, carve_groups, Reserved};

fn main() {
    let parties = [2, 4, 3, 1, 1, 5, 2, 3, 4];

    match carve_groups(&parties, &[5, 5], &Reserved::new()) {
        Ok(Some(teams)) => {
            for (n, team) in teams.iter().enumerate() {
                println!(
                    "match team {}: parties {:?} sizes {:?}",
                    n + 1,
                    team.indices(),
                    team.values()
                );
            }
        }
        Ok(None) => println!("not enough players for a match"),
        Err(err) => eprintln!("invalid queue: {err}"),
    }

    let carver = match carve_all(&parties, 5) {
        Ok(carver) => carver,
        Err(err) => {
            eprintln!("invalid queue: {err}");
            return;
        }
    };
    let teams: Vec<_> = carver.collect();
    println!("{} full teams can be formed from the whole queue", teams.len());
}
