use std::env;
use std::time::{Duration, Instant};

use subseq_sum::{carve_all, Finder, Pick, PickQueue};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Longest queue whose empty result is confirmed by enumerating subsets.
const MAX_ENUMERATION: usize = 24;

fn main() {
    let enumerate_up_to = match parse_args(env::args().skip(1)) {
        Ok(limit) => limit,
        Err(err) => {
            eprintln!("pick_scan: {err}");
            print_usage();
            std::process::exit(2);
        }
    };

    let mut scan = Scan::new(enumerate_up_to);

    eprintln!("pick_scan: random queues, capacity 50");
    for len in [16, 256, 4096, 65536, 1 << 20] {
        scan.single("random", cycling_weights(len, 9), 50);
    }

    eprintln!("pick_scan: even weights, odd capacity");
    for len in [8, 12, 16, 20, 40, 80] {
        let queue = (0..len).map(|i| 2 + 2 * (i as i64 % 3)).collect();
        scan.single("unsatisfiable", queue, 7);
    }

    eprintln!("pick_scan: every element needed");
    for len in [1_000, 10_000, 100_000, 1_000_000] {
        scan.single("deep_trail", vec![1; len], len as i64);
    }

    eprintln!("pick_scan: teams of five from party sizes");
    for len in [100, 1_000, 5_000] {
        scan.carve(cycling_parties(len));
        scan.drain(cycling_parties(len));
    }

    let failed = scan.report();
    if failed > 0 {
        eprintln!("pick_scan: {failed} run(s) failed");
        std::process::exit(1);
    }
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<usize, String> {
    let mut limit = 20;
    while let Some(arg) = args.next() {
        let value = match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "--enumerate-up-to" => args
                .next()
                .ok_or("missing value after --enumerate-up-to")?,
            other => match other.strip_prefix("--enumerate-up-to=") {
                Some(v) => v.to_string(),
                None => return Err(format!("unrecognized argument '{other}'")),
            },
        };
        limit = value
            .parse::<usize>()
            .ok()
            .filter(|&n| n <= MAX_ENUMERATION)
            .ok_or_else(|| format!("--enumerate-up-to takes 0..={MAX_ENUMERATION}"))?;
    }
    Ok(limit)
}

fn print_usage() {
    println!(
        "\
Usage: cargo run --bin pick_scan [-- --enumerate-up-to <N>]

Runs the finder and the carving queue over generated inputs and writes one
CSV row per run to stdout. Every pick is checked against its queue; an empty
result is confirmed by enumerating all subsets when the queue has at most N
elements (default 20, at most {MAX_ENUMERATION})."
    );
}

/// What a run established about its result.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Check {
    Valid,
    ConfirmedEmpty,
    Unconfirmed,
    Broken(String),
}

impl Check {
    fn label(&self) -> &'static str {
        match self {
            Check::Valid => "valid",
            Check::ConfirmedEmpty => "confirmed_empty",
            Check::Unconfirmed => "unconfirmed",
            Check::Broken(_) => "broken",
        }
    }
}

struct Run {
    scenario: &'static str,
    len: usize,
    groups: usize,
    elapsed: Duration,
    rss_delta_kib: u64,
    check: Check,
}

struct Scan {
    sys: System,
    enumerate_up_to: usize,
    runs: Vec<Run>,
}

impl Scan {
    fn new(enumerate_up_to: usize) -> Self {
        Self {
            sys: System::new(),
            enumerate_up_to,
            runs: Vec::new(),
        }
    }

    fn timed<F>(&mut self, scenario: &'static str, len: usize, work: F)
    where
        F: FnOnce() -> (usize, Check),
    {
        let before = rss_kib(&mut self.sys);
        let start = Instant::now();
        let (groups, check) = work();
        let elapsed = start.elapsed();
        let rss_delta_kib = rss_kib(&mut self.sys).saturating_sub(before);
        eprintln!(
            "  {scenario:<14} len={len:<8} groups={groups:<5} {:>9.3}s  {}",
            elapsed.as_secs_f64(),
            check.label()
        );
        self.runs.push(Run {
            scenario,
            len,
            groups,
            elapsed,
            rss_delta_kib,
            check,
        });
    }

    /// One search; an empty result is checked by enumeration when small.
    fn single(&mut self, scenario: &'static str, queue: Vec<i64>, capacity: i64) {
        let limit = self.enumerate_up_to;
        self.timed(scenario, queue.len(), || {
            let pick = match Finder::with_target(&queue, capacity) {
                Ok(finder) => finder.run(),
                Err(err) => return (0, Check::Broken(err.to_string())),
            };
            match pick {
                Some(pick) => (1, validate(&queue, capacity, &pick)),
                None if queue.len() > limit => (0, Check::Unconfirmed),
                None if any_subset_sums_to(&queue, capacity) => {
                    (0, Check::Broken("a subset sums to the capacity".to_string()))
                }
                None => (0, Check::ConfirmedEmpty),
            }
        });
    }

    /// Carve teams of five until none remains; groups must not share positions.
    fn carve(&mut self, queue: Vec<i64>) {
        self.timed("carve_all", queue.len(), || {
            let carver = match carve_all(&queue, 5) {
                Ok(carver) => carver,
                Err(err) => return (0, Check::Broken(err.to_string())),
            };
            let mut owner = vec![None; queue.len()];
            let mut groups = 0;
            for pick in carver {
                if let Check::Broken(why) = validate(&queue, 5, &pick) {
                    return (groups, Check::Broken(why));
                }
                for &i in pick.indices() {
                    if let Some(first) = owner[i].replace(groups) {
                        let why = format!("position {i} in groups {first} and {groups}");
                        return (groups, Check::Broken(why));
                    }
                }
                groups += 1;
            }
            (groups, Check::Valid)
        });
    }

    /// Take one team at a time from an owning queue until it runs dry.
    fn drain(&mut self, parties: Vec<i64>) {
        let len = parties.len();
        let total: i64 = parties.iter().sum();
        self.timed("queue_drain", len, || {
            let mut queue = PickQueue::new();
            for (n, &size) in parties.iter().enumerate() {
                let pushed = if n % 10 == 0 {
                    queue.push_priority(size)
                } else {
                    queue.push(size)
                };
                if let Err(err) = pushed {
                    return (0, Check::Broken(err.to_string()));
                }
            }
            let mut groups = 0usize;
            loop {
                match queue.take(&[5]) {
                    Ok(Some(_)) => groups += 1,
                    Ok(None) => break,
                    Err(err) => return (groups, Check::Broken(err.to_string())),
                }
            }
            let expected_left = total - 5 * groups as i64;
            if queue.total() != expected_left {
                let why = format!("{} left in queue, expected {expected_left}", queue.total());
                return (groups, Check::Broken(why));
            }
            (groups, Check::Valid)
        });
    }

    /// Write the CSV table and return the number of broken runs.
    fn report(&self) -> usize {
        println!("scenario,len,groups,wall_s,rss_delta_kib,check,detail");
        for run in &self.runs {
            let detail = match &run.check {
                Check::Broken(why) => csv_field(why),
                _ => String::new(),
            };
            println!(
                "{},{},{},{:.3},{},{},{}",
                run.scenario,
                run.len,
                run.groups,
                run.elapsed.as_secs_f64(),
                run.rss_delta_kib,
                run.check.label(),
                detail
            );
        }
        self.runs
            .iter()
            .filter(|run| matches!(run.check, Check::Broken(_)))
            .count()
    }
}

/// Order, alignment with the queue, prefix bound and exact sum.
fn validate(queue: &[i64], capacity: i64, pick: &Pick) -> Check {
    if pick.indices().windows(2).any(|w| w[0] >= w[1]) {
        return Check::Broken("positions not strictly increasing".to_string());
    }
    let mut sum = 0i64;
    for (&value, &idx) in pick.values().iter().zip(pick.indices()) {
        if queue.get(idx) != Some(&value) {
            return Check::Broken(format!("value {value} is not queue[{idx}]"));
        }
        sum += value;
        if sum > capacity {
            return Check::Broken(format!("prefix sum {sum} passes capacity {capacity}"));
        }
    }
    if sum == capacity {
        Check::Valid
    } else {
        Check::Broken(format!("sum {sum}, capacity {capacity}"))
    }
}

fn any_subset_sums_to(queue: &[i64], capacity: i64) -> bool {
    (1u32..(1u32 << queue.len())).any(|mask| {
        let sum: i64 = queue
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1u32 << i) != 0)
            .map(|(_, &w)| w)
            .sum();
        sum == capacity
    })
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

fn cycling_weights(len: usize, max: i64) -> Vec<i64> {
    (0..len as i64).map(|i| (i * 7 + 3) % max + 1).collect()
}

fn cycling_parties(len: usize) -> Vec<i64> {
    const SIZES: [i64; 10] = [1, 1, 2, 1, 3, 1, 5, 2, 1, 4];
    (0..len).map(|i| SIZES[(i * 3) % SIZES.len()]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("back\\slash"), "back\\slash");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn enumeration_limit_is_bounded() {
        assert_eq!(parse_args(args(&[])), Ok(20));
        assert_eq!(parse_args(args(&["--enumerate-up-to", "8"])), Ok(8));
        assert_eq!(parse_args(args(&["--enumerate-up-to=24"])), Ok(24));
        assert!(parse_args(args(&["--enumerate-up-to=25"])).is_err());
        assert!(parse_args(args(&["--enumerate-up-to"])).is_err());
        assert!(parse_args(args(&["--format", "json"])).is_err());
    }

    #[test]
    fn validate_flags_bad_picks() {
        let queue = [4, 4, 1];
        let pick = Finder::new(&queue).unwrap().run().unwrap();
        assert_eq!(validate(&queue, 5, &pick), Check::Valid);
        assert!(matches!(validate(&[4, 9, 1], 5, &pick), Check::Valid));
        assert!(matches!(validate(&[1, 9, 1], 5, &pick), Check::Broken(_)));
    }

    #[test]
    fn enumeration_oracle() {
        assert!(any_subset_sums_to(&[2, 4, 3], 7));
        assert!(!any_subset_sums_to(&[2, 4, 6], 7));
        assert!(!any_subset_sums_to(&[], 1));
    }

    #[test]
    fn rss_is_reported_in_kib() {
        let mut sys = System::new();
        // A running test binary is far below 1 TiB resident.
        assert!(rss_kib(&mut sys) < 1 << 30);
    }
}
