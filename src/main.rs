#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use grid_queue::{GridQueue, RingQueue, ShiftQueue};
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const ENQUEUE_BIAS: f64 = 0.55;

#[derive(Clone, Debug)]
struct RunConfig {
    side: usize,
    ops: usize,
    checkpoints: usize,
    runs: u64,
    seed: u64,
    threads: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            side: 32,
            ops: 100_000,
            checkpoints: 4,
            runs: 4,
            seed: 0x5EED_1234_ABCD_EF01,
            threads: None,
        }
    }
}

fn parse_args() -> RunConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut cfg = RunConfig::default();
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--side" => {
                i += 1;
                cfg.side = next_arg(i, "--side")
                    .parse()
                    .expect("--side requires a positive integer");
            }
            "--ops" => {
                i += 1;
                cfg.ops = next_arg(i, "--ops")
                    .parse()
                    .expect("--ops requires a positive integer");
            }
            "--checkpoints" => {
                i += 1;
                cfg.checkpoints = next_arg(i, "--checkpoints")
                    .parse()
                    .expect("--checkpoints requires a positive integer");
            }
            "--runs" => {
                i += 1;
                cfg.runs = next_arg(i, "--runs")
                    .parse()
                    .expect("--runs requires a positive integer");
            }
            "--seed" => {
                i += 1;
                let v = next_arg(i, "--seed");
                cfg.seed = if let Some(hex) = v.strip_prefix("0x") {
                    u64::from_str_radix(hex, 16).expect("--seed hex parse failed")
                } else {
                    v.parse().expect("--seed expects u64")
                };
            }
            "--threads" => {
                i += 1;
                let n: usize = next_arg(i, "--threads")
                    .parse()
                    .expect("--threads requires a positive integer");
                cfg.threads = Some(n);
            }
            other => panic!(
                "unknown argument: {other}\nusage: grid-queue [--side N] [--ops N] [--checkpoints N] [--runs N] [--seed N|0xHEX] [--threads N]"
            ),
        }
        i += 1;
    }
    cfg.checkpoints = cfg.checkpoints.max(1);
    cfg
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Enqueue(u64),
    Dequeue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Accepted(bool),
    Dequeued(Option<u64>),
}

fn generate_ops(count: usize, seed: u64) -> Vec<Op> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut next_value = 0u64;
    (0..count)
        .map(|_| {
            if rng.random_bool(ENQUEUE_BIAS) {
                next_value += 1;
                Op::Enqueue(next_value)
            } else {
                Op::Dequeue
            }
        })
        .collect()
}

fn apply<Q: GridQueue<u64>>(queue: &mut Q, ops: &[Op], outcomes: &mut Vec<Outcome>) -> Duration {
    outcomes.clear();
    let start = Instant::now();
    for op in ops {
        let outcome = match *op {
            Op::Enqueue(value) => Outcome::Accepted(queue.enqueue(value)),
            Op::Dequeue => Outcome::Dequeued(queue.dequeue()),
        };
        outcomes.push(outcome);
    }
    start.elapsed()
}

struct Checkpoint {
    op: usize,
    usage: usize,
    matched: bool,
    ring: Duration,
    shift: Duration,
    ring_touches: u64,
    shift_touches: u64,
}

struct RunReport {
    seed: u64,
    checkpoints: Vec<Checkpoint>,
}

fn run_checked(cfg: &RunConfig, seed: u64) -> RunReport {
    let ops = generate_ops(cfg.ops, seed);
    let chunk = cfg.ops.div_ceil(cfg.checkpoints).max(1);
    let (mut ring, mut shift) = match (RingQueue::new(cfg.side), ShiftQueue::new(cfg.side)) {
        (Ok(ring), Ok(shift)) => (ring, shift),
        (Err(err), _) | (_, Err(err)) => panic!("cannot build queues: {err}"),
    };

    let mut ring_outcomes = Vec::with_capacity(chunk);
    let mut shift_outcomes = Vec::with_capacity(chunk);
    let mut checkpoints = Vec::with_capacity(cfg.checkpoints);
    let mut done = 0;

    for slice in ops.chunks(chunk) {
        let ring_elapsed = apply(&mut ring, slice, &mut ring_outcomes);
        let shift_elapsed = apply(&mut shift, slice, &mut shift_outcomes);
        done += slice.len();

        let matched = ring_outcomes == shift_outcomes && ring.to_vec() == shift.to_vec();
        if !matched {
            warn!(seed, op = done, "ring and shift queues diverged");
        }
        checkpoints.push(Checkpoint {
            op: done,
            usage: ring.usage(),
            matched,
            ring: ring_elapsed,
            shift: shift_elapsed,
            ring_touches: ring.cell_touches(),
            shift_touches: shift.cell_touches(),
        });
    }

    RunReport { seed, checkpoints }
}

fn print_report(report: &RunReport) {
    println!("Seed {:#x}:", report.seed);
    for cp in &report.checkpoints {
        let status = if cp.matched { "MATCH" } else { "MISMATCH" };
        let ring_ms = cp.ring.as_secs_f64() * 1000.0;
        let shift_ms = cp.shift.as_secs_f64() * 1000.0;
        println!(
            "  op {}: usage = {} [{status}]  RingQueue: {ring_ms:.3} ms, {} touches | ShiftQueue: {shift_ms:.3} ms, {} touches",
            cp.op, cp.usage, cp.ring_touches, cp.shift_touches
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = parse_args();
    info!(
        side = cfg.side,
        ops = cfg.ops,
        runs = cfg.runs,
        "comparing ring and shift grid queues"
    );

    let run_all = || -> Vec<RunReport> {
        (0..cfg.runs)
            .into_par_iter()
            .map(|run| run_checked(&cfg, cfg.seed.wrapping_add(run)))
            .collect()
    };
    let reports = match cfg.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("build thread pool")
            .install(run_all),
        None => run_all(),
    };

    for report in &reports {
        print_report(report);
    }

    let (ring_total, shift_total) = reports
        .iter()
        .flat_map(|report| &report.checkpoints)
        .fold((Duration::ZERO, Duration::ZERO), |(ring, shift), cp| {
            (ring + cp.ring, shift + cp.shift)
        });
    let mismatches = reports
        .iter()
        .flat_map(|report| &report.checkpoints)
        .filter(|cp| !cp.matched)
        .count();

    let ring_ms = ring_total.as_secs_f64() * 1000.0;
    let shift_ms = shift_total.as_secs_f64() * 1000.0;
    println!("\n--- Summary ({} runs x {} ops) ---", cfg.runs, cfg.ops);
    println!("RingQueue:  {ring_ms:.3} ms total");
    println!("ShiftQueue: {shift_ms:.3} ms total");
    println!("Speedup (ShiftQueue / RingQueue): {:.2}x", shift_ms / ring_ms);
    if mismatches > 0 {
        warn!(mismatches, "checkpoints disagreed");
        std::process::exit(1);
    }
}
