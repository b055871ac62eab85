#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use grid_queue::{GridQueue, RingQueue, ShiftQueue};
use std::time::Instant;

/// Fill the queue, then drain it `rounds` times. Returns (ms, touches).
fn bench_fill_drain<Q: GridQueue<u64>>(mut queue: Q, rounds: u64) -> (f64, u64) {
    let capacity = queue.capacity() as u64;
    let start = Instant::now();
    for round in 0..rounds {
        for value in 0..capacity {
            let accepted = queue.enqueue(round * capacity + value);
            debug_assert!(accepted);
        }
        while let Some(value) = queue.dequeue() {
            std::hint::black_box(value);
        }
    }
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    (total_ms, queue.cell_touches())
}

fn main() {
    let scales: &[(usize, u64)] = &[
        (4, 20_000), // 16 cells
        (16, 2_000), // 256 cells
        (32, 200),   // 1024 cells
        (64, 20),    // 4096 cells
        (128, 2),    // 16384 cells
    ];

    println!(
        "{:<10} {:>8} {:>8} {:>12} {:>14} {:>12} {:>14}",
        "Grid", "Cells", "Rounds", "Ring(ms)", "Ring touches", "Shift(ms)", "Shift touches"
    );
    println!("{}", "-".repeat(84));

    for &(side, rounds) in scales {
        let ring = RingQueue::new(side).expect("valid side");
        let shift = ShiftQueue::new(side).expect("valid side");
        let (ring_ms, ring_touches) = bench_fill_drain(ring, rounds);
        let (shift_ms, shift_touches) = bench_fill_drain(shift, rounds);
        println!(
            "{:<10} {:>8} {:>8} {:>12.2} {:>14} {:>12.2} {:>14}",
            format!("{}x{}", side, side),
            side * side,
            rounds,
            ring_ms,
            ring_touches,
            shift_ms,
            shift_touches
        );
    }
}
