use grid_queue::{GridQueue, RingQueue, ShiftQueue};
use rand::Rng;
use rand::SeedableRng;

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Accepted(bool),
    Dequeued(Option<String>),
    Peeked(Option<String>),
}

fn apply<Q: GridQueue<String>>(queue: &mut Q, roll: f64, label: &str) -> Outcome {
    if roll < 0.5 {
        Outcome::Accepted(queue.enqueue(label.to_string()))
    } else if roll < 0.9 {
        Outcome::Dequeued(queue.dequeue())
    } else {
        Outcome::Peeked(queue.peek().cloned())
    }
}

fn run_parity_case(side: usize, steps: usize, enqueue_bias: f64, seed: u64) {
    let mut ring = RingQueue::new(side).unwrap();
    let mut shift = ShiftQueue::new(side).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    for step in 0..steps {
        // Skew the roll so `enqueue_bias` controls how often the queue fills.
        let roll = if rng.random::<f64>() < enqueue_bias {
            0.0
        } else {
            rng.random_range(0.5..1.0)
        };
        let label = format!("s{seed}-{step}");
        let ring_out = apply(&mut ring, roll, &label);
        let shift_out = apply(&mut shift, roll, &label);
        assert_eq!(
            ring_out, shift_out,
            "outcome mismatch at step {step} for side {side} seed {seed}"
        );
        assert_eq!(
            ring.to_vec(),
            shift.to_vec(),
            "content mismatch at step {step} for side {side} seed {seed}"
        );
        assert_eq!(ring.usage(), shift.usage());
        assert_eq!(ring.is_full(), shift.is_full());
        assert_eq!(ring.is_empty(), shift.is_empty());
    }
}

#[test]
fn parity_small_grids() {
    run_parity_case(1, 200, 0.5, 0xA1);
    run_parity_case(2, 400, 0.6, 0xB2);
    run_parity_case(3, 600, 0.7, 0xC3);
}

#[test]
fn parity_multiple_seeds() {
    for seed in [11u64, 22, 33, 44] {
        run_parity_case(4, 1_000, 0.55, seed);
    }
}

#[test]
fn parity_saturated_and_starved() {
    run_parity_case(3, 500, 0.95, 0x5A7);
    run_parity_case(3, 500, 0.05, 0x57A);
}

#[test]
fn ring_touches_grow_linearly_shift_quadratically() {
    let mut ring = RingQueue::new(16).unwrap();
    let mut shift = ShiftQueue::new(16).unwrap();
    let capacity = ring.capacity() as u64;

    for value in 0..capacity {
        assert!(ring.enqueue(value.to_string()));
        assert!(shift.enqueue(value.to_string()));
    }
    while let Some(value) = ring.dequeue() {
        assert_eq!(shift.dequeue(), Some(value));
    }
    assert!(shift.is_empty());

    assert_eq!(ring.cell_touches(), 2 * capacity);
    assert_eq!(
        shift.cell_touches(),
        capacity + capacity * (capacity + 1) / 2
    );
}
