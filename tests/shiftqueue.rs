use grid_queue::{Coord, GridQueue, GridQueueError, ShiftQueue};

fn enqueue_all(queue: &mut ShiftQueue<&'static str>, values: &[&'static str]) {
    for &value in values {
        assert!(queue.enqueue(value), "enqueue of {value} rejected");
    }
}

#[test]
fn construction_rejects_zero_side() {
    assert_eq!(
        ShiftQueue::<u8>::new(0).unwrap_err(),
        GridQueueError::InvalidCapacity { side: 0 }
    );
}

#[test]
fn fresh_queue_is_empty() {
    let queue: ShiftQueue<&str> = ShiftQueue::new(3).unwrap();
    assert_eq!(queue.usage(), 0);
    assert_eq!(queue.capacity(), 9);
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
}

#[test]
fn rejects_when_full() {
    let mut queue = ShiftQueue::new(2).unwrap();
    enqueue_all(&mut queue, &["Alice", "Bob", "Cathy", "Derek"]);
    assert!(!queue.enqueue("Eva"));
    assert_eq!(queue.to_vec(), vec!["Alice", "Bob", "Cathy", "Derek"]);
}

#[test]
fn dequeue_preserves_order_and_compacts() {
    let mut queue = ShiftQueue::new(2).unwrap();
    enqueue_all(&mut queue, &["A", "B", "C", "D"]);
    assert_eq!(queue.dequeue(), Some("A"));
    assert_eq!(queue.dequeue(), Some("B"));
    enqueue_all(&mut queue, &["E", "F"]);
    assert_eq!(queue.to_vec(), vec!["C", "D", "E", "F"]);

    // Live values always occupy the leading linear slots.
    for index in 0..4 {
        assert!(queue.is_occupied(Coord::from_linear(index, 2)));
    }
    assert_eq!(queue.dequeue(), Some("C"));
    assert!(!queue.is_occupied(Coord::new(1, 1)));
}

#[test]
fn drain_leaves_every_cell_unoccupied() {
    let mut queue = ShiftQueue::new(3).unwrap();
    enqueue_all(&mut queue, &["a", "b", "c", "d", "e"]);
    while queue.dequeue().is_some() {}
    assert!(queue.is_empty());
    for index in 0..9 {
        assert!(!queue.is_occupied(Coord::from_linear(index, 3)));
    }
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn peek_is_idempotent() {
    let mut queue = ShiftQueue::new(2).unwrap();
    enqueue_all(&mut queue, &["x", "y"]);
    for _ in 0..3 {
        assert_eq!(queue.peek(), Some(&"x"));
        assert_eq!(queue.usage(), 2);
    }
}

#[test]
fn dequeue_cost_grows_with_usage() {
    let capacity = 64u64;
    let mut queue = ShiftQueue::new(8).unwrap();
    for value in 0..capacity {
        assert!(queue.enqueue(value));
    }
    while queue.dequeue().is_some() {}
    assert_eq!(queue.cell_touches(), capacity + capacity * (capacity + 1) / 2);
}

#[test]
fn display_reports_implied_cursors() {
    let mut queue = ShiftQueue::new(2).unwrap();
    enqueue_all(&mut queue, &["Grace", "Heidi", "Ivan"]);
    assert_eq!(
        queue.to_string(),
        "queue 2x2; capacity: 4; usage: 3; front: (0, 0); back: (1, 1)"
    );
}
