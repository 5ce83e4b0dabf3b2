// engine/tests/action_characterization.rs
#![forbid(unsafe_code)]

/**
 * Action engine characterization tests.
 *
 * Purpose:
 * - Lock the observable behavior of the five strategic actions.
 * - Catch regressions in replenishment, precondition checks, and the
 *   FIFO/LIFO order translation of the bulk swap.
 *
 * What is tested:
 * - `play`/`reserve` keep the queue topped up; failed actions touch
 *   neither container nor the factory counter.
 * - `use_reserved` consumes without refill.
 * - `swap_front_top` leaves the old stack top AT THE QUEUE FRONT (in-place
 *   exchange, not a remove/re-insert rotation).
 * - The bulk-swap end-to-end scenario: queue [A,B,C,D,E] / stack [X,Y,Z]
 *   (top->base) becomes queue [X,Y,Z,D,E] / stack top=C base=A.
 * - Shortfall errors carry the held-vs-required detail for the right side.
 * - Factory ids strictly increase; identical seeds give identical draw
 *   streams; Bag7 deals each kind exactly once per bag.
 */
use std::collections::HashSet;

use pieceflow_engine::{
    bulk_swap, play, reserve, swap_front_top, use_reserved, ActionError, ActionOutcome, DrawRule,
    Kind, Piece, PieceFactory, PieceQueue, ReserveStack, QUEUE_CAP, RESERVE_CAP,
};

fn seeded_setup(seed: u64) -> (PieceQueue, ReserveStack, PieceFactory) {
    let mut factory = PieceFactory::new(seed, DrawRule::Uniform);
    let mut queue = PieceQueue::new();
    for _ in 0..QUEUE_CAP {
        queue.enqueue(factory.create()).unwrap();
    }
    (queue, ReserveStack::new(), factory)
}

fn queue_ids(q: &PieceQueue) -> Vec<u64> {
    q.iter().map(|p| p.id).collect()
}

fn stack_ids(s: &ReserveStack) -> Vec<u64> {
    s.iter().map(|p| p.id).collect()
}

fn fixture(id: u64) -> Piece {
    let kinds = Kind::all();
    Piece {
        kind: kinds[(id as usize) % kinds.len()],
        id,
    }
}

#[test]
fn play_rotates_composition_and_preserves_occupancy() {
    let (mut queue, _stack, mut factory) = seeded_setup(20260828);
    let old_front = queue.peek_front().unwrap();

    let outcome = play(&mut queue, &mut factory).unwrap();
    let ActionOutcome::Played { piece, replacement } = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };

    assert_eq!(piece, old_front);
    assert_eq!(queue.len(), QUEUE_CAP);
    // The replacement joins at the back and carries the next fresh id.
    assert_eq!(queue.iter().last().copied(), Some(replacement));
    assert_eq!(replacement.id, QUEUE_CAP as u64);
}

#[test]
fn play_on_empty_queue_is_a_reported_noop() {
    let mut queue = PieceQueue::new();
    let mut factory = PieceFactory::new(7, DrawRule::Uniform);

    assert_eq!(
        play(&mut queue, &mut factory),
        Err(ActionError::QueueEmpty)
    );
    assert!(queue.is_empty());
    // No replenishment on failure.
    assert_eq!(factory.pieces_created(), 0);
}

#[test]
fn reserve_grows_stack_and_keeps_queue_topped_up() {
    let (mut queue, mut stack, mut factory) = seeded_setup(20260828);
    let old_front = queue.peek_front().unwrap();

    let outcome = reserve(&mut queue, &mut stack, &mut factory).unwrap();
    let ActionOutcome::Reserved { piece, replacement } = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };

    assert_eq!(piece, old_front);
    assert_eq!(stack.peek_top(), Some(old_front));
    assert_eq!(stack.len(), 1);
    assert_eq!(queue.len(), QUEUE_CAP);
    assert_eq!(queue.iter().last().copied(), Some(replacement));
}

#[test]
fn reserve_respects_a_full_stack() {
    let (mut queue, mut stack, mut factory) = seeded_setup(3);
    for _ in 0..RESERVE_CAP {
        reserve(&mut queue, &mut stack, &mut factory).unwrap();
    }

    let queue_before = queue_ids(&queue);
    let stack_before = stack_ids(&stack);
    let created_before = factory.pieces_created();

    let err = reserve(&mut queue, &mut stack, &mut factory).unwrap_err();
    assert_eq!(err, ActionError::StackFull { cap: RESERVE_CAP });
    assert_eq!(
        err.to_string(),
        "reserve stack is full (3/3), cannot reserve"
    );

    // Failed action touched nothing.
    assert_eq!(queue_ids(&queue), queue_before);
    assert_eq!(stack_ids(&stack), stack_before);
    assert_eq!(factory.pieces_created(), created_before);
}

#[test]
fn use_reserved_consumes_without_refill() {
    let (mut queue, mut stack, mut factory) = seeded_setup(11);
    reserve(&mut queue, &mut stack, &mut factory).unwrap();
    reserve(&mut queue, &mut stack, &mut factory).unwrap();
    let top = stack.peek_top().unwrap();

    let outcome = use_reserved(&mut stack).unwrap();
    assert_eq!(outcome, ActionOutcome::Used { piece: top });
    assert_eq!(stack.len(), 1);

    use_reserved(&mut stack).unwrap();
    assert_eq!(use_reserved(&mut stack), Err(ActionError::StackEmpty));
    assert!(stack.is_empty());
}

#[test]
fn swap_front_top_exchanges_in_place() {
    let (mut queue, mut stack, mut factory) = seeded_setup(42);
    reserve(&mut queue, &mut stack, &mut factory).unwrap();

    let front_before = queue.peek_front().unwrap();
    let top_before = stack.peek_top().unwrap();
    let rest_before: Vec<u64> = queue_ids(&queue)[1..].to_vec();

    let outcome = swap_front_top(&mut queue, &mut stack).unwrap();
    assert_eq!(
        outcome,
        ActionOutcome::Swapped {
            to_queue: top_before,
            to_stack: front_before,
        }
    );

    // The old stack top IS the new queue front; everything behind it is
    // untouched. Sizes unchanged, nothing created.
    assert_eq!(queue.peek_front(), Some(top_before));
    assert_eq!(stack.peek_top(), Some(front_before));
    assert_eq!(queue_ids(&queue)[1..].to_vec(), rest_before);
    assert_eq!(queue.len(), QUEUE_CAP);
    assert_eq!(stack.len(), 1);
}

#[test]
fn swap_front_top_reports_the_empty_side() {
    let (mut queue, mut stack, _factory) = seeded_setup(5);
    assert_eq!(
        swap_front_top(&mut queue, &mut stack),
        Err(ActionError::StackEmpty)
    );

    let mut empty_queue = PieceQueue::new();
    let mut loaded_stack = ReserveStack::new();
    loaded_stack.push(fixture(0)).unwrap();
    assert_eq!(
        swap_front_top(&mut empty_queue, &mut loaded_stack),
        Err(ActionError::QueueEmpty)
    );
    assert_eq!(loaded_stack.len(), 1);
}

#[test]
fn bulk_swap_translates_orderings_end_to_end() {
    // Queue [A,B,C,D,E] front->back as ids 0..=4; stack pushed 5,6,7 so
    // top->base reads [X=7, Y=6, Z=5].
    let mut queue = PieceQueue::new();
    for id in 0..QUEUE_CAP as u64 {
        queue.enqueue(fixture(id)).unwrap();
    }
    let mut stack = ReserveStack::new();
    for id in 5..5 + RESERVE_CAP as u64 {
        stack.push(fixture(id)).unwrap();
    }

    let outcome = bulk_swap(&mut queue, &mut stack).unwrap();
    let ActionOutcome::BulkSwapped { to_stack, to_queue } = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };

    // Blocks are reported in removal order.
    assert_eq!(to_stack.map(|p| p.id), [0, 1, 2]);
    assert_eq!(to_queue.map(|p| p.id), [7, 6, 5]);

    // Queue becomes [X,Y,Z,D,E]: the old stack top leads.
    assert_eq!(queue_ids(&queue), vec![7, 6, 5, 3, 4]);
    // Stack becomes top=C, base=A.
    assert_eq!(stack_ids(&stack), vec![2, 1, 0]);

    // 3-for-3: sizes unchanged.
    assert_eq!(queue.len(), QUEUE_CAP);
    assert_eq!(stack.len(), RESERVE_CAP);
}

#[test]
fn bulk_swap_reports_shortfalls_and_leaves_state_alone() {
    // Short queue, full stack.
    let mut queue = PieceQueue::new();
    queue.enqueue(fixture(0)).unwrap();
    queue.enqueue(fixture(1)).unwrap();
    let mut stack = ReserveStack::new();
    for id in 2..2 + RESERVE_CAP as u64 {
        stack.push(fixture(id)).unwrap();
    }

    let err = bulk_swap(&mut queue, &mut stack).unwrap_err();
    assert_eq!(
        err,
        ActionError::QueueShort {
            held: 2,
            required: RESERVE_CAP,
        }
    );
    assert_eq!(
        err.to_string(),
        "bulk swap needs 3 queued pieces, queue holds 2"
    );
    assert_eq!(queue_ids(&queue), vec![0, 1]);
    assert_eq!(stack_ids(&stack), vec![4, 3, 2]);

    // Full queue, short stack.
    let (mut queue, mut stack, mut factory) = seeded_setup(9);
    reserve(&mut queue, &mut stack, &mut factory).unwrap();
    let queue_before = queue_ids(&queue);

    let err = bulk_swap(&mut queue, &mut stack).unwrap_err();
    assert_eq!(
        err,
        ActionError::StackShort {
            held: 1,
            required: RESERVE_CAP,
        }
    );
    assert_eq!(
        err.to_string(),
        "bulk swap needs a full reserve of 3, stack holds 1"
    );
    assert_eq!(queue_ids(&queue), queue_before);
    assert_eq!(stack.len(), 1);
}

#[test]
fn factory_ids_strictly_increase_and_never_repeat() {
    let mut factory = PieceFactory::new(99, DrawRule::Uniform);
    let mut last: Option<u64> = None;
    let mut seen = HashSet::new();

    for _ in 0..50 {
        let p = factory.create();
        if let Some(prev) = last {
            assert!(p.id > prev);
        }
        assert!(seen.insert(p.id));
        last = Some(p.id);
    }
    assert_eq!(factory.pieces_created(), 50);
}

#[test]
fn identical_seeds_give_identical_draw_streams() {
    let mut a = PieceFactory::new(20260828, DrawRule::Uniform);
    let mut b = PieceFactory::new(20260828, DrawRule::Uniform);
    for _ in 0..40 {
        assert_eq!(a.create(), b.create());
    }
}

#[test]
fn bag7_deals_every_kind_once_per_bag() {
    let mut factory = PieceFactory::new(77, DrawRule::Bag7);
    for _ in 0..4 {
        let bag: HashSet<char> = (0..7).map(|_| factory.create().kind.glyph()).collect();
        assert_eq!(bag.len(), 7);
    }
}
