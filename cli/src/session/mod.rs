// cli/src/session/mod.rs
#![forbid(unsafe_code)]

/**
 * Interactive menu session.
 *
 * Thin I/O glue around the engine: seeds the queue, renders the shared
 * state after every iteration, parses one menu choice per stdin line, and
 * reports outcomes. All rule enforcement lives in the engine; malformed
 * input and unrecognized choices are reported and re-prompted, never fatal.
 */
use std::io::{self, BufRead, Write};

use pieceflow_engine::{
    bulk_swap, play, reserve, swap_front_top, use_reserved, ActionOutcome, DrawRule, PieceFactory,
    PieceQueue, ReserveStack, QUEUE_CAP, RESERVE_CAP,
};

/// One parsed menu line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Choice {
    Play,
    Reserve,
    UseReserved,
    SwapFrontTop,
    BulkSwap,
    Quit,
    /// Numeric but not on the menu.
    Unrecognized(i64),
    /// Not numeric at all.
    Invalid,
}

impl Choice {
    fn parse(line: &str) -> Self {
        match line.trim().parse::<i64>() {
            Err(_) => Choice::Invalid,
            Ok(0) => Choice::Quit,
            Ok(1) => Choice::Play,
            Ok(2) => Choice::Reserve,
            Ok(3) => Choice::UseReserved,
            Ok(4) => Choice::SwapFrontTop,
            Ok(5) => Choice::BulkSwap,
            Ok(n) => Choice::Unrecognized(n),
        }
    }
}

fn render_pieces<'a>(pieces: impl Iterator<Item = &'a pieceflow_engine::Piece>) -> String {
    let parts: Vec<String> = pieces.map(|p| p.to_string()).collect();
    if parts.is_empty() {
        "[Empty]".to_string()
    } else {
        parts.join(" ")
    }
}

fn render_state(queue: &PieceQueue, stack: &ReserveStack) -> String {
    format!(
        "==================== CURRENT STATE ====================\n\
         Supply queue  (front -> back, {}/{}): {}\n\
         Reserve stack (top -> base,   {}/{}): {}\n\
         =======================================================",
        queue.len(),
        queue.capacity(),
        render_pieces(queue.iter()),
        stack.len(),
        stack.capacity(),
        render_pieces(stack.iter()),
    )
}

fn describe(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Played { piece, replacement } => format!(
            "played {}; fresh {} enqueued to keep the supply topped up",
            piece, replacement
        ),
        ActionOutcome::Reserved { piece, replacement } => format!(
            "moved {} to the reserve; fresh {} enqueued to keep the supply topped up",
            piece, replacement
        ),
        ActionOutcome::Used { piece } => format!("used reserved {}", piece),
        ActionOutcome::Swapped { to_queue, to_stack } => format!(
            "swapped: queue front is now {} (old reserve top), reserve top is now {} (old queue front)",
            to_queue, to_stack
        ),
        ActionOutcome::BulkSwapped { to_stack, to_queue } => format!(
            "bulk swap of {} pieces: {} {} {} moved to the reserve, {} {} {} now lead the queue",
            RESERVE_CAP,
            to_stack[0],
            to_stack[1],
            to_stack[2],
            to_queue[0],
            to_queue[1],
            to_queue[2],
        ),
    }
}

fn print_menu() {
    println!();
    println!("Available actions:");
    println!("1. Play the piece at the front of the queue");
    println!("2. Move the front piece to the reserve stack");
    println!("3. Use a piece from the reserve stack");
    println!("4. Swap the queue front with the reserve top");
    println!(
        "5. Swap the {} frontmost queue pieces with the full reserve (bulk swap)",
        RESERVE_CAP
    );
    println!("0. Quit");
}

pub fn run(seed: u64, rule: DrawRule) {
    let mut factory = PieceFactory::new(seed, rule);
    let mut queue = PieceQueue::new();
    let mut stack = ReserveStack::new();

    for _ in 0..QUEUE_CAP {
        // cannot fail: an empty queue receives exactly QUEUE_CAP pieces
        let _ = queue.enqueue(factory.create());
    }

    println!("--- Strategic piece supply manager ---");
    println!("Queue seeded with {} pieces.", QUEUE_CAP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render_state(&queue, &stack));
        print_menu();
        print!("Choose an action (0-5): ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            // EOF or a broken pipe ends the session like choice 0.
            _ => break,
        };

        let result = match Choice::parse(&line) {
            Choice::Quit => break,
            Choice::Invalid => {
                println!("invalid input, try again");
                continue;
            }
            Choice::Unrecognized(n) => {
                println!("unrecognized option: {}", n);
                continue;
            }
            Choice::Play => play(&mut queue, &mut factory),
            Choice::Reserve => reserve(&mut queue, &mut stack, &mut factory),
            Choice::UseReserved => use_reserved(&mut stack),
            Choice::SwapFrontTop => swap_front_top(&mut queue, &mut stack),
            Choice::BulkSwap => bulk_swap(&mut queue, &mut stack),
        };

        println!("------------------------------------------------");
        match result {
            Ok(outcome) => println!("{}", describe(&outcome)),
            Err(err) => println!("cannot do that: {}", err),
        }
        println!("------------------------------------------------");
    }

    println!("bye.");
}
