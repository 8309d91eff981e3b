#![allow(unused)]

/// unit tests for the newest-first ringbuffer helpers
/// run with "cargo test --test test_ringbuffer -- --nocapture"

use std::collections::VecDeque;
use flightview_common::collections::{ensure_ringbuffer_space, push_to_ringbuffer};

#[test]
fn test_push () {
    println!("--- testing newest-first ringbuffer push");
    let mut ring: VecDeque<usize> = VecDeque::with_capacity(5);

    for d in 0..9 {
        push_to_ringbuffer( &mut ring, d, 5);
        println!("{d} -> {ring:?}");
    }

    // newest first, oldest evicted from the back
    assert_eq!( vec![8,7,6,5,4], Vec::from(ring));
}

#[test]
fn test_degenerate_capacity () {
    // max_len 0 cannot be honored for a non-empty push but must still terminate
    let mut ring: VecDeque<usize> = VecDeque::new();
    push_to_ringbuffer( &mut ring, 1, 0);
    push_to_ringbuffer( &mut ring, 2, 0);

    assert_eq!( ring.len(), 1);
    assert_eq!( ring.front(), Some(&2));
}

#[test]
fn test_space () {
    let mut ring: VecDeque<usize> = VecDeque::from( vec![3,2,1,0]);
    ensure_ringbuffer_space( &mut ring, 4);
    assert_eq!( ring.len(), 3);
    assert_eq!( ring.back(), Some(&1));
}
