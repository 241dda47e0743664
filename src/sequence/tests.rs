#![cfg(test)]

use std::cell::Cell;
use std::num::NonZero;
use std::rc::Rc;

use super::*;
use crate::outcome::Outcome::*;
use crate::sentinel::Sentinel::{self, *};
use crate::util::panic::assert_panics;

/// A deliberately non-fused source: produces a value on odd calls and claims exhaustion on even
/// ones, for proving that latching adapters never resume.
struct Flicker {
    calls: usize,
}

impl Flicker {
    fn new() -> Flicker {
        Flicker { calls: 0 }
    }
}

impl Sequence for Flicker {
    type Item = usize;

    fn next(&mut self) -> Sentinel<usize> {
        self.calls += 1;
        if self.calls % 2 == 1 { Present(self.calls) } else { Absent }
    }
}

/// Wraps a sequence and counts how many times it is pulled, for proving adapter laziness.
struct Counted<S> {
    seq: S,
    pulls: Rc<Cell<usize>>,
}

impl<S> Counted<S> {
    fn new(seq: S) -> (Counted<S>, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        (Counted { seq, pulls: pulls.clone() }, pulls)
    }
}

impl<S: Sequence> Sequence for Counted<S> {
    type Item = S::Item;

    fn next(&mut self) -> Sentinel<S::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.seq.next()
    }
}

#[test]
fn test_counting_laws() {
    assert_eq!(from_std(0..7).count(), 7);
    assert_eq!(from_std(0..7).fold(0, |n, _| n + 1), 7, "Fold should visit every item once.");
    assert_eq!(from_std(0..0).count(), 0);

    assert_eq!(from_std(0..7).take(3).count(), 3);
    assert_eq!(
        from_std(0..2).take(5).count(),
        2,
        "Take should be bounded by the upstream length."
    );

    let a = from_std(0..3);
    let b = from_std(10..14);
    assert_eq!(
        a.chain(b).count(),
        from_std(0..3).count() + from_std(10..14).count(),
        "A chain should count both halves."
    );
}

#[test]
fn test_map_filter() {
    assert_eq!(from_std([1, 2, 3]).map(|x| x * 2).collect::<Vec<_>>(), [2, 4, 6]);
    assert_eq!(
        from_std([1, 2, 3, 4]).filter(|x| x % 2 == 0).collect::<Vec<_>>(),
        [2, 4]
    );
    assert_eq!(
        from_std(["1", "x", "3"])
            .filter_map(|s| Sentinel::<i32>::from(s.parse().ok()))
            .collect::<Vec<_>>(),
        [1, 3],
        "FilterMap should drop the items the function declines."
    );
}

#[test]
fn test_laziness() {
    let (source, pulls) = Counted::new(from_std(0..100));
    let mut mapped = source.map(|x| x * 2);

    assert_eq!(pulls.get(), 0, "Building an adapter chain should pull nothing.");
    assert_eq!(mapped.next(), Present(0));
    assert_eq!(mapped.next(), Present(2));
    assert_eq!(pulls.get(), 2, "Each item should cost exactly one upstream pull.");

    let (source, pulls) = Counted::new(from_std(0..100));
    let collected: Vec<_> = source.take(4).collect();
    assert_eq!(collected, [0, 1, 2, 3]);
    assert_eq!(pulls.get(), 4, "Take should not pull the upstream beyond its count.");

    let (source, pulls) = Counted::new(from_std(0..100));
    let mut filtered = source.filter(|x| x % 10 == 9);
    assert_eq!(filtered.next(), Present(9));
    assert_eq!(pulls.get(), 10, "Filter should pull only until the first match.");
}

#[test]
fn test_take_while_latches() {
    let mut seq = from_std([1, 2, 5, 1, 1]).take_while(|x| *x < 3);
    assert_eq!(seq.next(), Present(1));
    assert_eq!(seq.next(), Present(2));
    assert_eq!(seq.next(), Absent, "The first failing item should end the sequence.");
    assert_eq!(seq.next(), Absent, "Items after the first failure should stay hidden.");

    // The latch must hold even over an upstream that flickers back to life.
    let mut seq = Flicker::new().take_while(|_| true);
    assert_eq!(seq.next(), Present(1));
    assert_eq!(seq.next(), Absent);
    assert_eq!(seq.next(), Absent, "A latched adapter should never poll its upstream again.");
}

#[test]
fn test_map_while_latches() {
    let mut seq = from_std([2, 4, 5, 6]).map_while(|x| {
        if x % 2 == 0 { Present(x / 2) } else { Absent }
    });
    assert_eq!(seq.next(), Present(1));
    assert_eq!(seq.next(), Present(2));
    assert_eq!(seq.next(), Absent);
    assert_eq!(seq.next(), Absent, "A declined item should exhaust the adapter permanently.");
}

#[test]
fn test_skip_and_skip_while() {
    assert_eq!(from_std(0..6).skip(2).collect::<Vec<_>>(), [2, 3, 4, 5]);
    assert_eq!(from_std(0..3).skip(5).count(), 0, "Skipping past the end should be empty.");
    assert_eq!(from_std(0..3).skip(0).count(), 3);

    assert_eq!(
        from_std([1, 2, 10, 1, 11]).skip_while(|x| *x < 5).collect::<Vec<_>>(),
        [10, 1, 11],
        "Once the latch flips, items matching the predicate should still be yielded."
    );
}

#[test]
fn test_step_by() {
    assert_eq!(from_std(0..10).step_by(3).collect::<Vec<_>>(), [0, 3, 6, 9]);
    assert_eq!(
        from_std(0..3).step_by(1).collect::<Vec<_>>(),
        [0, 1, 2],
        "A step of one should yield everything."
    );
    assert_eq!(from_std(0..1).step_by(4).collect::<Vec<_>>(), [0]);

    assert_panics!({ from_std(0..3).step_by(0) });
}

#[test]
fn test_chain_latches() {
    let chained: Vec<_> = from_std([1, 2]).chain([3, 4]).collect();
    assert_eq!(chained, [1, 2, 3, 4]);

    // Without the latch, the flickering front would sneak its third item in between the back's.
    let mut seq = Flicker::new().chain([10, 20]);
    assert_eq!(seq.next(), Present(1));
    assert_eq!(seq.next(), Present(10), "Front exhaustion should hand over to the back.");
    assert_eq!(seq.next(), Present(20), "The front should never be polled again.");
    assert_eq!(seq.next(), Absent);
}

#[test]
fn test_zip() {
    assert_eq!(
        from_std([1, 2, 3]).zip(["a", "b"]).collect::<Vec<_>>(),
        [(1, "a"), (2, "b")],
        "Zip should stop at the shorter side."
    );

    let (b, pulls) = Counted::new(from_std(0..10));
    let mut seq = from_std(0..1).zip(b);
    assert_eq!(seq.next(), Present((0, 0)));
    assert_eq!(seq.next(), Absent);
    assert_eq!(pulls.get(), 1, "The second side should not be pulled once the first is done.");

    let seq = from_std(0..3).zip(from_std(0..10));
    assert_eq!(seq.size_hint(), (3, Present(3)), "The hint should be the smaller bound.");

    let unbounded = from_std(0..).zip(from_std(0..4));
    assert_eq!(
        unbounded.size_hint().1,
        Absent,
        "An upper bound needs both sides to report one."
    );
}

#[test]
fn test_intersperse() {
    assert_eq!(
        from_std([1, 2, 3]).intersperse(0).collect::<Vec<_>>(),
        [1, 0, 2, 0, 3],
        "Separators should only appear between items."
    );
    assert_eq!(from_std([7]).intersperse(0).collect::<Vec<_>>(), [7]);
    assert_eq!(from_std::<[i32; 0]>([]).intersperse(0).count(), 0);
}

#[test]
fn test_flatten_and_flat_map() {
    assert_eq!(
        from_std([vec![1, 2], vec![], vec![3]]).flatten().collect::<Vec<_>>(),
        [1, 2, 3],
        "Empty inner sequences should be skipped over."
    );

    assert_eq!(
        from_std([1, 2, 3]).flat_map(|x| [x, x * 10]).collect::<Vec<_>>(),
        [1, 10, 2, 20, 3, 30]
    );

    // Sentinels are zero-or-one-item sequences, so flattening drops the absences.
    assert_eq!(
        from_std([Present(1), Absent, Present(3)]).flatten().collect::<Vec<_>>(),
        [1, 3]
    );
}

#[test]
fn test_enumerate() {
    assert_eq!(
        from_std(["a", "b"]).enumerate().collect::<Vec<_>>(),
        [(0, "a"), (1, "b")]
    );
}

#[test]
fn test_peekable() {
    let mut seq = from_std([1, 2]).peekable();
    assert_eq!(seq.peek(), Present(&1));
    assert_eq!(seq.peek(), Present(&1), "Peeking should be idempotent.");
    assert_eq!(seq.next(), Present(1), "The buffered item should be drained first.");
    assert_eq!(seq.next(), Present(2));
    assert_eq!(seq.peek(), Absent);
    assert_eq!(seq.next(), Absent);

    let (source, pulls) = Counted::new(from_std(0..5));
    let mut seq = source.peekable();
    seq.peek();
    seq.peek();
    assert_eq!(pulls.get(), 1, "Repeated peeks should cost one upstream pull.");

    let mut seq = from_std([1, 2]).peekable();
    assert_eq!(seq.next_if(|x| *x > 1), Absent);
    assert_eq!(seq.next_if(|x| *x == 1), Present(1), "A declined item should not be lost.");

    let mut seq = from_std([5]).peekable();
    if let Present(item) = seq.peek_mut() {
        *item = 50;
    }
    assert_eq!(seq.next(), Present(50));
}

#[test]
fn test_scan_latches() {
    let running_sums: Vec<_> = from_std([1, 2, 3, 4])
        .scan(0, |acc, x| {
            *acc += x;
            Present(*acc)
        })
        .collect();
    assert_eq!(running_sums, [1, 3, 6, 10]);

    let mut seq = from_std([1, 2, 30, 1, 1]).scan(0, |acc, x| {
        *acc += x;
        if *acc > 10 { Absent } else { Present(*acc) }
    });
    assert_eq!(seq.next(), Present(1));
    assert_eq!(seq.next(), Present(3));
    assert_eq!(seq.next(), Absent);
    assert_eq!(seq.next(), Absent, "A declining scan should stay exhausted.");
}

#[test]
fn test_terminals() {
    assert_eq!(from_std([1, 2, 3]).last(), Present(3));
    assert_eq!(from_std(0..0).last(), Absent);

    let mut seq = from_std(0..5);
    assert_eq!(seq.advance_by(2), Success(()));
    assert_eq!(seq.next(), Present(2));
    assert_eq!(
        seq.advance_by(5),
        Failure(NonZero::new(3).expect("non-zero")),
        "The failure should carry the steps that were not completed."
    );

    let mut seq = from_std(0..10);
    assert_eq!(seq.nth(3), Present(3));
    assert_eq!(seq.nth(0), Present(4), "nth(0) should behave like next.");
    assert_eq!(seq.nth(100), Absent);

    let mut total = 0;
    from_std([1, 2, 3]).for_each(|x| total += x);
    assert_eq!(total, 6);

    let mut seq = from_std(0..5);
    let prefix: Vec<_> = seq.by_ref().take(2).collect();
    assert_eq!(prefix, [0, 1]);
    assert_eq!(seq.next(), Present(2), "by_ref should leave the rest of the sequence intact.");
}

#[test]
fn test_std_bridges() {
    let doubled: Vec<_> = from_std([1, 2, 3]).map(|x| x * 2).std_iter().collect();
    assert_eq!(doubled, [2, 4, 6]);

    let mut seen = Vec::new();
    for item in from_std(0..3).std_iter() {
        seen.push(item);
    }
    assert_eq!(seen, [0, 1, 2]);

    let mut back = from_std([1, 2, 3]).std_iter();
    assert_eq!(back.next_back(), Some(3), "The bridge should preserve double-endedness.");
    assert_eq!(back.next(), Some(1));

    assert_eq!(from_std([1, 2]).size_hint(), (2, Present(2)));
}

#[test]
fn test_sentinel_sequence() {
    let mut seq = Present(5).into_seq();
    assert_eq!(seq.size_hint(), (1, Present(1)));
    assert_eq!(seq.next(), Present(5));
    assert_eq!(seq.next(), Absent, "The single item should only be produced once.");

    assert_eq!(Sentinel::<u8>::Absent.into_seq().count(), 0);
}
