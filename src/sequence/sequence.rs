use std::num::NonZero;

use crate::outcome::Outcome;
use crate::sentinel::Sentinel;
use crate::sequence::{
    Chain, Enumerate, Filter, FilterMap, FlatMap, Flatten, Intersperse, IntoStd, Map, MapWhile,
    Peekable, Scan, Skip, SkipWhile, StepBy, Take, TakeWhile, Zip,
};

use Outcome::*;
use Sentinel::*;

/// A source of values which are produced one at a time, on demand, by calling
/// [`next`](Sequence::next).
///
/// Exhaustion is signalled by returning [`Absent`]. By convention an exhausted Sequence keeps
/// returning [`Absent`], but this isn't enforced; adapters which promise it
/// ([`take_while`](Sequence::take_while), [`map_while`](Sequence::map_while),
/// [`scan`](Sequence::scan), [`chain`](Sequence::chain)) maintain their own latch so that they
/// uphold it over any upstream.
///
/// # Adapters
/// Most methods wrap self in another Sequence rather than producing values:
///
/// | Method | Yields |
/// |-|-|
/// | `map` | each item, transformed |
/// | `filter` / `filter_map` | the items passing a predicate / a partial transform |
/// | `take` / `take_while` / `map_while` | a prefix |
/// | `skip` / `skip_while` | everything but a prefix |
/// | `step_by` | every n-th item |
/// | `chain` | this sequence, then another |
/// | `zip` | pairs, while both sides produce |
/// | `intersperse` | items with a separator between them |
/// | `flatten` / `flat_map` | the items of nested sequences |
/// | `enumerate` | items paired with a running index |
/// | `peekable` | items, with one-slot lookahead |
/// | `scan` | items threaded through an accumulator |
///
/// The remaining methods ([`fold`](Sequence::fold), [`count`](Sequence::count),
/// [`last`](Sequence::last), [`collect`](Sequence::collect), ...) consume the Sequence.
pub trait Sequence {
    /// The type of value this Sequence produces.
    type Item;

    /// Produces the next value, or [`Absent`] if the Sequence is exhausted.
    ///
    /// This performs exactly the work required for one value; nothing is buffered or consumed
    /// ahead of time unless an adapter documents otherwise.
    fn next(&mut self) -> Sentinel<Self::Item>;

    /// Returns the bounds on the number of values remaining: a lower bound and, if one is known,
    /// an upper bound.
    ///
    /// This is advisory, for pre-allocation; it is not trusted for correctness.
    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        (0, Absent)
    }

    /// Transforms every item with the provided function.
    fn map<U, F: FnMut(Self::Item) -> U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
    {
        Map { seq: self, f }
    }

    /// Yields only the items for which the predicate holds.
    fn filter<P: FnMut(&Self::Item) -> bool>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
    {
        Filter { seq: self, pred }
    }

    /// Transforms items with a function which can also discard them, yielding the present
    /// results.
    fn filter_map<U, F: FnMut(Self::Item) -> Sentinel<U>>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
    {
        FilterMap { seq: self, f }
    }

    /// Yields at most the first `count` items.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take { seq: self, remaining: count }
    }

    /// Yields items until the predicate first fails, then stays exhausted even if the upstream
    /// recovers.
    fn take_while<P: FnMut(&Self::Item) -> bool>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
    {
        TakeWhile { seq: self, pred, done: false }
    }

    /// Transforms items until the function first declines one, then stays exhausted.
    fn map_while<U, F: FnMut(Self::Item) -> Sentinel<U>>(self, f: F) -> MapWhile<Self, F>
    where
        Self: Sized,
    {
        MapWhile { seq: self, f, done: false }
    }

    /// Discards the first `count` items, yielding the rest.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip { seq: self, remaining: count }
    }

    /// Discards items until the predicate first fails, then yields everything - including later
    /// items the predicate would have matched.
    fn skip_while<P: FnMut(&Self::Item) -> bool>(self, pred: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
    {
        SkipWhile { seq: self, pred, done: false }
    }

    /// Yields the first item and then every `step`-th item after it.
    ///
    /// # Panics
    /// Panics if `step` is zero.
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        assert!(step != 0, "A step of zero would never advance!");
        StepBy { seq: self, step_minus_one: step - 1, first_take: true }
    }

    /// Yields every item of self, then every item of `other`.
    fn chain<S: IntoSequence<Item = Self::Item>>(self, other: S) -> Chain<Self, S::IntoSeq>
    where
        Self: Sized,
    {
        Chain { front: self, back: other.into_seq(), front_done: false }
    }

    /// Pairs this Sequence's items with another's, stopping at the shorter of the two.
    fn zip<S: IntoSequence>(self, other: S) -> Zip<Self, S::IntoSeq>
    where
        Self: Sized,
    {
        Zip { a: self, b: other.into_seq() }
    }

    /// Yields a clone of `separator` between each pair of adjacent items, with no trailing
    /// separator after the last.
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse { seq: self.peekable(), separator, needs_separator: false }
    }

    /// Maps every item to a sequence and yields the items of each in turn.
    fn flat_map<U: IntoSequence, F: FnMut(Self::Item) -> U>(self, f: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
    {
        FlatMap { outer: self, inner: Absent, f }
    }

    /// Yields the items of each nested sequence in turn.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoSequence,
    {
        Flatten { outer: self, inner: Absent }
    }

    /// Pairs every item with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate { seq: self, count: 0 }
    }

    /// Wraps self with a one-item buffer so the next item can be inspected without consuming it.
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable { seq: self, peeked: Absent }
    }

    /// Threads an accumulator through the provided function, yielding its present results and
    /// becoming permanently exhausted the first time it declines.
    fn scan<St, B, F: FnMut(&mut St, Self::Item) -> Sentinel<B>>(
        self,
        initial: St,
        f: F,
    ) -> Scan<Self, St, F>
    where
        Self: Sized,
    {
        Scan { seq: self, state: initial, f, done: false }
    }

    /// Consumes the Sequence, combining every item into an accumulator with the provided
    /// function.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::sequence::{from_std, Sequence};
    /// let sum = from_std([1, 2, 3]).fold(0, |acc, x| acc + x);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold<B, F: FnMut(B, Self::Item) -> B>(mut self, initial: B, mut f: F) -> B
    where
        Self: Sized,
    {
        let mut acc = initial;
        while let Present(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Consumes the Sequence, calling the provided function on every item.
    fn for_each<F: FnMut(Self::Item)>(self, mut f: F)
    where
        Self: Sized,
    {
        self.fold((), |(), item| f(item));
    }

    /// Consumes the Sequence, counting the items it produces.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Consumes the Sequence, returning its final item.
    fn last(self) -> Sentinel<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Absent, |_, item| Present(item))
    }

    /// Discards the next `n` items. On success the Sequence has advanced by exactly `n`; if it
    /// was exhausted first, the failure carries the number of steps that were not completed.
    fn advance_by(&mut self, n: usize) -> Outcome<(), NonZero<usize>> {
        for taken in 0..n {
            if self.next().is_absent() {
                // SAFETY: taken < n, so the subtraction is at least 1.
                return Failure(unsafe { NonZero::new_unchecked(n - taken) });
            }
        }
        Success(())
    }

    /// Discards `n` items and produces the one after them, i.e. the item at offset `n` from the
    /// current position.
    fn nth(&mut self, n: usize) -> Sentinel<Self::Item> {
        match self.advance_by(n) {
            Success(()) => self.next(),
            Failure(_) => Absent,
        }
    }

    /// Consumes the Sequence into a collection.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::sequence::{from_std, Sequence};
    /// let evens: Vec<i32> = from_std([1, 2, 3, 4]).filter(|x| x % 2 == 0).collect();
    /// assert_eq!(evens, [2, 4]);
    /// ```
    fn collect<B: FromSequence<Self::Item>>(self) -> B
    where
        Self: Sized,
    {
        B::from_seq(self)
    }

    /// Borrows the Sequence so adapters can be applied without consuming it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Wraps the Sequence in an adapter implementing [`Iterator`], for use with `for` loops and
    /// anything else expecting the standard library's protocol.
    fn std_iter(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd { seq: self }
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn next(&mut self) -> Sentinel<S::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        (**self).size_hint()
    }
}

/// A [`Sequence`] which can also be consumed from its back end. The two ends converge: every
/// item is produced exactly once no matter how calls to the two sides are interleaved.
pub trait DoubleEndedSequence: Sequence {
    /// Produces the next value from the back, or [`Absent`] once the ends have met.
    fn next_back(&mut self) -> Sentinel<Self::Item>;
}

impl<S: DoubleEndedSequence + ?Sized> DoubleEndedSequence for &mut S {
    fn next_back(&mut self) -> Sentinel<S::Item> {
        (**self).next_back()
    }
}

/// A value which can be turned into a [`Sequence`]. The equivalent of [`IntoIterator`] for this
/// crate's protocol, and the bound used by the adapters which combine two sequences.
pub trait IntoSequence {
    /// The type of value the resulting Sequence produces.
    type Item;
    /// The Sequence type this converts into.
    type IntoSeq: Sequence<Item = Self::Item>;

    /// Converts self into a [`Sequence`].
    fn into_seq(self) -> Self::IntoSeq;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type IntoSeq = S;

    fn into_seq(self) -> S {
        self
    }
}

/// A collection which can be built from a [`Sequence`], used by [`Sequence::collect`].
pub trait FromSequence<A>: Sized {
    /// Builds the collection by draining the provided Sequence.
    fn from_seq<S: IntoSequence<Item = A>>(seq: S) -> Self;
}

impl<A> FromSequence<A> for Vec<A> {
    fn from_seq<S: IntoSequence<Item = A>>(seq: S) -> Vec<A> {
        let mut seq = seq.into_seq();
        let mut vec = Vec::with_capacity(seq.size_hint().0);
        while let Present(item) = seq.next() {
            vec.push(item);
        }
        vec
    }
}
