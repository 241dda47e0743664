use crate::sentinel::Sentinel;
use crate::sequence::Sequence;

use Sentinel::*;

/// A [`Sequence`] yielding only the upstream items which satisfy a predicate. See
/// [`Sequence::filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    pub(crate) seq: S,
    pub(crate) pred: P,
}

impl<S: Sequence, P: FnMut(&S::Item) -> bool> Sequence for Filter<S, P> {
    type Item = S::Item;

    fn next(&mut self) -> Sentinel<S::Item> {
        loop {
            match self.seq.next() {
                Present(item) if (self.pred)(&item) => break Present(item),
                Present(_) => {},
                Absent => break Absent,
            }
        }
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        // Every item may be rejected, so only the upper bound survives.
        (0, self.seq.size_hint().1)
    }
}

/// A [`Sequence`] applying a partial transform to upstream items and yielding the results which
/// are present. See [`Sequence::filter_map`].
#[derive(Debug, Clone)]
pub struct FilterMap<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

impl<S: Sequence, U, F: FnMut(S::Item) -> Sentinel<U>> Sequence for FilterMap<S, F> {
    type Item = U;

    fn next(&mut self) -> Sentinel<U> {
        loop {
            match self.seq.next() {
                Present(item) => match (self.f)(item) {
                    Present(mapped) => break Present(mapped),
                    Absent => {},
                },
                Absent => break Absent,
            }
        }
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        (0, self.seq.size_hint().1)
    }
}
