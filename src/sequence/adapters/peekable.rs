use crate::sentinel::Sentinel;
use crate::sequence::Sequence;

use Sentinel::*;

/// A [`Sequence`] with a one-item buffer, so the next item can be inspected without being
/// consumed. See [`Sequence::peekable`].
///
/// The outer [`Sentinel`] records whether the buffer is filled; the inner one is the buffered
/// answer itself, which may well be "the upstream is exhausted".
#[derive(Debug, Clone)]
pub struct Peekable<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) peeked: Sentinel<Sentinel<S::Item>>,
}

impl<S: Sequence> Peekable<S> {
    /// Returns a reference to the next item without consuming it. Idempotent: peeking twice pulls
    /// the upstream once.
    pub fn peek(&mut self) -> Sentinel<&S::Item> {
        let seq = &mut self.seq;
        self.peeked.get_or_insert_with(|| seq.next()).as_ref()
    }

    /// Returns a mutable reference to the next item without consuming it.
    pub fn peek_mut(&mut self) -> Sentinel<&mut S::Item> {
        let seq = &mut self.seq;
        self.peeked.get_or_insert_with(|| seq.next()).as_mut()
    }

    /// Consumes the next item only if the predicate holds for it.
    pub fn next_if<P: FnOnce(&S::Item) -> bool>(&mut self, pred: P) -> Sentinel<S::Item> {
        match self.next() {
            Present(item) if pred(&item) => Present(item),
            other => {
                // Whatever was pulled - an unmatched item or the exhaustion answer - goes back
                // into the buffer.
                self.peeked = Present(other);
                Absent
            },
        }
    }
}

impl<S: Sequence> Sequence for Peekable<S> {
    type Item = S::Item;

    fn next(&mut self) -> Sentinel<S::Item> {
        match self.peeked.take() {
            Present(buffered) => buffered,
            Absent => self.seq.next(),
        }
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        match &self.peeked {
            // A buffered exhaustion answer means there is nothing left at all.
            Present(Absent) => (0, Present(0)),
            Present(Present(_)) => {
                let (lower, upper) = self.seq.size_hint();
                (
                    lower.saturating_add(1),
                    upper.and_then(|upper| upper.checked_add(1).into()),
                )
            },
            Absent => self.seq.size_hint(),
        }
    }
}
