use crate::sentinel::Sentinel;
use crate::sequence::{Peekable, Sequence};

use Sentinel::*;

/// A [`Sequence`] yielding a clone of a separator between each pair of adjacent upstream items.
/// See [`Sequence::intersperse`].
///
/// The upstream is wrapped in a [`Peekable`] so that a separator is only emitted when another
/// real item is confirmed to follow it; a trailing separator is never produced.
#[derive(Debug, Clone)]
pub struct Intersperse<S: Sequence> {
    pub(crate) seq: Peekable<S>,
    pub(crate) separator: S::Item,
    pub(crate) needs_separator: bool,
}

impl<S: Sequence> Sequence for Intersperse<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Sentinel<S::Item> {
        if self.needs_separator && self.seq.peek().is_present() {
            self.needs_separator = false;
            Present(self.separator.clone())
        } else {
            let item = self.seq.next();
            if item.is_present() {
                self.needs_separator = true;
            }
            item
        }
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        let (lower, upper) = self.seq.size_hint();

        // n items become 2n - 1, plus a leading separator if one is already owed.
        let scale = |n: usize| {
            let spliced = n.saturating_add(n.saturating_sub(1));
            if self.needs_separator { spliced.saturating_add(1) } else { spliced }
        };

        (scale(lower), upper.map(scale))
    }
}
