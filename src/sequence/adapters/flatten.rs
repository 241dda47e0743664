use crate::sentinel::Sentinel;
use crate::sequence::{IntoSequence, Sequence};

use Sentinel::*;

/// A [`Sequence`] yielding the items of each nested sequence in turn. See
/// [`Sequence::flatten`].
///
/// The outer sequence is only pulled when the current inner sequence is exhausted, and inner
/// sequences which yield nothing at all are skipped over in a single call.
pub struct Flatten<S: Sequence>
where
    S::Item: IntoSequence,
{
    pub(crate) outer: S,
    pub(crate) inner: Sentinel<<S::Item as IntoSequence>::IntoSeq>,
}

impl<S: Sequence + std::fmt::Debug> std::fmt::Debug for Flatten<S>
where
    S::Item: IntoSequence,
    <S::Item as IntoSequence>::IntoSeq: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flatten")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S: Sequence + Clone> Clone for Flatten<S>
where
    S::Item: IntoSequence,
    <S::Item as IntoSequence>::IntoSeq: Clone,
{
    fn clone(&self) -> Self {
        Flatten { outer: self.outer.clone(), inner: self.inner.clone() }
    }
}

impl<S: Sequence> Sequence for Flatten<S>
where
    S::Item: IntoSequence,
{
    type Item = <S::Item as IntoSequence>::Item;

    fn next(&mut self) -> Sentinel<Self::Item> {
        loop {
            if let Present(inner) = &mut self.inner {
                match inner.next() {
                    Present(item) => break Present(item),
                    Absent => self.inner = Absent,
                }
            }

            match self.outer.next() {
                Present(nested) => self.inner = Present(nested.into_seq()),
                Absent => break Absent,
            }
        }
    }
}

/// A [`Sequence`] mapping every item to a sequence and yielding the items of each in turn. See
/// [`Sequence::flat_map`].
#[derive(Debug, Clone)]
pub struct FlatMap<S, U: IntoSequence, F> {
    pub(crate) outer: S,
    pub(crate) inner: Sentinel<U::IntoSeq>,
    pub(crate) f: F,
}

impl<S: Sequence, U: IntoSequence, F: FnMut(S::Item) -> U> Sequence for FlatMap<S, U, F> {
    type Item = U::Item;

    fn next(&mut self) -> Sentinel<U::Item> {
        loop {
            if let Present(inner) = &mut self.inner {
                match inner.next() {
                    Present(item) => break Present(item),
                    Absent => self.inner = Absent,
                }
            }

            match self.outer.next() {
                Present(item) => self.inner = Present((self.f)(item).into_seq()),
                Absent => break Absent,
            }
        }
    }
}
