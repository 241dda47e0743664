use crate::sentinel::Sentinel;
use crate::sequence::Sequence;

use Sentinel::*;

/// A [`Sequence`] pairing the items of two sequences, exhausted as soon as either side is. See
/// [`Sequence::zip`].
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Sentinel<(A::Item, B::Item)> {
        match self.a.next() {
            Present(a) => match self.b.next() {
                Present(b) => Present((a, b)),
                Absent => Absent,
            },
            // The second side isn't pulled at all once the first is exhausted.
            Absent => Absent,
        }
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();

        let upper = match (a_upper, b_upper) {
            (Present(a), Present(b)) => Present(a.min(b)),
            _ => Absent,
        };

        (a_lower.min(b_lower), upper)
    }
}
