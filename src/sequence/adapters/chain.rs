use crate::sentinel::Sentinel;
use crate::sequence::Sequence;

use Sentinel::*;

/// A [`Sequence`] yielding every item of one sequence, then every item of a second. See
/// [`Sequence::chain`].
///
/// Once the front sequence reports exhaustion the adapter latches over to the back one and never
/// polls the front again, so a front sequence which later "recovers" cannot interleave items
/// into the back's.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    pub(crate) front: A,
    pub(crate) back: B,
    pub(crate) front_done: bool,
}

impl<A: Sequence, B: Sequence<Item = A::Item>> Sequence for Chain<A, B> {
    type Item = A::Item;

    fn next(&mut self) -> Sentinel<A::Item> {
        if !self.front_done {
            match self.front.next() {
                Present(item) => return Present(item),
                Absent => self.front_done = true,
            }
        }
        self.back.next()
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        let (back_lower, back_upper) = self.back.size_hint();
        if self.front_done {
            return (back_lower, back_upper);
        }

        let (front_lower, front_upper) = self.front.size_hint();
        let upper = match (front_upper, back_upper) {
            (Present(front), Present(back)) => front.checked_add(back).into(),
            _ => Absent,
        };

        (front_lower.saturating_add(back_lower), upper)
    }
}
