use crate::sentinel::Sentinel;
use crate::sequence::Sequence;

/// A [`Sequence`] yielding the first upstream item and every `step`-th item after it. See
/// [`Sequence::step_by`].
#[derive(Debug, Clone)]
pub struct StepBy<S> {
    pub(crate) seq: S,
    // The constructor rejects a step of zero, so the stored value never underflows.
    pub(crate) step_minus_one: usize,
    pub(crate) first_take: bool,
}

impl<S: Sequence> Sequence for StepBy<S> {
    type Item = S::Item;

    fn next(&mut self) -> Sentinel<S::Item> {
        if self.first_take {
            self.first_take = false;
            self.seq.next()
        } else {
            self.seq.nth(self.step_minus_one)
        }
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        let step = self.step_minus_one + 1;
        let (lower, upper) = self.seq.size_hint();

        let scale = |n: usize| {
            if self.first_take { n.div_ceil(step) } else { n / step }
        };

        (scale(lower), upper.map(scale))
    }
}
