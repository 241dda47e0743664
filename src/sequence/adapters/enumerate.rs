use crate::sentinel::Sentinel;
use crate::sequence::Sequence;

/// A [`Sequence`] pairing every item with its zero-based position. See [`Sequence::enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    pub(crate) seq: S,
    pub(crate) count: usize,
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn next(&mut self) -> Sentinel<(usize, S::Item)> {
        self.seq.next().map(|item| {
            let index = self.count;
            self.count += 1;
            (index, item)
        })
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        self.seq.size_hint()
    }
}
