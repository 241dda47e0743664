use super::{Link, LinkedList};
use crate::sentinel::Sentinel;
use crate::sequence::Sequence;

use Sentinel::{Absent, Present};

/// A [`Sequence`] which walks a [`LinkedList`], unlinking and producing every element a
/// predicate matches. See [`LinkedList::extract_if`].
///
/// Elements are only removed as they are produced; dropping this early leaves everything it
/// hasn't reached still linked.
pub struct ExtractIf<'a, T, F: FnMut(&mut T) -> bool> {
    pub(crate) list: &'a mut LinkedList<T>,
    pub(crate) next: Link<T>,
    pub(crate) pred: F,
}

impl<'a, T, F: FnMut(&mut T) -> bool> Sequence for ExtractIf<'a, T, F> {
    type Item = T;

    fn next(&mut self) -> Sentinel<T> {
        while let Some(mut ptr) = self.next {
            self.next = *ptr.next();
            if (self.pred)(ptr.value_mut()) {
                return Present(self.list.unlink(ptr));
            }
        }
        Absent
    }

    fn size_hint(&self) -> (usize, Sentinel<usize>) {
        (0, Present(self.list.len()))
    }
}
