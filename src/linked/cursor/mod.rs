//! Bi-directional traversal and splicing over a [`LinkedList`](crate::linked::LinkedList),
//! through a mutable borrow of it.

mod cursor;

pub use cursor::*;
