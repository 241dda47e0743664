use derive_more::IsVariant;

use crate::linked::list::{CapacityOverflow, LinkedList, ListState, Node, NodePtr};
use crate::sentinel::Sentinel;
use crate::util::result::ResultExtension;

use Position::*;
use Sentinel::{Absent, Present};

/// A movable position over a [`LinkedList`], for reading, inserting and removing elements
/// wherever it currently points. See [`LinkedList::cursor_front`] and
/// [`LinkedList::cursor_back`] to create one.
///
/// The cursor sees the list as a cycle with one extra "ghost" position sitting between the back
/// and the front. Moving forwards from the ghost steps onto the front; moving backwards from it
/// steps onto the back; walking off either end of the list lands back on the ghost. A fresh
/// cursor starts at the ghost, pointing at nothing yet.
pub struct Cursor<'a, T> {
    pub(crate) pos: Position<T>,
    pub(crate) list: &'a mut LinkedList<T>,
}

#[derive(IsVariant)]
pub(crate) enum Position<T> {
    /// Between the back and the front, pointing at no node.
    Ghost,
    /// On the node at the given index.
    At {
        ptr: NodePtr<T>,
        index: usize,
    },
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the length of the underlying list.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the underlying list is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the index of the current element, or [`Absent`] at the ghost position.
    pub fn index(&self) -> Sentinel<usize> {
        match &self.pos {
            Ghost => Absent,
            At { index, .. } => Present(*index),
        }
    }

    /// Returns a reference to the current element, or [`Absent`] at the ghost position.
    pub fn current(&self) -> Sentinel<&T> {
        match &self.pos {
            Ghost => Absent,
            At { ptr, .. } => Present(ptr.value()),
        }
    }

    /// Returns a mutable reference to the current element, or [`Absent`] at the ghost position.
    pub fn current_mut(&mut self) -> Sentinel<&mut T> {
        match &mut self.pos {
            Ghost => Absent,
            At { ptr, .. } => Present(ptr.value_mut()),
        }
    }

    /// Returns a reference to the element a `move_next` would land on, without moving.
    pub fn peek_next(&self) -> Sentinel<&T> {
        match &self.pos {
            Ghost => self.list.front(),
            At { ptr, .. } => match ptr.next() {
                Some(next) => Present(next.value()),
                None => Absent,
            },
        }
    }

    /// Returns a reference to the element a `move_prev` would land on, without moving.
    pub fn peek_prev(&self) -> Sentinel<&T> {
        match &self.pos {
            Ghost => self.list.back(),
            At { ptr, .. } => match ptr.prev() {
                Some(prev) => Present(prev.value()),
                None => Absent,
            },
        }
    }

    /// Moves to the next element: from the ghost onto the front (if any), and off the back onto
    /// the ghost.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = match &self.pos {
            Ghost => match &self.list.state {
                ListState::Empty => Ghost,
                ListState::Full(contents) => At {
                    ptr: contents.head,
                    index: 0,
                },
            },
            At { ptr, index } => match ptr.next() {
                Some(next) => At {
                    ptr: *next,
                    index: index + 1,
                },
                None => Ghost,
            },
        };
        self
    }

    /// Moves to the previous element: from the ghost onto the back (if any), and off the front
    /// onto the ghost.
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos = match &self.pos {
            Ghost => match &self.list.state {
                ListState::Empty => Ghost,
                ListState::Full(contents) => At {
                    ptr: contents.tail,
                    index: contents.last_index(),
                },
            },
            At { ptr, index } => match ptr.prev() {
                Some(prev) => At {
                    ptr: *prev,
                    index: index - 1,
                },
                None => Ghost,
            },
        };
        self
    }

    /// Inserts a new element immediately after the current one, without moving. At the ghost
    /// position this inserts at the front of the list.
    ///
    /// # Panics
    /// Panics if the new length overflows `usize`.
    pub fn insert_after(&mut self, value: T) {
        match &self.pos {
            Ghost => self.list.push_front(value),
            At { ptr, .. } => {
                // SAFETY: The cursor is on a node, so the list is non-empty.
                let list = unsafe { self.list.state.contents_unchecked() };
                list.len = list.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(Node {
                    value,
                    prev: Some(*ptr),
                    next: *ptr.next(),
                });

                match ptr.next_mut() {
                    Some(second_next) => *second_next.prev_mut() = Some(node),
                    None => list.tail = node,
                }
                *ptr.next_mut() = Some(node);
            },
        }
    }

    /// Inserts a new element immediately before the current one, without moving (the current
    /// element's index grows by one). At the ghost position this inserts at the back of the
    /// list.
    ///
    /// # Panics
    /// Panics if the new length overflows `usize`.
    pub fn insert_before(&mut self, value: T) {
        match &mut self.pos {
            Ghost => self.list.push_back(value),
            At { ptr, index } => {
                // SAFETY: The cursor is on a node, so the list is non-empty.
                let list = unsafe { self.list.state.contents_unchecked() };
                list.len = list.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(Node {
                    value,
                    prev: *ptr.prev(),
                    next: Some(*ptr),
                });

                match ptr.prev_mut() {
                    Some(second_prev) => *second_prev.next_mut() = Some(node),
                    None => list.head = node,
                }
                *ptr.prev_mut() = Some(node);

                *index += 1;
            },
        }
    }

    /// Removes and returns the current element, leaving the cursor on the element that followed
    /// it - or on the ghost, if the removed element was the back. Returns [`Absent`] at the
    /// ghost position, removing nothing.
    pub fn remove_current(&mut self) -> Sentinel<T> {
        match &self.pos {
            Ghost => Absent,
            At { ptr, index } => {
                let (ptr, index) = (*ptr, *index);
                self.pos = match ptr.next() {
                    // The successor inherits the removed element's index.
                    Some(next) => At {
                        ptr: *next,
                        index,
                    },
                    None => Ghost,
                };
                Present(self.list.unlink(ptr))
            },
        }
    }
}
