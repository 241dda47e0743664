//! A type for operations that either produce a value or fail with an error, with the side
//! recorded in the enum tag. Revolves around [`Outcome`] and its two variants, [`Success`] and
//! [`Failure`].

mod outcome;

pub use outcome::*;
