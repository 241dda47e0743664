//! A lazy, pull-based protocol for producing a series of values, plus a set of chainable
//! adapters over it. Revolves around the [`Sequence`] trait.
//!
//! Every adapter pulls exactly as much of its upstream as it needs to produce one item, so a
//! chain of adapters does no work until something consumes it.

mod adapters;
mod sequence;
mod source;
mod tests;

pub use adapters::*;
pub use sequence::*;
pub use source::*;
