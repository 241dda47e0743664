//! An optional value, represented with an explicit tag rather than a null. Revolves around
//! [`Sentinel`] and its two variants, [`Present`] and [`Absent`].

mod sentinel;

pub use sentinel::*;
