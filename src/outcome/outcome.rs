use std::fmt::Debug;

use derive_more::IsVariant;

use crate::sentinel::Sentinel;

#[doc(inline)]
pub use Outcome::{Failure, Success};
use Sentinel::*;

/// The result of an operation which either succeeded with a value of type `T` or failed with an
/// error of type `E`.
///
/// Which side is live is recorded in the enum tag and nowhere else: a [`Success`] wrapping a value
/// which happens to be an error type is still a success. There is no way to construct an Outcome
/// which is both, or neither.
///
/// As with [`Sentinel`], everything here is total except the `unwrap`/`expect` family, which
/// panics when invoked on the wrong side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Outcome<T, E> {
    /// The operation succeeded, producing a value of type `T`.
    Success(T),
    /// The operation failed with an error of type `E`.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    pub const fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Projects the success side into a [`Sentinel`], discarding any error.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::outcome::Outcome::{self, *};
    /// # use utility_lib::sentinel::Sentinel::*;
    /// assert_eq!(Outcome::<_, &str>::Success(2).ok(), Present(2));
    /// assert_eq!(Outcome::<u8, _>::Failure("gone").ok(), Absent);
    /// ```
    pub fn ok(self) -> Sentinel<T> {
        match self {
            Success(value) => Present(value),
            Failure(_) => Absent,
        }
    }

    /// Projects the failure side into a [`Sentinel`], discarding any success value.
    pub fn err(self) -> Sentinel<E> {
        match self {
            Success(_) => Absent,
            Failure(error) => Present(error),
        }
    }

    /// Maps the success value with the provided function, passing a failure through untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the error value with the provided function, passing a success through untouched.
    pub fn map_err<F, O: FnOnce(E) -> F>(self, f: O) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Maps the success value with the provided function, or returns the provided default.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    /// Maps the success value with `f`, or the error value with `default`.
    pub fn map_or_else<U, D: FnOnce(E) -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            Success(value) => f(value),
            Failure(error) => default(error),
        }
    }

    /// Calls the provided function with a reference to the success value, if any, and returns
    /// self unchanged.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Outcome<T, E> {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls the provided function with a reference to the error value, if any, and returns self
    /// unchanged.
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Outcome<T, E> {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Returns `other` if self is a success, otherwise the failure.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Calls the provided function with the success value and returns the resulting Outcome,
    /// short-circuiting on failure.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Success(value) => f(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns self if it is a success, otherwise `other`.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(_) => other,
        }
    }

    /// Returns self if it is a success, otherwise calls the provided function with the error.
    pub fn or_else<F, O: FnOnce(E) -> Outcome<T, F>>(self, f: O) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error),
        }
    }

    /// Returns the success value, or the provided default on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Returns the success value, or `T::default()` on failure.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    /// Returns the success value, panicking with the provided message on failure.
    ///
    /// # Panics
    /// Panics if self is a [`Failure`], with a message combining `msg` and the error.
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => panic!("{}: {:?}", msg, error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics if self is a [`Failure`], with a message embedding the error.
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        self.expect("Attempted to unwrap a failed Outcome")
    }

    /// Returns the error value, panicking with the provided message on success.
    ///
    /// # Panics
    /// Panics if self is a [`Success`], with a message combining `msg` and the value.
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Success(value) => panic!("{}: {:?}", msg, value),
            Failure(error) => error,
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    /// Panics if self is a [`Success`], with a message embedding the value.
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        self.expect_err("Attempted to unwrap the error of a successful Outcome")
    }
}

impl<T, E> Outcome<Sentinel<T>, E> {
    /// Swaps the nesting of an [`Outcome`] of a [`Sentinel`] into a Sentinel of an Outcome.
    ///
    /// `Success(Absent)` maps to [`Absent`]; a failure is always considered present.
    pub fn transpose(self) -> Sentinel<Outcome<T, E>> {
        match self {
            Success(Present(value)) => Present(Success(value)),
            Success(Absent) => Absent,
            Failure(error) => Present(Failure(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Outcome<T, E> {
        match value {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Result<T, E> {
        match value {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}
