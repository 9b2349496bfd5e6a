//! Outcome of a computation that can fail.
//!
//! [`Trial::attempt`] runs a fallible computation and turns its outcome into
//! a value: either the produced result, or the failure it raised, captured
//! inert as a [`CapturedFailure`]. Only recoverable failures (typed
//! [`std::error::Error`] values) are captured; a panic is the fatal class
//! and unwinds straight out of `attempt`.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::panic::resume_unwind;

use thiserror::Error;

use crate::either::Either;
use crate::maybe::{Absent, Maybe, Present};

/// The result of a computation handed to [`Trial::attempt`]: a success value
/// or a captured failure.
///
/// There is no other way to build one; the variants stay private so every
/// `Trial` in existence is the recorded outcome of exactly one computation.
/// Two successes are equal iff their values are; two failures are equal iff
/// their captured failures are (same error type, same message).
#[derive(PartialEq, Eq)]
pub struct Trial<T>(Inner<T>);

#[derive(PartialEq, Eq)]
enum Inner<T> {
    Success(T),
    Failure(CapturedFailure),
}

impl<T> Trial<T> {
    /// Invokes `computation` exactly once, synchronously, in the calling
    /// context, and records its outcome.
    ///
    /// A returned `Err` is the recoverable class and becomes the failure
    /// case, captured with its runtime type identity, its rendered message,
    /// and the original error value itself. Panics are not intercepted and
    /// unwind out of `attempt` immediately.
    pub fn attempt<E, F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: std::error::Error + Send + 'static,
    {
        match computation() {
            Ok(value) => Trial(Inner::Success(value)),
            Err(error) => Trial(Inner::Failure(CapturedFailure::capture(error))),
        }
    }

    /// True iff the computation returned a value.
    pub fn is_success(&self) -> bool {
        match &self.0 {
            Inner::Success(_) => true,
            Inner::Failure(_) => false,
        }
    }

    /// True iff the computation raised a recoverable failure.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value, or re-raises the captured failure.
    ///
    /// Re-raising propagates the original error value itself as the panic
    /// payload, so an unwinding observer can downcast back to the concrete
    /// error type and read the exact message. Use
    /// [`get_or_fallback`](Self::get_or_fallback) to stay in value land.
    pub fn get(self) -> T {
        match self.0 {
            Inner::Success(value) => value,
            Inner::Failure(failure) => failure.re_raise(),
        }
    }

    /// Converts the outcome into a disjoint union: `Right(value)` on
    /// success, `Left(failure)` on failure. Total, never raises.
    pub fn get_or_fallback(self) -> Either<CapturedFailure, T> {
        match self.0 {
            Inner::Success(value) => Either::Right(value),
            Inner::Failure(failure) => Either::Left(failure),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Trial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Inner::Failure(failure) => f.debug_tuple("Failure").field(failure).finish(),
        }
    }
}

/// A recoverable failure, captured as an inert, comparable value.
///
/// Holds the runtime type identity of the original error, its rendered
/// message, and the original value itself. Nothing is raised until
/// [`Trial::get`] re-raises it.
#[derive(Error)]
#[error("{type_name}: {message}")]
pub struct CapturedFailure {
    type_id: TypeId,
    type_name: &'static str,
    message: String,
    original: Box<dyn Any + Send>,
}

impl CapturedFailure {
    fn capture<E>(error: E) -> Self
    where
        E: std::error::Error + Send + 'static,
    {
        Self {
            type_id: TypeId::of::<E>(),
            type_name: type_name::<E>(),
            message: error.to_string(),
            original: Box::new(error),
        }
    }

    /// The message the original error rendered at capture time.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The full type name of the original error.
    pub fn failure_type(&self) -> &'static str {
        self.type_name
    }

    /// True iff the original error was an `E`.
    pub fn is<E: Any>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }

    /// Borrows the original error as a concrete `E`, when it was one.
    pub fn downcast_ref<E: Any>(&self) -> Maybe<&E> {
        match self.original.downcast_ref::<E>() {
            Some(error) => Present(error),
            None => Absent,
        }
    }

    fn re_raise(self) -> ! {
        resume_unwind(self.original)
    }
}

/// Equality is runtime type identity plus message; the captured value
/// itself carries no further distinguishing state for comparison purposes.
impl PartialEq for CapturedFailure {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.message == other.message
    }
}

impl Eq for CapturedFailure {}

impl fmt::Debug for CapturedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedFailure")
            .field("failure_type", &self.type_name)
            .field("message", &self.message)
            .finish()
    }
}
