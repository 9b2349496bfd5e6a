//! Small algebraic building blocks for code that wants absence,
//! alternatives, and failure to be ordinary, inspectable values.
//!
//! Three closed two-variant sum types, each immutable after construction:
//!
//! - [`Maybe`] — a value that is [`Present`](maybe::Present) or
//!   [`Absent`](maybe::Absent),
//! - [`Either`] — exactly one of two typed alternatives,
//!   [`Left`](either::Left) or [`Right`](either::Right),
//! - [`Trial`] — the recorded outcome of a fallible computation, a success
//!   value or a [`CapturedFailure`].
//!
//! They build on each other in that order: [`Either`] narrows into
//! [`Maybe`], and [`Trial`] exposes its failure-or-value view as an
//! [`Either`]. Everything is synchronous, pure value manipulation; the one
//! side effect in the crate is [`Trial::attempt`] invoking the computation
//! it is given, exactly once.

pub mod either;
pub mod maybe;
pub mod trial;

pub use either::Either;
pub use maybe::Maybe;
pub use trial::{CapturedFailure, Trial};
