//! One of two typed alternatives.
//!
//! [`Either`] is the shared vocabulary for "one of two typed outcomes". By
//! convention [`Left`] carries the alternate or error case and [`Right`] the
//! preferred one, which is how [`Trial`](crate::Trial) uses it to expose a
//! failure-or-value view without raising anything.

use crate::maybe::{Absent, Maybe, Present};

pub use Either::{Left, Right};

/// A value of one of two possible types.
///
/// The variant constructors are the factories: `Left(v)` and `Right(v)` are
/// total and pure. Equality is structural and variant-aware; a `Left` never
/// equals a `Right` no matter the payloads, and comparing different
/// `(L, R)` instantiations does not type-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The alternate case.
    Left(L),
    /// The preferred case.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// True iff this was built with [`Left`].
    pub fn is_left(&self) -> bool {
        match self {
            Left(_) => true,
            Right(_) => false,
        }
    }

    /// True iff this was built with [`Right`].
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics with `"Right cannot return its left value"` when called on
    /// [`Right`]. Use [`try_left`](Self::try_left) for the total version.
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Left(value) => value,
            Right(_) => panic!("Right cannot return its left value"),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics with `"Left cannot return its right value"` when called on
    /// [`Left`]. Use [`try_right`](Self::try_right) for the total version.
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Left(_) => panic!("Left cannot return its right value"),
            Right(value) => value,
        }
    }

    /// Narrows to the left side: `Present` iff [`Left`], otherwise `Absent`.
    /// Never panics.
    pub fn try_left(self) -> Maybe<L> {
        match self {
            Left(value) => Present(value),
            Right(_) => Absent,
        }
    }

    /// Narrows to the right side: `Present` iff [`Right`], otherwise
    /// `Absent`. Never panics.
    pub fn try_right(self) -> Maybe<R> {
        match self {
            Left(_) => Absent,
            Right(value) => Present(value),
        }
    }

    /// Borrows both sides, leaving the original in place.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(value) => Left(value),
            Right(value) => Right(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};
    use quickcheck_macros::quickcheck;

    #[test]
    fn left_and_right_know_their_side() {
        let l: Either<&str, i32> = Left("alt");
        let r: Either<&str, i32> = Right(3);

        assert!(l.is_left());
        assert!(!l.is_right());
        assert!(r.is_right());
        assert!(!r.is_left());
    }

    #[test]
    fn unwrap_matches_the_side() {
        let l: Either<&str, i32> = Left("alt");
        let r: Either<&str, i32> = Right(3);

        assert_eq!(l.unwrap_left(), "alt");
        assert_eq!(r.unwrap_right(), 3);
    }

    #[test]
    #[should_panic(expected = "Left cannot return its right value")]
    fn left_refuses_its_right_value() {
        let l: Either<&str, i32> = Left("alt");
        l.unwrap_right();
    }

    #[test]
    #[should_panic(expected = "Right cannot return its left value")]
    fn right_refuses_its_left_value() {
        let r: Either<&str, i32> = Right(3);
        r.unwrap_left();
    }

    #[test]
    fn try_accessors_are_total() {
        let l: Either<&str, i32> = Left("alt");
        let r: Either<&str, i32> = Right(3);

        assert_eq!(l.try_left(), Present("alt"));
        assert!(l.try_right().is_absent());
        assert_eq!(r.try_right(), Present(3));
        assert!(r.try_left().is_absent());
    }

    #[test]
    fn equality_discriminates_the_variant() {
        assert_ne!(Either::<&str, &str>::Left("x"), Right("x"));
        assert_eq!(Either::<&str, i32>::Left("fuga"), Left("fuga"));
        assert_ne!(Either::<&str, i32>::Right(1), Right(2));
    }

    // `Either<String, i32>` against `Either<io::Error, String>` is a type
    // error, so the cross-instantiation case from the equality contract
    // needs no runtime test.

    #[quickcheck]
    fn narrowing_agrees_with_the_predicates(left: bool, v: i64) -> bool {
        let e: Either<i64, i64> = if left { Left(v) } else { Right(v) };

        e.as_ref().try_left().is_present() == e.is_left()
            && e.as_ref().try_right().is_present() == e.is_right()
    }

    #[quickcheck]
    fn round_trips_into_maybe(v: i64) -> bool {
        Either::<i64, u8>::Left(v).try_left() == Present(v)
            && Either::<u8, i64>::Right(v).try_right() == Present(v)
    }
}
