//! Presence or absence of a value, made explicit.
//!
//! [`Maybe`] is the base vocabulary of the crate: [`Either`](crate::Either)
//! narrows into it and everything else builds up from there. A value is
//! either [`Present`] with exactly one payload or [`Absent`] with none, fixed
//! at construction.

pub use Maybe::{Absent, Present};

/// A value that may or may not be there.
///
/// The variant constructors are the factories: `Present(v)` and `Absent` are
/// total and pure. Equality is structural, so two `Present` values compare
/// through the payload's own `PartialEq`, and all `Absent` values of one `T`
/// are equal by definition. Comparing across different `T` does not
/// type-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Exactly one value.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    /// True iff this was built with [`Present`].
    pub fn is_present(&self) -> bool {
        match self {
            Present(_) => true,
            Absent => false,
        }
    }

    /// True iff this was built with [`Absent`].
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the contained value.
    ///
    /// There is deliberately no default-value fallback here; check
    /// [`is_present`](Self::is_present) first or keep the `Maybe` as is.
    ///
    /// # Panics
    ///
    /// Panics with `"Absent cannot return its value"` when called on
    /// [`Absent`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Present(value) => value,
            Absent => panic!("Absent cannot return its value"),
        }
    }

    /// Borrows the contents, leaving the original in place.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Applies `f` under [`Present`]; [`Absent`] passes through untouched.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};
    use quickcheck_macros::quickcheck;

    #[test]
    fn present_holds_its_value() {
        let m = Present(7);

        assert!(m.is_present());
        assert!(!m.is_absent());
        assert_eq!(m.unwrap(), 7);
    }

    #[test]
    fn absent_is_empty() {
        let m: Maybe<i32> = Absent;

        assert!(m.is_absent());
        assert!(!m.is_present());
    }

    #[test]
    #[should_panic(expected = "Absent cannot return its value")]
    fn absent_refuses_to_unwrap() {
        let m: Maybe<String> = Absent;
        m.unwrap();
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Present("hoge"), Present("hoge"));
        assert_ne!(Present(1), Present(2));
        assert_ne!(Present(1), Absent);
        assert_eq!(Maybe::<u8>::Absent, Absent);
    }

    #[test]
    fn map_touches_only_present() {
        assert_eq!(Present(2).map(|n| n * 3), Present(6));
        assert_eq!(Maybe::<i32>::Absent.map(|n| n * 3), Absent);
    }

    #[test]
    fn as_ref_preserves_the_variant() {
        let m = Present(String::from("x"));
        let x = String::from("x");

        assert_eq!(m.as_ref(), Present(&x));
        assert!(Maybe::<String>::Absent.as_ref().is_absent());
    }

    #[quickcheck]
    fn present_always_unwraps_to_its_input(v: i64) -> bool {
        Present(v).is_present() && Present(v).unwrap() == v
    }

    #[quickcheck]
    fn equality_is_reflexive_and_symmetric(a: i64, b: i64) -> bool {
        let (x, y) = (Present(a), Present(b));
        x == x && y == y && (x == y) == (y == x)
    }
}
