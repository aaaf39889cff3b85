use crate::Return;
use crate::Yield;
use crate::coro::Coro;
use crate::suspended::Suspended;

/// Assertion helpers for the first suspension of a short-circuitable
/// computation, i.e. whatever its factory returned.
///
/// Together with [`CoroAssertions`], a whole computation can be walked
/// through by hand in one chain:
///
/// ```rust
/// use bailout::{CoroAssertions, Returned, SuspendedAssertions, Yielded, from_fn};
///
/// let start = |()| Yielded(Some(1), from_fn(|n: i32| Returned(n + 1)));
/// start(()).assert_yielded(Some(1)).assert_returns(1, 2);
/// ```
pub trait SuspendedAssertions<T, R>: Suspended<T, Option<T>, R> {
    /// Asserts that this suspension produced `expected` and returns the next
    /// state of the computation. Panics if it returned instead.
    fn assert_yielded(self, expected: Option<T>) -> Self::Next
    where
        T: PartialEq + core::fmt::Debug,
        R: core::fmt::Debug,
    {
        match self.into_enum() {
            Yield(actual, next) => {
                assert_eq!(
                    actual, expected,
                    "expected Yield({expected:?}), got Yield({actual:?})"
                );
                next
            }
            Return(actual) => {
                panic!("expected Yield({expected:?}), got Return({actual:?})")
            }
        }
    }

    /// Asserts that this suspension is the computation returning `expected`.
    /// Panics if it yielded instead.
    fn assert_returned(self, expected: R)
    where
        T: core::fmt::Debug,
        R: PartialEq + core::fmt::Debug,
    {
        match self.into_enum() {
            Yield(actual, _) => {
                panic!("expected Return({expected:?}), got Yield({actual:?})")
            }
            Return(actual) => {
                assert_eq!(
                    actual, expected,
                    "expected Return({expected:?}), got Return({actual:?})"
                );
            }
        }
    }
}

impl<T, R, S> SuspendedAssertions<T, R> for S where S: Suspended<T, Option<T>, R> {}

/// Assertion helpers for a later step of a short-circuitable computation.
///
/// The `input` is what the step is resumed with; a driver would pass the value
/// the previous step produced.
pub trait CoroAssertions<T, R>: Coro<T, Option<T>, R> {
    /// Resumes with `input`, asserts the step produced `expected` and returns
    /// the next state. Panics if the step returned instead.
    fn assert_yields(self, input: T, expected: Option<T>) -> Self::Next
    where
        T: PartialEq + core::fmt::Debug,
        R: core::fmt::Debug,
    {
        self.resume(input).assert_yielded(expected)
    }

    /// Resumes with `input` and asserts the step returned `expected`. Panics
    /// if the step yielded instead.
    fn assert_returns(self, input: T, expected: R)
    where
        T: core::fmt::Debug,
        R: PartialEq + core::fmt::Debug,
    {
        self.resume(input).assert_returned(expected)
    }
}

impl<T, R, C> CoroAssertions<T, R> for C where C: Coro<T, Option<T>, R> {}
