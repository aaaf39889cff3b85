use crate::coro::Coro;
use crate::suspended::Suspended;

/// A single step of a computation, built from a closure.
///
/// See [`from_fn`].
#[derive(Clone, Debug)]
pub struct FromFn<F>(F);

impl<I, Y, R, N, S, F> Coro<I, Y, R> for FromFn<F>
where
    F: FnOnce(I) -> S,
    S: Suspended<I, Y, R, Next = N>,
    N: Coro<I, Y, R>,
{
    type Next = N;
    type Suspend = S;
    fn resume(self, input: I) -> Self::Suspend {
        let Self(f) = self;
        f(input)
    }
}

/// Creates a step of a computation from a closure that receives the resumed
/// value and returns the next suspension.
///
/// Nesting `from_fn()` calls writes a computation top to bottom, one
/// suspension point per level, with each closure seeing every value resumed
/// into the levels above it:
///
/// ```rust
/// use bailout::{Returned, Yielded, from_fn, short_circuit};
///
/// #[rustfmt::skip]
/// let sum = short_circuit::<Option<i32>, _>(|(a, b): (Option<i32>, Option<i32>)| {
///     Yielded(a, from_fn(move |a: i32| {
///     Yielded(b, from_fn(move |b: i32| {
///     Returned(Some(a + b)) })) }))
/// });
/// assert_eq!(sum.call((Some(1), Some(2))), Some(3));
/// assert_eq!(sum.call((None, Some(2))), None);
/// assert_eq!(sum.call((Some(1), None)), None);
/// ```
///
/// The state machine built this way is entirely known at compile time: each
/// level has its own type whose `Next` points at the level below it.
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}
