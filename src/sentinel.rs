//! The empty marker.
//!
//! A short-circuited computation yields `Option<T>`. `Some(v)` is an ordinary
//! produced value that the driver passes straight back in; `None` is the
//! empty marker, and producing it ends the call with the fallback value.
//!
//! A suspension that carries no value at all (`Bare`) is the same thing as
//! producing `None`. The two spellings exist so a step can say which one it
//! means, not because the driver treats them differently.

use crate::coro::Coro;
use crate::suspended::Suspended;
use crate::suspended::SuspendedVisitor;

/// A suspension without a payload.
///
/// `Bare(next)` is indistinguishable from `Yielded(None, next)` to the
/// driver: the call ends with the fallback and `next` is dropped unresumed.
///
/// ```rust
/// use bailout::{Bare, Returned, from_fn, short_circuit};
///
/// let wrapped = short_circuit::<i32, _>(|()| {
///     Bare(from_fn(|_: i32| -> Returned<i32> { unreachable!() }))
/// });
/// assert_eq!(wrapped.call(()), 0);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Bare<N>(pub N);

impl<I, T, R, N> Suspended<I, Option<T>, R> for Bare<N>
where
    N: Coro<I, Option<T>, R>,
{
    type Next = N;
    fn visit<X>(
        self,
        visitor: impl SuspendedVisitor<I, Option<T>, R, N, Out = X>,
    ) -> X {
        let Self(next) = self;
        visitor.on_yield(None, next)
    }
}
