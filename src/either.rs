use either::Either;
use either::Either::Left;
use either::Either::Right;

use crate::coro::Coro;
use crate::suspend::Suspend;
use crate::suspend::Suspend::Return;
use crate::suspend::Suspend::Yield;
use crate::suspended::Suspended;
use crate::suspended::SuspendedVisitor;

/// A step that picks one of two continuations at run time.
///
/// Nested `from_fn()` closures give every step its own type, so two branches
/// of an `if` that continue differently do not unify. Wrapping them in `Left`
/// and `Right` does.
impl<I, Y, R, A, B> Coro<I, Y, R> for Either<A, B>
where
    A: Coro<I, Y, R>,
    B: Coro<I, Y, R>,
{
    type Next = Either<A::Next, B::Next>;
    type Suspend = Suspend<Y, R, Self::Next>;
    fn resume(self, input: I) -> Self::Suspend {
        match self {
            Left(a) => match a.resume(input).into_enum() {
                Yield(y, next) => Yield(y, Left(next)),
                Return(r) => Return(r),
            },
            Right(b) => match b.resume(input).into_enum() {
                Yield(y, next) => Yield(y, Right(next)),
                Return(r) => Return(r),
            },
        }
    }
}

/// The same for suspensions, so a factory can return `Left(Returned(..))` on
/// one branch and `Right(Yielded(..))` on another.
///
/// ```rust
/// use bailout::{Returned, Yielded, from_fn, short_circuit};
/// use either::Either::{Left, Right};
///
/// let halve = short_circuit::<i32, _>(|n: i32| {
///     if n == 0 {
///         Left(Returned(0))
///     } else {
///         let half = (n % 2 == 0).then_some(n / 2);
///         Right(Yielded(half, from_fn(|half: i32| Returned(half))))
///     }
/// });
/// assert_eq!(halve.call(0), 0);
/// assert_eq!(halve.call(8), 4);
/// assert_eq!(halve.call(7), 0);
/// ```
impl<I, Y, R, A, B> Suspended<I, Y, R> for Either<A, B>
where
    A: Suspended<I, Y, R>,
    B: Suspended<I, Y, R>,
{
    type Next = Either<A::Next, B::Next>;
    fn visit<X>(
        self,
        visitor: impl SuspendedVisitor<I, Y, R, Self::Next, Out = X>,
    ) -> X {
        match self {
            Left(a) => match a.into_enum() {
                Yield(y, next) => visitor.on_yield(y, Left(next)),
                Return(r) => visitor.on_return(r),
            },
            Right(b) => match b.into_enum() {
                Yield(y, next) => visitor.on_yield(y, Right(next)),
                Return(r) => visitor.on_return(r),
            },
        }
    }
}
