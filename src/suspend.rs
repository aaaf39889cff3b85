use crate::coro::Coro;
use crate::suspended::Suspended;
use crate::suspended::SuspendedVisitor;

/// Where a computation stopped after a call to `resume()`.
///
///   * `Yield(y, n)`: the computation produced `y` and can be resumed through
///     `n`. For short-circuited computations `y` is an `Option`, and a `None`
///     here is the empty marker that makes the driver bail out.
///   * `Return(r)`: the computation ran to completion with `r`. There is no
///     next state, so it cannot be resumed again.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Suspend<Y, R, N> {
    Yield(Y, N),
    Return(R),
}

use Suspend::*;

impl<I, Y, R, N> Suspended<I, Y, R> for Suspend<Y, R, N>
where
    N: Coro<I, Y, R>,
{
    type Next = N;
    fn visit<X>(
        self,
        visitor: impl SuspendedVisitor<I, Y, R, N, Out = X>,
    ) -> X {
        match self {
            Yield(y, next) => visitor.on_yield(y, next),
            Return(r) => visitor.on_return(r),
        }
    }

    fn into_enum(self) -> Suspend<Y, R, N> {
        self
    }
}
