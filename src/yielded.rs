use crate::coro::Coro;
use crate::suspended::Suspended;
use crate::suspended::SuspendedVisitor;

/// A suspension that is statically known to produce a value `Y` and continue
/// with `N`.
///
/// For short-circuited computations `Y` is an `Option`: `Yielded(Some(v), n)`
/// hands `v` to the driver, which resumes `n` with it, and `Yielded(None, n)`
/// makes the driver bail out without ever touching `n`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Yielded<Y, N>(pub Y, pub N);

impl<I, Y, R, N> Suspended<I, Y, R> for Yielded<Y, N>
where
    N: Coro<I, Y, R>,
{
    type Next = N;
    fn visit<X>(
        self,
        visitor: impl SuspendedVisitor<I, Y, R, N, Out = X>,
    ) -> X {
        let Self(y, n) = self;
        visitor.on_yield(y, n)
    }
}
