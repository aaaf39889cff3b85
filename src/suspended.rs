use crate::coro::Coro;
use crate::suspend::Suspend;

pub trait SuspendedVisitor<I, Y, R, N>
where
    N: Coro<I, Y, R>,
{
    type Out;
    fn on_yield(self, y: Y, next: N) -> Self::Out;
    fn on_return(self, r: R) -> Self::Out;
}

/// A computation stopped at a suspension point.
///
/// `visit()` is pattern-matching on `Suspend` in trait form, and `into_enum()`
/// converts any implementation back into a `Suspend`, so the two are
/// isomorphic. The trait exists so a step can return something more specific
/// than `Suspend<Y, R, N>` when its outcome is known statically: `Yielded`
/// always yields, `Bare` always yields the empty marker, and `Returned` always
/// returns.
///
/// A computation factory returns a `Suspended`: calling the factory starts the
/// computation and runs it up to its first suspension point.
pub trait Suspended<I, Y, R>: Sized {
    type Next: Coro<I, Y, R>;
    fn visit<X>(
        self,
        visitor: impl SuspendedVisitor<I, Y, R, Self::Next, Out = X>,
    ) -> X;

    fn into_enum(self) -> Suspend<Y, R, Self::Next> {
        self.visit({
            use Suspend::*;
            struct AsEnum;
            impl<I, Y, R, N> SuspendedVisitor<I, Y, R, N> for AsEnum
            where
                N: Coro<I, Y, R>,
            {
                type Out = Suspend<Y, R, N>;
                fn on_yield(self, y: Y, next: N) -> Self::Out {
                    Yield(y, next)
                }
                fn on_return(self, r: R) -> Self::Out {
                    Return(r)
                }
            }
            AsEnum
        })
    }
}
