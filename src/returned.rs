use crate::suspended::Suspended;
use crate::suspended::SuspendedVisitor;
use crate::void::Void;

/// A suspension that is statically known to be the computation's completion.
///
/// Because `Returned` is generic over the yield and input types, it fits any
/// step of any computation. A factory that returns `Returned` straight away
/// is a computation that finishes without producing anything, and its value is
/// the result of the call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Returned<R>(pub R);

impl<I, Y, R> Suspended<I, Y, R> for Returned<R> {
    type Next = Void;
    fn visit<X>(
        self,
        visitor: impl SuspendedVisitor<I, Y, R, Void, Out = X>,
    ) -> X {
        let Self(r) = self;
        visitor.on_return(r)
    }
}
