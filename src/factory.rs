use crate::suspended::Suspended;

/// Something that starts a fresh short-circuitable computation from a call's
/// arguments.
///
/// Starting a computation means running it up to its first suspension point,
/// so the factory hands back a `Suspended` rather than a coroutine waiting for
/// input. A factory that returns `Returned` finishes without producing any
/// value at all.
///
/// Every closure `Fn(A) -> S` where `S` suspends with `Option<T>` is a
/// factory. Calls that take several arguments pass them as a tuple.
pub trait Factory<A, T, R> {
    type Suspend: Suspended<T, Option<T>, R>;
    fn start(&self, args: A) -> Self::Suspend;
}

impl<A, T, R, S, F> Factory<A, T, R> for F
where
    F: Fn(A) -> S,
    S: Suspended<T, Option<T>, R>,
{
    type Suspend = S;
    fn start(&self, args: A) -> S {
        self(args)
    }
}
