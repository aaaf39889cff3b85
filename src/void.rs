use crate::coro::Coro;
use crate::suspend::Suspend;

enum Never {}

/// A coroutine that can never exist, standing in for the never type `!`.
///
/// `Returned` uses `Void` as its `Next` state: a step that has returned has
/// nothing left to resume, and `Void` proves it at compile time.
pub struct Void(Never);

impl<I, Y, R> Coro<I, Y, R> for Void {
    type Next = Void;
    type Suspend = Suspend<Y, R, Void>;
    fn resume(self, _: I) -> Self::Suspend {
        match self.0 {}
    }
}
