use crate::driver;
use crate::fixed_point::FixedPointCoro;
use crate::suspended::Suspended;

/// A suspendable computation that can be resumed with an input value of type
/// `I`, returning a suspended state that either "yields" a value of type `Y`
/// or "returns" a value of type `R`.
///
/// `resume()` consumes the coroutine. The caller gets a new coroutine to
/// continue `resume()`-ing *only* if the coroutine yielded. Once it has
/// returned there is nothing left to resume, so a driver cannot accidentally
/// keep stepping a finished computation, and a driver that stops early simply
/// drops the remaining state without running any more of it.
///
/// That second property is what the short-circuiting driver relies on: when a
/// step yields the empty marker, the coroutine handed back with it is dropped
/// on the floor and none of its remaining steps execute.
///
/// There is no `Pin` here. Coroutines are hand-written state machines or
/// chains of `from_fn()` closures, so they never borrow from themselves and
/// may be moved between steps.
pub trait Coro<I, Y, R>: Sized {
    /// The next state of the coroutine after a call to `resume()`, if the
    /// coroutine yields a value.
    ///
    /// If the coroutine can only return, `Next` may be `Void`. If the whole
    /// state machine fits in a single type, `Next` is usually `Self`.
    type Next: Coro<I, Y, R>;

    /// The suspended state produced by `resume()`.
    ///
    /// Usually `Suspend<Y, R, Self::Next>`, but any `Suspended` type works.
    /// Steps that are statically known to yield or to return can use
    /// `Yielded`, `Bare` or `Returned` instead.
    type Suspend: Suspended<I, Y, R, Next = Self::Next>;

    /// Resumes the coroutine with the given input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::{Coro, Return, Suspend, Void, from_fn};
    ///
    /// let double = from_fn(|n: i32| -> Suspend<Option<i32>, i32, Void> {
    ///     Return(n * 2)
    /// });
    /// assert!(matches!(double.resume(21), Return(42)));
    /// ```
    fn resume(self, input: I) -> Self::Suspend;

    /// Resumes this coroutine with `input`, then keeps feeding every value it
    /// yields straight back into it until it either returns or yields the
    /// empty marker.
    ///
    /// On return, the coroutine's own return value is the result. On an empty
    /// yield, the coroutine is dropped without being resumed again and
    /// `fallback` is the result.
    ///
    /// This is the loop `ShortCircuit::call_fixed_point` runs, for the case
    /// where you already hold a fixed-point coroutine that wants an input
    /// before its first step. The state is overwritten in place, so there is
    /// no limit on the number of steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bailout::{Coro, Return, Suspend, Yield};
    ///
    /// struct Halve;
    /// impl Coro<u32, Option<u32>, u32> for Halve {
    ///     type Next = Self;
    ///     type Suspend = Suspend<Option<u32>, u32, Self>;
    ///     fn resume(self, n: u32) -> Self::Suspend {
    ///         match n {
    ///             1 => Return(1),
    ///             n if n % 2 == 0 => Yield(Some(n / 2), self),
    ///             _ => Yield(None, self),
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(Halve.short_circuit(64, 0), 1);
    /// assert_eq!(Halve.short_circuit(48, 0), 0);
    /// assert_eq!(Halve.short_circuit(1 << 31, 0), 1);
    /// ```
    fn short_circuit<T>(self, input: T, fallback: R) -> R
    where
        Self: FixedPointCoro<T, Option<T>, R>,
        R: Clone,
    {
        let first = <Self as Coro<T, Option<T>, R>>::resume(self, input);
        driver::drive_fixed_point(first, &fallback)
    }
}
