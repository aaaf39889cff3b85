use crate::coro::Coro;

/// A refinement of `Coro` for coroutines whose `Next` state is `Self`.
///
/// Every step of such a coroutine has the same type, so a driver can keep the
/// current state in one variable and overwrite it after each `resume()`. That
/// is what lets [`drive_fixed_point`](crate::drive_fixed_point) and
/// [`Coro::short_circuit`] run for any number of steps in constant stack
/// space.
///
/// ```rust
/// use bailout::{Coro, FixedPointCoro, Return, Suspend, Yield};
///
/// struct Digits;
/// impl Coro<u32, Option<u32>, bool> for Digits {
///     type Next = Self;
///     type Suspend = Suspend<Option<u32>, bool, Self>;
///     fn resume(self, n: u32) -> Self::Suspend {
///         match n {
///             0 => Yield(None, self),
///             1..=9 => Return(true),
///             n => Yield(Some(n / 10), self),
///         }
///     }
/// }
///
/// fn leads_with_nonzero(coro: impl FixedPointCoro<u32, Option<u32>, bool>, n: u32) -> bool {
///     coro.short_circuit(n, false)
/// }
/// assert!(leads_with_nonzero(Digits, 12345));
/// assert!(!leads_with_nonzero(Digits, 0));
/// ```
///
/// There is no need to implement this trait by hand: every `Coro` whose
/// `Next` is `Self` implements it automatically.
pub trait FixedPointCoro<I, Y, R>: Coro<I, Y, R, Next = Self> {}

impl<I, Y, R, C> FixedPointCoro<I, Y, R> for C where C: Coro<I, Y, R, Next = C> {}
