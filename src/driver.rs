use crate::Return;
use crate::Yield;
use crate::coro::Coro;
use crate::factory::Factory;
use crate::fixed_point::FixedPointCoro;
use crate::suspended::Suspended;

/// A computation factory bound to the fallback value it bails out with.
///
/// Created by [`short_circuit`](crate::short_circuit),
/// [`Configured::wrap`](crate::Configured::wrap) or
/// [`resolve`](crate::resolve). The binding never changes after that, and
/// every [`call`](Self::call) starts an independent computation, so one
/// `ShortCircuit` can be called any number of times (or shared by reference
/// between threads, when the fallback and factory allow it).
#[derive(Clone, Debug)]
pub struct ShortCircuit<R, F> {
    fallback: R,
    factory: F,
}

impl<R, F> ShortCircuit<R, F> {
    pub(crate) fn new(fallback: R, factory: F) -> Self {
        Self { fallback, factory }
    }

    /// The value every call returns when its computation yields the empty
    /// marker.
    pub fn fallback(&self) -> &R {
        &self.fallback
    }

    /// Starts a computation with `args` and drives it to the end.
    ///
    /// Each value the computation produces is resumed straight back into it.
    /// The result is the computation's own return value, unless one of the
    /// produced values is the empty marker, in which case the result is a
    /// clone of the fallback and nothing after that suspension point runs.
    ///
    /// A panic inside the computation is not caught.
    pub fn call<A, T>(&self, args: A) -> R
    where
        F: Factory<A, T, R>,
        R: Clone,
    {
        drive(self.factory.start(args), &self.fallback)
    }

    /// Turns this into a plain closure with the same behavior as
    /// [`call`](Self::call).
    ///
    /// ```rust
    /// use bailout::{Returned, Yielded, configure_with, from_fn};
    ///
    /// let first_char = configure_with('?')
    ///     .wrap(|s: &'static str| {
    ///         Yielded(s.chars().next(), from_fn(|c: char| Returned(c)))
    ///     })
    ///     .into_fn();
    /// let firsts: Vec<char> = ["abc", "", "xyz"].into_iter().map(first_char).collect();
    /// assert_eq!(firsts, ['a', '?', 'x']);
    /// ```
    pub fn into_fn<A, T>(self) -> impl Fn(A) -> R
    where
        F: Factory<A, T, R>,
        R: Clone,
    {
        move |args| self.call(args)
    }

    /// Like [`call`](Self::call), for factories that start a fixed-point
    /// coroutine. Runs any number of steps in constant stack space.
    ///
    /// ```rust
    /// use bailout::{Coro, Return, Suspend, Yield, configure_with};
    ///
    /// struct Collatz;
    /// impl Coro<u64, Option<u64>, &'static str> for Collatz {
    ///     type Next = Self;
    ///     type Suspend = Suspend<Option<u64>, &'static str, Self>;
    ///     fn resume(self, n: u64) -> Self::Suspend {
    ///         match n {
    ///             1 => Return("reached one"),
    ///             n if n % 2 == 0 => Yield(Some(n / 2), self),
    ///             n => Yield(n.checked_mul(3).and_then(|n| n.checked_add(1)), self),
    ///         }
    ///     }
    /// }
    ///
    /// let collatz = configure_with("overflowed").wrap(|n: u64| Collatz.resume(n));
    /// assert_eq!(collatz.call_fixed_point(27), "reached one");
    /// assert_eq!(collatz.call_fixed_point(u64::MAX), "overflowed");
    /// ```
    pub fn call_fixed_point<A, T>(&self, args: A) -> R
    where
        F: Factory<A, T, R>,
        <<F as Factory<A, T, R>>::Suspend as Suspended<T, Option<T>, R>>::Next:
            FixedPointCoro<T, Option<T>, R>,
        R: Clone,
    {
        drive_fixed_point(self.factory.start(args), &self.fallback)
    }
}

/// Drives a started computation until it returns or yields the empty marker.
///
/// `Yield(Some(v), next)` resumes `next` with `v`. `Yield(None, _)` drops the
/// rest of the computation and returns a clone of `fallback`. `Return(r)`
/// returns `r`.
///
/// Every state may have its own type, so each step is a nested call and the
/// stack grows with the number of steps taken. That depth is bounded by the
/// types of a `from_fn()` chain. A coroutine that resumes itself an unbounded
/// number of times goes through [`drive_fixed_point`] instead.
pub fn drive<T, R, S>(suspend: S, fallback: &R) -> R
where
    S: Suspended<T, Option<T>, R>,
    R: Clone,
{
    step(suspend, fallback, 0)
}

fn step<T, R, S>(suspend: S, fallback: &R, index: usize) -> R
where
    S: Suspended<T, Option<T>, R>,
    R: Clone,
{
    match suspend.into_enum() {
        Yield(Some(produced), next) => {
            tracing::trace!(step = index, "resuming with produced value");
            step(next.resume(produced), fallback, index + 1)
        }
        Yield(None, _) => bail_out(fallback, index),
        Return(r) => finish(r, index),
    }
}

/// Same as [`drive`], for computations whose every later state is the same
/// fixed-point coroutine.
///
/// The state is replaced in place on each step, so the number of steps is
/// not limited by the stack.
///
/// ```rust
/// use bailout::{Coro, Return, Suspend, Yield, drive_fixed_point};
///
/// struct Sum(u64);
/// impl Coro<u64, Option<u64>, u64> for Sum {
///     type Next = Self;
///     type Suspend = Suspend<Option<u64>, u64, Self>;
///     fn resume(self, n: u64) -> Self::Suspend {
///         match n {
///             0 => Return(self.0),
///             n => Yield(Some(n - 1), Sum(self.0 + n)),
///         }
///     }
/// }
///
/// let start = Sum(0).resume(1_000_000);
/// assert_eq!(drive_fixed_point(start, &0), 500_000_500_000);
/// ```
pub fn drive_fixed_point<T, R, S>(suspend: S, fallback: &R) -> R
where
    S: Suspended<T, Option<T>, R>,
    S::Next: FixedPointCoro<T, Option<T>, R>,
    R: Clone,
{
    let (mut produced, mut coro) = match suspend.into_enum() {
        Yield(produced, next) => (produced, next),
        Return(r) => return finish(r, 0),
    };
    let mut index = 0;
    loop {
        let Some(value) = produced else {
            return bail_out(fallback, index);
        };
        tracing::trace!(step = index, "resuming with produced value");
        index += 1;
        match coro.resume(value).into_enum() {
            Yield(next_produced, next) => {
                produced = next_produced;
                coro = next;
            }
            Return(r) => return finish(r, index),
        }
    }
}

fn bail_out<R: Clone>(fallback: &R, index: usize) -> R {
    tracing::debug!(
        step = index,
        "computation yielded the empty marker, returning fallback"
    );
    fallback.clone()
}

fn finish<R>(r: R, steps: usize) -> R {
    tracing::trace!(steps, "computation returned");
    r
}
