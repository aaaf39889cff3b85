//! Configuring a wrapper before it is applied to a computation factory.
//!
//! Most code uses the typed entry points, which cannot be misconfigured:
//!
//!   * [`short_circuit(factory)`](short_circuit) bails out with
//!     `R::default()`.
//!   * [`configure()`](configure) then [`wrap`](Configured::wrap) does the
//!     same in two steps.
//!   * [`configure_with(value)`](configure_with) then
//!     [`wrap`](Configured::wrap) bails out with `value`.
//!
//! Call sites whose shape is only known at run time (a plugin table, a
//! scripting bridge, a macro expanding user input) describe the arguments with
//! [`Arg`] and go through [`resolve`], which rejects the shapes that make no
//! sense with a [`ConfigError`].

use crate::driver::ShortCircuit;
use crate::error::ConfigError;

/// One positional argument to [`resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arg<R, F> {
    /// A fallback value.
    Value(R),
    /// A computation factory.
    Computation(F),
    /// A callable that never suspends, identified by name.
    Routine(&'static str),
}

/// What a call to [`resolve`] turned out to be.
#[derive(Clone, Debug)]
pub enum Resolved<R, F> {
    /// The wrapper was applied directly to a computation factory.
    Wrapped(ShortCircuit<R, F>),
    /// The wrapper was configured and still has to be applied.
    Configured(Configured<R>),
}

impl<R, F> Resolved<R, F> {
    pub fn wrapped(self) -> Option<ShortCircuit<R, F>> {
        match self {
            Resolved::Wrapped(wrapped) => Some(wrapped),
            Resolved::Configured(_) => None,
        }
    }

    pub fn configured(self) -> Option<Configured<R>> {
        match self {
            Resolved::Wrapped(_) => None,
            Resolved::Configured(configured) => Some(configured),
        }
    }
}

/// A wrapper with its fallback value chosen, waiting for a factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configured<R> {
    fallback: R,
}

impl<R> Configured<R> {
    pub fn fallback(&self) -> &R {
        &self.fallback
    }

    /// Binds the fallback to `factory`.
    pub fn wrap<F>(self, factory: F) -> ShortCircuit<R, F> {
        ShortCircuit::new(self.fallback, factory)
    }

    /// Applies the configured wrapper to a dynamically described target.
    ///
    /// Only a computation factory is accepted. A routine is the wrong kind of
    /// target, and another value would be a second fallback on top of the
    /// configured one.
    pub fn apply<F>(
        self,
        target: Arg<R, F>,
    ) -> Result<ShortCircuit<R, F>, ConfigError> {
        match target {
            Arg::Computation(factory) => {
                tracing::debug!("wrapped computation factory");
                Ok(self.wrap(factory))
            }
            Arg::Routine(target) => {
                tracing::debug!(
                    routine = target,
                    "rejected non-suspending target"
                );
                Err(ConfigError::WrongTargetKind { target })
            }
            Arg::Value(_) => {
                tracing::debug!("rejected second fallback value");
                Err(ConfigError::Ambiguous)
            }
        }
    }
}

/// Wraps `factory` so that it bails out with `R::default()`.
///
/// ```rust
/// use bailout::{Returned, Yielded, from_fn, short_circuit};
///
/// let parse = short_circuit(|s: &str| {
///     Yielded(s.parse::<u8>().ok(), from_fn(|n: u8| Returned(Some(n))))
/// });
/// assert_eq!(parse.call("42"), Some(42));
/// assert_eq!(parse.call("forty-two"), None);
/// ```
pub fn short_circuit<R: Default, F>(factory: F) -> ShortCircuit<R, F> {
    configure().wrap(factory)
}

/// Configures a wrapper that bails out with `R::default()`.
pub fn configure<R: Default>() -> Configured<R> {
    configure_with(R::default())
}

/// Configures a wrapper that bails out with `value`.
///
/// `value` can be anything, including `None` or a function.
pub fn configure_with<R>(value: R) -> Configured<R> {
    Configured { fallback: value }
}

/// Works out what a wrapper invoked with `positional` arguments and an
/// optional named `value` means.
///
/// | positional | `value` | result |
/// |---|---|---|
/// | none | `None` | configured with `R::default()` |
/// | none | `Some(v)` | configured with `v` |
/// | `Value(v)` | `None` | configured with `v` |
/// | `Value(_)` | `Some(_)` | [`ConfigError::Ambiguous`] |
/// | `Computation(f)` | `None` | `f` wrapped with `R::default()` |
/// | `Computation(f)` | `Some(v)` | `f` wrapped with `v` |
/// | `Routine(_)` | any | [`ConfigError::WrongTargetKind`] |
/// | two or more | any | [`ConfigError::Arity`] |
///
/// A `None` named value means no value was passed. To fall back to an explicit
/// `None`, pass `Some(None)`.
///
/// ```rust
/// use bailout::{Arg, ConfigError, Returned, resolve};
///
/// let configured = resolve::<i32, fn(()) -> Returned<i32>>([Arg::Value(4)], None)
///     .unwrap()
///     .configured()
///     .unwrap();
/// assert_eq!(configured.fallback(), &4);
///
/// let err = resolve::<i32, fn(()) -> Returned<i32>>([Arg::Value(4)], Some(5))
///     .unwrap_err();
/// assert_eq!(err, ConfigError::Ambiguous);
/// ```
pub fn resolve<R: Default, F>(
    positional: impl IntoIterator<Item = Arg<R, F>>,
    value: Option<R>,
) -> Result<Resolved<R, F>, ConfigError> {
    let mut positional = positional.into_iter();
    let first = positional.next();
    let rest = positional.count();
    if rest > 0 {
        let given = rest + 1;
        tracing::debug!(given, "rejected positional arguments");
        return Err(ConfigError::Arity { given });
    }
    match (first, value) {
        (None, value) => {
            tracing::debug!(named = value.is_some(), "configured fallback");
            let fallback = value.unwrap_or_default();
            Ok(Resolved::Configured(configure_with(fallback)))
        }
        (Some(Arg::Value(_)), Some(_)) => {
            tracing::debug!("rejected positional and named fallback");
            Err(ConfigError::Ambiguous)
        }
        (Some(Arg::Value(fallback)), None) => {
            tracing::debug!("configured positional fallback");
            Ok(Resolved::Configured(configure_with(fallback)))
        }
        (Some(target), value) => configure_with(value.unwrap_or_default())
            .apply(target)
            .map(Resolved::Wrapped),
    }
}
