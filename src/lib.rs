//! The `bailout` crate turns chains of "if this is empty, give up" checks into
//! a straight line of suspension points.
//!
//! Consider looking up a program's version from a config file, where every
//! step can come up empty:
//!
//! ```rust
//! # struct Config;
//! # impl Config { fn program_name(&self) -> Option<&str> { Some("tool-1.2") } }
//! # fn default_config_path() -> Option<String> { Some("tool.toml".into()) }
//! # fn parse_config(_: &str) -> Option<Config> { Some(Config) }
//! # fn version_of(name: &str) -> Option<&str> { name.split('-').nth(1) }
//! fn get_version(config_path: Option<String>) -> String {
//!     let config_path = match config_path.or_else(default_config_path) {
//!         Some(path) => path,
//!         None => return String::new(),
//!     };
//!     let config = match parse_config(&config_path) {
//!         Some(config) => config,
//!         None => return String::new(),
//!     };
//!     let program_name = match config.program_name() {
//!         Some(name) => name,
//!         None => return String::new(),
//!     };
//!     match version_of(program_name) {
//!         Some(version) => version.to_string(),
//!         None => String::new(),
//!     }
//! }
//! # assert_eq!(get_version(None), "1.2");
//! ```
//!
//! With `bailout`, the function is written as a *suspendable computation*
//! instead: each step yields an `Option`, and the driver either hands the
//! value straight back to the next step or, the moment a step yields `None`,
//! abandons the rest of the computation and returns a fallback value chosen
//! when the function was wrapped. See `demos/get_version.rs` for that version.
//!
//! # Computations
//!
//! Computations are `Coro` coroutines: state machines whose `resume()` method
//! consumes the current state and returns a `Suspended` state that either
//! yields a value together with the next state, or returns a final value.
//!
//! ```rust
//! pub enum Suspend<Y, R, N> {
//!     Yield(Y, N),
//!     Return(R),
//! }
//! ```
//!
//! A short-circuitable computation is a `Coro<T, Option<T>, R>`: it yields
//! `Option<T>`, is resumed with the `T` inside, and returns `R`.
//!
//!   * `Some(v)` is a produced value. The driver resumes the computation with
//!     exactly `v`.
//!   * `None` is the empty marker. The driver drops the computation without
//!     resuming it again and returns the fallback.
//!   * `Bare(next)` is a suspension with no value at all, and means the same
//!     thing as yielding `None`.
//!   * Returning `r` ends the call with `r`, even if `r` happens to equal the
//!     fallback.
//!
//! A *factory* starts a computation from a call's arguments: any closure
//! `Fn(A) -> S` where `S: Suspended<T, Option<T>, R>`. It runs the
//! computation up to its first suspension point. Nested `from_fn()` closures
//! spell out the remaining steps:
//!
//! ```rust
//! use bailout::{Returned, Yielded, from_fn, short_circuit};
//!
//! #[rustfmt::skip]
//! let ratio = short_circuit(|(a, b): (i32, i32)| {
//!     Yielded(a.checked_div(b), from_fn(move |q: i32| {
//!     Yielded(a.checked_rem(b), from_fn(move |r: i32| {
//!     Returned(Some((q, r))) })) }))
//! });
//! assert_eq!(ratio.call((7, 2)), Some((3, 1)));
//! assert_eq!(ratio.call((7, 0)), None);
//! ```
//!
//! Each `from_fn()` level has its own type, so `call()` steps through them
//! with nested calls. A computation that may run for an unbounded number of
//! steps is written as one state type whose `Next` is itself (a
//! `FixedPointCoro`) and run with `call_fixed_point()` or
//! `Coro::short_circuit()`, which overwrite that state in place.
//!
//! # Wrapping
//!
//! | call | fallback |
//! |---|---|
//! | `short_circuit(factory)` | `R::default()` |
//! | `configure().wrap(factory)` | `R::default()` |
//! | `configure_with(v).wrap(factory)` | `v` |
//!
//! Call sites that only know the shape of their arguments at run time go
//! through `resolve()`, which takes the positional arguments as `Arg`s plus an
//! optional named value and reports malformed shapes as a `ConfigError`:
//! more than one positional argument, a positional and a named fallback
//! together, or a target that is a plain routine rather than a computation
//! factory.
//!
//! # FAQ
//!
//! ## Isn't this what `?` is for?
//!
//! Inside a function returning `Option`, yes. `bailout` is for the other
//! cases: when the early result is not `None` but some other value fixed when
//! the function is wrapped, when the same body should be reusable with
//! different fallbacks, or when the steps are already coroutines.
//!
//! ## Why does the factory return a suspension instead of a coroutine?
//!
//! A coroutine needs an input to take its first step, and the only input
//! available at the start of a call is the call's own arguments. So calling
//! the factory *is* the first step, and every later step receives the value
//! produced by the one before it.
//!
//! ## Why is `resume()` consuming `self`?
//!
//! A state that has returned hands nothing back to resume, so stepping a
//! finished computation is a compile error rather than a runtime contract.
//! The same move makes bailing out trivial: the state that came with the
//! empty marker is dropped, and whatever it would have done never runs.

// Short-circuiting should not need an allocator or system calls.
//
// Tests for integrations with standard library APIs that use these features
// should be put in the integration tests in the `tests/` folder.
#![no_std]

mod assertions;
mod config;
mod coro;
mod driver;
mod either;
mod error;
mod factory;
mod fixed_point;
mod from_fn;
mod returned;
mod sentinel;
mod suspend;
mod suspended;
mod void;
mod yielded;

pub use assertions::CoroAssertions;
pub use assertions::SuspendedAssertions;
pub use config::Arg;
pub use config::Configured;
pub use config::Resolved;
pub use config::configure;
pub use config::configure_with;
pub use config::resolve;
pub use config::short_circuit;
pub use coro::Coro;
pub use driver::ShortCircuit;
pub use driver::drive;
pub use driver::drive_fixed_point;
pub use error::ConfigError;
pub use factory::Factory;
pub use fixed_point::FixedPointCoro;
pub use from_fn::FromFn;
pub use from_fn::from_fn;
pub use returned::Returned;
pub use sentinel::Bare;
pub use suspend::Suspend;
pub use suspended::Suspended;
pub use suspended::SuspendedVisitor;
pub use void::Void;
pub use yielded::Yielded;

/// `Yield` and `Return` are imported into the crate root namespace because
/// they are used so often. Do not confuse these enum variants with the
/// `Yielded` and `Returned` structs.
pub use Suspend::{Return, Yield};
