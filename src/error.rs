/// A malformed configuration of a short-circuiting wrapper.
///
/// Raised while configuring or applying the wrapper, never while driving a
/// computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// More than one positional argument was given.
    #[error(
        "short_circuit() takes from 0 to 1 positional arguments but {given} were given"
    )]
    Arity { given: usize },

    /// A positional fallback and a named `value` were both given.
    #[error("short_circuit() takes 1 argument but 2 were given")]
    Ambiguous,

    /// The wrapper was applied to a callable that never suspends.
    #[error(
        "short_circuit is used only for suspendable computations, not `{target}`"
    )]
    WrongTargetKind { target: &'static str },
}
