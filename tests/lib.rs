// Integration tests for the public API of bailout.
//
// The bailout crate is `no_std`, but this test crate may exercise integrations
// with `std` features, such as threads and `String`s.

use bailout::*;
use either::Either::Left;
use either::Either::Right;

type Step = FromFn<fn(i32) -> Returned<i32>>;
type YieldOnce = fn(()) -> Yielded<Option<i32>, Step>;

const RETURN_RESUMED: fn(i32) -> Returned<i32> = Returned;
const YIELD_NONE: YieldOnce = |()| Yielded(None, from_fn(RETURN_RESUMED));
const YIELD_SEVEN: YieldOnce = |()| Yielded(Some(7), from_fn(RETURN_RESUMED));

#[test]
fn resolve_bare_factory() {
    let wrapped =
        resolve::<i32, YieldOnce>([Arg::Computation(YIELD_NONE)], None)
            .unwrap()
            .wrapped()
            .unwrap();
    assert_eq!(wrapped.fallback(), &0);
    assert_eq!(wrapped.call(()), 0);
}

#[test]
fn resolve_factory_with_named_value() {
    let wrapped =
        resolve::<i32, YieldOnce>([Arg::Computation(YIELD_NONE)], Some(9))
            .unwrap()
            .wrapped()
            .unwrap();
    assert_eq!(wrapped.call(()), 9);
}

#[test]
fn resolve_zero_arguments_then_apply() {
    let configured = resolve::<i32, YieldOnce>([], None)
        .unwrap()
        .configured()
        .unwrap();
    assert_eq!(configured.fallback(), &0);
    let wrapped = configured.apply(Arg::Computation(YIELD_SEVEN)).unwrap();
    assert_eq!(wrapped.call(()), 7);
}

#[test]
fn resolve_positional_value_then_apply() {
    let wrapped = resolve::<i32, YieldOnce>([Arg::Value(4)], None)
        .unwrap()
        .configured()
        .unwrap()
        .apply(Arg::Computation(YIELD_NONE))
        .unwrap();
    assert_eq!(wrapped.call(()), 4);
}

#[test]
fn resolve_named_value_then_apply() {
    let wrapped = resolve::<i32, YieldOnce>([], Some(10))
        .unwrap()
        .configured()
        .unwrap()
        .apply(Arg::Computation(YIELD_SEVEN))
        .unwrap();
    assert_eq!(wrapped.fallback(), &10);
    assert_eq!(wrapped.call(()), 7);
}

#[test]
fn resolve_explicit_none_is_not_unset() {
    let configured =
        resolve::<Option<i32>, YieldOnce>([], Some(None))
            .unwrap()
            .configured()
            .unwrap();
    assert_eq!(configured.fallback(), &None);

    let configured =
        resolve::<Option<i32>, YieldOnce>([Arg::Value(None)], None)
            .unwrap()
            .configured()
            .unwrap();
    assert_eq!(configured.fallback(), &None);
}

#[test]
fn resolve_two_positional_arguments() {
    let err =
        resolve::<i32, YieldOnce>([Arg::Value(12), Arg::Value(13)], None)
            .unwrap_err();
    assert_eq!(err, ConfigError::Arity { given: 2 });
    assert_eq!(
        err.to_string(),
        "short_circuit() takes from 0 to 1 positional arguments but 2 were given"
    );
}

#[test]
fn resolve_many_positional_arguments() {
    let err = resolve::<i32, YieldOnce>(
        [Arg::Value(1), Arg::Computation(YIELD_NONE), Arg::Routine("ham")],
        Some(2),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::Arity { given: 3 });
}

#[test]
fn resolve_positional_and_named_value() {
    let err =
        resolve::<i32, YieldOnce>([Arg::Value(14)], Some(15)).unwrap_err();
    assert_eq!(err, ConfigError::Ambiguous);
    assert_eq!(
        err.to_string(),
        "short_circuit() takes 1 argument but 2 were given"
    );
}

#[test]
fn resolve_none_and_named_none() {
    let err =
        resolve::<Option<i32>, YieldOnce>([Arg::Value(None)], Some(None))
            .unwrap_err();
    assert_eq!(err, ConfigError::Ambiguous);
}

#[test]
fn resolve_routine_target() {
    for routine in ["does_nothing", "returns_nothing", "returns_nineteen"] {
        let err = resolve::<i32, YieldOnce>([Arg::Routine(routine)], None)
            .unwrap_err();
        assert_eq!(err, ConfigError::WrongTargetKind { target: routine });
        assert!(
            err.to_string()
                .starts_with("short_circuit is used only for suspendable")
        );
    }
}

#[test]
fn apply_configured_to_routine() {
    let err = configure_with(1)
        .apply::<YieldOnce>(Arg::Routine("plain"))
        .unwrap_err();
    assert_eq!(err, ConfigError::WrongTargetKind { target: "plain" });
}

#[test]
fn apply_configured_to_another_value() {
    let err = configure_with(16)
        .apply::<YieldOnce>(Arg::Value(17))
        .unwrap_err();
    assert_eq!(err, ConfigError::Ambiguous);
}

#[test]
fn branching_steps_with_either() {
    let lookup = configure_with(String::from("unknown")).wrap(|key: &str| {
        match key {
            "" => Left(Returned(String::from("empty key"))),
            key => Right(Yielded(
                key.strip_prefix("user.").map(String::from),
                from_fn(|name: String| Returned(name.to_uppercase())),
            )),
        }
    });
    assert_eq!(lookup.call(""), "empty key");
    assert_eq!(lookup.call("user.ada"), "ADA");
    assert_eq!(lookup.call("group.admins"), "unknown");
}

#[test]
fn wrapper_is_shared_across_threads() {
    #[rustfmt::skip]
    let wrapped = configure_with(-1).wrap(|n: i32| {
        Yielded(n.checked_sub(1).filter(|n| *n >= 0), from_fn(|n: i32| {
        Returned(n * 10) }))
    });
    let results: Vec<i32> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let wrapped = &wrapped;
                scope.spawn(move || wrapped.call(n))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, vec![-1, 0, 10, 20]);
}

#[test]
fn into_fn_maps_over_inputs() {
    let parse = configure_with(0u8)
        .wrap(|s: &str| {
            Yielded(s.trim().parse::<u8>().ok(), from_fn(|n: u8| Returned(n)))
        })
        .into_fn();
    let parsed: Vec<u8> =
        [" 1", "two", "3 ", "256"].into_iter().map(parse).collect();
    assert_eq!(parsed, vec![1, 0, 3, 0]);
}

// A fixed-point computation that counts down, bailing out on odd numbers.
struct Countdown;

impl Coro<u32, Option<u32>, &'static str> for Countdown {
    type Next = Self;
    type Suspend = Suspend<Option<u32>, &'static str, Self>;
    fn resume(self, n: u32) -> Self::Suspend {
        match n {
            0 => Return("liftoff"),
            n if n % 2 == 1 => Yield(None, self),
            n => Yield(Some(n - 2), self),
        }
    }
}

#[test]
fn short_circuit_fixed_point_coroutine() {
    assert_eq!(Countdown.short_circuit(10, "scrubbed"), "liftoff");
    assert_eq!(Countdown.short_circuit(9, "scrubbed"), "scrubbed");
    assert_eq!(Countdown.short_circuit(0, "scrubbed"), "liftoff");
}

#[test]
fn fixed_point_coroutine_behind_factory() {
    let launch = configure_with("scrubbed").wrap(|n: u32| Countdown.resume(n));
    assert_eq!(launch.call(4), "liftoff");
    assert_eq!(launch.call(3), "scrubbed");
    assert_eq!(launch.call_fixed_point(4), "liftoff");
    assert_eq!(launch.call_fixed_point(3), "scrubbed");
}

#[test]
fn short_circuit_runs_a_million_steps() {
    assert_eq!(Countdown.short_circuit(2_000_000, "scrubbed"), "liftoff");
}

#[test]
fn fixed_point_factory_runs_a_million_steps() {
    let launch = configure_with("scrubbed").wrap(|n: u32| Countdown.resume(n));
    assert_eq!(launch.call_fixed_point(2_000_000), "liftoff");
}

// Passes each value on incremented, until it reaches `limit`.
struct Budget {
    limit: u32,
}

impl Coro<u32, Option<u32>, u32> for Budget {
    type Next = Self;
    type Suspend = Suspend<Option<u32>, u32, Self>;
    fn resume(self, n: u32) -> Self::Suspend {
        if n == self.limit {
            Yield(None, self)
        } else {
            Yield(Some(n + 1), self)
        }
    }
}

#[test]
fn empty_marker_after_a_million_steps() {
    let budget = Budget { limit: 1_000_000 };
    assert_eq!(budget.short_circuit(0, 7), 7);

    let start = Budget { limit: 1_000_000 }.resume(0);
    assert_eq!(drive_fixed_point(start, &8), 8);
}
