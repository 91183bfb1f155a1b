//! Integration tests for the `Result` extensions.
//!
//! Covers the operations layered on top of `std::result::Result`:
//! exhaustive dispatch, untagged unwrapping into `Either`, left-biased `zip`,
//! side-effect taps, recovery into an infallible result, and the free
//! helpers `flatten`, `partition` and `try_catch`.

use std::cell::Cell;

use fallible::either::Either;
use fallible::error::Error;
use fallible::result::{Fallible, IntoValue, ResultExt, err, flatten, ok, partition, try_catch};
use fallible::validation::Validation;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn ok_and_err_build_the_matching_variant() {
    let success: Result<i32, String> = ok(1);
    let failure: Result<i32, String> = err("boom".to_string());

    assert!(success.is_ok());
    assert!(failure.is_err());
}

#[rstest]
fn fallible_uses_crate_error_by_default() {
    fn read_port(raw: &str) -> Fallible<u16> {
        raw.parse().map_err(|_| Error::new(format!("invalid port: {raw}")))
    }

    assert_eq!(read_port("80"), Ok(80));
    assert_eq!(read_port("http").unwrap_err().message(), "invalid port: http");
}

// =============================================================================
// Dispatch and Unwrapping
// =============================================================================

#[rstest]
#[case(Ok(2), "value 2")]
#[case(Err("bad"), "error bad")]
fn match_with_runs_exactly_one_branch(#[case] input: Result<i32, &'static str>, #[case] expected: &str) {
    let ok_calls = Cell::new(0);
    let err_calls = Cell::new(0);

    let described = input.match_with(
        |value| {
            ok_calls.set(ok_calls.get() + 1);
            format!("value {value}")
        },
        |error| {
            err_calls.set(err_calls.get() + 1);
            format!("error {error}")
        },
    );

    assert_eq!(described, expected);
    assert_eq!(ok_calls.get() + err_calls.get(), 1);
}

#[rstest]
fn safe_unwrap_never_panics() {
    let success: Result<i32, String> = Ok(3);
    let failure: Result<i32, String> = Err("gone".to_string());

    assert_eq!(success.safe_unwrap(), Either::Right(3));
    assert_eq!(failure.safe_unwrap(), Either::Left("gone".to_string()));
}

#[rstest]
#[should_panic(expected = "called `Result::unwrap()` on an `Err` value")]
fn unwrap_on_err_is_fatal() {
    let failure: Result<i32, &str> = Err("fatal");
    let _ = failure.unwrap();
}

#[rstest]
fn unwrap_or_else_computes_from_error() {
    let failure: Result<usize, &str> = Err("four");
    assert_eq!(failure.unwrap_or_else(str::len), 4);
}

// =============================================================================
// Zip
// =============================================================================

#[rstest]
#[case(Ok(1), Ok("a"), Ok((1, "a")))]
#[case(Err("left"), Ok("a"), Err("left"))]
#[case(Ok(1), Err("right"), Err("right"))]
#[case(Err("left"), Err("right"), Err("left"))]
fn zip_is_left_biased(
    #[case] left: Result<i32, &'static str>,
    #[case] right: Result<&'static str, &'static str>,
    #[case] expected: Result<(i32, &'static str), &'static str>,
) {
    assert_eq!(left.zip(right), expected);
}

#[rstest]
fn zip_with_combines_values() {
    let width: Result<u32, String> = Ok(3);
    let height: Result<u32, String> = Ok(4);
    assert_eq!(width.zip_with(height, |w, h| w * h), Ok(12));
}

// =============================================================================
// Tap
// =============================================================================

#[rstest]
fn tap_returns_original_result() {
    let mut seen = Vec::new();
    let result: Result<i32, String> = Ok(5).tap(|value| seen.push(*value));

    assert_eq!(result, Ok(5));
    assert_eq!(seen, vec![5]);
}

#[rstest]
fn tap_skips_err() {
    let called = Cell::new(false);
    let result: Result<i32, &str> = Err("e").tap(|_| called.set(true));

    assert_eq!(result, Err("e"));
    assert!(!called.get());
}

#[rstest]
fn tap_err_observes_error_only() {
    let mut logged = Vec::new();
    let _ = Ok::<i32, &str>(1).tap_err(|error| logged.push(*error));
    let _ = Err::<i32, &str>("e").tap_err(|error| logged.push(*error));
    assert_eq!(logged, vec!["e"]);
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn recover_makes_result_infallible() {
    let failure: Result<String, String> = Err("missing".to_string());
    let recovered = failure.recover(|error| format!("default ({error})"));

    assert_eq!(recovered.into_value(), "default (missing)");
}

#[rstest]
fn recover_value_passes_ok_through() {
    let success: Result<i32, &str> = Ok(10);
    assert_eq!(success.recover_value(0).into_value(), 10);
}

// =============================================================================
// Transpose
// =============================================================================

#[rstest]
#[case(Ok(Some(1)), Some(Ok(1)))]
#[case(Ok(None), None)]
#[case(Err("e"), Some(Err("e")))]
fn transpose_follows_the_documented_law(
    #[case] input: Result<Option<i32>, &'static str>,
    #[case] expected: Option<Result<i32, &'static str>>,
) {
    assert_eq!(input.transpose(), expected);
}

// =============================================================================
// Conversions and Helpers
// =============================================================================

#[rstest]
fn to_validation_wraps_error_in_single_entry_list() {
    let failure: Result<i32, &str> = Err("bad");
    let validation = failure.to_validation();

    assert!(validation.is_invalid());
    assert_eq!(validation.errors().map(|errors| errors.len()), Some(1));
}

#[rstest]
fn to_either_maps_ok_to_right() {
    assert_eq!(Ok::<i32, &str>(1).to_either(), Either::Right(1));
    assert_eq!(Err::<i32, &str>("e").to_either(), Either::Left("e"));
}

#[rstest]
fn flatten_removes_one_level() {
    let nested: Result<Result<i32, &str>, &str> = Ok(Err("inner"));
    assert_eq!(flatten(nested), Err("inner"));
}

#[rstest]
fn partition_keeps_input_order() {
    let (values, errors) = partition(vec![Err("a"), Ok(1), Err("b"), Ok(2)]);
    assert_eq!(values, vec![1, 2]);
    assert_eq!(errors, vec!["a", "b"]);
}

#[rstest]
fn try_catch_turns_panic_into_rejected() {
    let divisor = 0;
    let result = try_catch(|| {
        if divisor == 0 {
            panic!("division by zero");
        }
        10 / divisor
    });

    assert_eq!(result.unwrap_err().message(), "division by zero");
}

#[rstest]
fn validation_from_result_matches_to_validation() {
    let failure: Result<i32, &str> = Err("x");
    assert_eq!(Validation::from_result(failure), failure.to_validation());
}
