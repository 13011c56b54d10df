//! # Pipeline Tests
//!
//! End-to-end behavior of the container algebra:
//! - Construction and extraction for every shape
//! - Fail-fast ordering and callback counts
//! - Conversion followed by validation on string input
//! - Shape round trips (split/join, split/flatten)

use std::cell::Cell;

use maybe_core::{Error, Mat, Maybe, Seq, Value};

fn atoi(s: &str) -> Maybe<i64> {
    Maybe::new(s.parse::<i64>())
}

fn non_negative(x: i64) -> Maybe<i64> {
    if x < 0 {
        Maybe::err(format!("{} is negative", x))
    } else {
        Maybe::just(x)
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_just_is_valid_for_every_shape() {
    assert_eq!(Maybe::just(7).unbox(), Ok(7));
    assert_eq!(Seq::just(vec![7]).unbox(), Ok(vec![7]));
    assert_eq!(Mat::just(vec![vec![7]]).unbox(), Ok(vec![vec![7]]));
    assert!(!Maybe::just("x").is_err());
}

#[test]
fn test_never_constructed_is_failure_for_every_shape_and_kind() {
    fn check<C: Default + maybe_core::Outcome>() {
        assert!(C::default().is_failure());
    }
    check::<Maybe<i64>>();
    check::<Maybe<String>>();
    check::<Maybe<Value>>();
    check::<Seq<i64>>();
    check::<Seq<String>>();
    check::<Seq<Value>>();
    check::<Mat<i64>>();
    check::<Mat<String>>();
    check::<Mat<Value>>();
}

#[test]
fn test_uninitialized_error_is_distinct_from_caller_errors() {
    let zero = Seq::<i64>::default().unbox().unwrap_err();
    let caller = Seq::<i64>::err("zero-value Seq").unbox().unwrap_err();
    assert!(zero.is_uninitialized());
    assert!(!caller.is_uninitialized());
    assert_ne!(zero, caller);
}

#[test]
fn test_from_pair() {
    assert!(Seq::from_pair(vec![1], Some(Error::msg("boom"))).is_err());
    assert_eq!(Seq::from_pair(vec![1], None).unbox(), Ok(vec![1]));
    assert!(Mat::<i64>::from_pair(vec![], Some(Error::msg("boom"))).is_err());
}

// ============================================================================
// Fail-Fast Semantics
// ============================================================================

#[test]
fn test_left_zero_preserves_error_identity() {
    let error = Error::new("x".parse::<i64>().unwrap_err());
    let calls = Cell::new(0);

    let got = Maybe::<i64>::err(error.clone()).bind(|x| {
        calls.set(calls.get() + 1);
        Maybe::just(x)
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(got, Maybe::err(error.clone()));
    assert!(Error::same(got.error().unwrap(), &error));
}

#[test]
fn test_map_counts_calls_until_failure() {
    let calls = Cell::new(0);
    let got = Seq::just(vec!["a", "b", "c"]).map(|s| {
        calls.set(calls.get() + 1);
        if s == "b" {
            Maybe::<&str>::err("b failed")
        } else {
            Maybe::just(s)
        }
    });

    assert_eq!(got.unbox(), Err(Error::msg("b failed")));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_first_failure_wins() {
    let got = Seq::just(vec!["1", "x", "y"]).convert_to(atoi);
    let error = got.unbox().unwrap_err();
    let expected = "x".parse::<i64>().unwrap_err();
    assert_eq!(
        error.downcast_ref::<std::num::ParseIntError>(),
        Some(&expected)
    );
}

#[test]
fn test_failure_is_absorbing_across_shapes() {
    let error = Error::msg("upstream");
    let got = Maybe::<String>::err(error.clone())
        .split(|s| Seq::just(vec![s]))
        .split(|s| Seq::just(vec![s]))
        .map(Seq::just)
        .convert_to(|s| Maybe::just(s.len()))
        .flatten()
        .join(|xs| Maybe::just(xs.len()));
    assert!(Error::same(got.error().unwrap(), &error));
}

// ============================================================================
// Conversion Then Validation
// ============================================================================

#[test]
fn test_strings_to_non_negative_ints_success() {
    let got = Seq::just(vec!["23", "42", "0"]).convert_to(atoi).map(non_negative);
    assert_eq!(got.unbox(), Ok(vec![23, 42, 0]));
}

#[test]
fn test_strings_to_non_negative_ints_bad_atoi() {
    let validated = Cell::new(0);
    let got = Seq::just(vec!["23", "forty-two", "0"])
        .convert_to(atoi)
        .map(|x| {
            validated.set(validated.get() + 1);
            non_negative(x)
        });

    let error = got.unbox().unwrap_err();
    assert_eq!(error.to_string(), "invalid digit found in string");
    assert_eq!(validated.get(), 0);
}

#[test]
fn test_strings_to_non_negative_ints_negative() {
    let got = Seq::just(vec!["23", "-42", "0"]).convert_to(atoi).map(non_negative);
    assert_eq!(got.to_string(), "Err -42 is negative");
}

#[test]
fn test_matrix_of_tokens_to_row_sums() {
    let text = "1 2 3\n4 5 6";
    let got = Maybe::just(text)
        .split(|t| Seq::from_items(t.lines()))
        .split(|line| Seq::from_items(line.split_whitespace()))
        .convert_to(atoi)
        .join(|row| Maybe::just(row.iter().sum::<i64>()));
    assert_eq!(got.unbox(), Ok(vec![6, 15]));
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_split_then_join_reconstructs() {
    let input = Seq::just(vec!["a", "b", "c"]);
    let got = input
        .clone()
        .split(|x| Seq::just(vec![x]))
        .join(|row| Maybe::just(row[0]));
    assert_eq!(got, input);
}

#[test]
fn test_split_then_flatten_reconstructs() {
    let input = Seq::just(vec![1, 2, 3]);
    let got = input.clone().split(|x| Seq::just(vec![x])).flatten();
    assert_eq!(got, input);
}

#[test]
fn test_flatten_fixture() {
    let got = Mat::just(vec![vec![1, 2], vec![3, 4]]).flatten();
    assert_eq!(got, Seq::just(vec![1, 2, 3, 4]));

    let error = Error::msg("bad matrix");
    let got = Mat::<i64>::err(error.clone()).flatten();
    assert_eq!(got, Seq::err(error));
}

// ============================================================================
// Dynamic Values
// ============================================================================

#[test]
fn test_mixed_table_through_values() {
    let cells = Mat::from_rows([["id", "score"], ["1", "2.5"], ["2", "x"]])
        .convert_to(|t| Maybe::just(Value::infer(t)));

    let scores = cells
        .clone()
        .join(|row| Maybe::just(row[1].clone()))
        .map(Value::into_float);
    assert_eq!(
        scores.unbox().unwrap_err(),
        Error::KindMismatch {
            expected: "float",
            found: "str"
        }
    );

    let ids = cells
        .join(|row| Maybe::just(row[0].clone()))
        .bind(|ids| Seq::just(ids[1..].to_vec()))
        .convert_to(Value::into_int);
    assert_eq!(ids.unbox(), Ok(vec![1, 2]));
}
