use outcome_rail::convert::*;
use outcome_rail::Outcome;

#[test]
fn result_round_trips_through_outcome() {
    let ok: Outcome<i32, &str> = Ok(42).into();
    let err: Outcome<i32, &str> = Err("failed").into();

    assert_eq!(ok, Outcome::Success(42));
    assert_eq!(err, Outcome::Failure("failed"));
    assert_eq!(Result::from(ok), Ok(42));
    assert_eq!(Result::from(err), Err("failed"));
}

#[test]
fn result_to_outcome_keeps_variant() {
    assert!(result_to_outcome(Ok::<i32, &str>(1)).is_success());
    assert!(result_to_outcome(Err::<i32, &str>("no")).is_failure());
}

#[test]
fn outcome_to_result_keeps_payload() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(3)), Ok(3));
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("no")), Err("no"));
}

#[test]
fn option_to_outcome_uses_given_error() {
    assert_eq!(option_to_outcome(Some(5), "missing"), Outcome::Success(5));
    assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::Failure("missing"));
}

#[test]
fn option_to_outcome_keeps_empty_sentinel_as_success() {
    let outcome = option_to_outcome(Some(None::<i32>), "missing");

    assert!(outcome.is_success());
}

#[test]
fn flatten_unwraps_nested_outcome() {
    let nested = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::success(1));
    let inner_failure = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::failure("inner"));
    let outer_failure = Outcome::<Outcome<i32, &str>, &str>::failure("outer");

    assert_eq!(flatten(nested), Outcome::Success(1));
    assert_eq!(flatten(inner_failure), Outcome::Failure("inner"));
    assert_eq!(flatten(outer_failure), Outcome::Failure("outer"));
}

#[test]
fn question_mark_through_into_result() {
    fn total(a: Outcome<i32, String>, b: Outcome<i32, String>) -> Result<i32, String> {
        Ok(a.into_result()? + b.into_result()?)
    }

    assert_eq!(total(Outcome::success(1), Outcome::success(2)), Ok(3));
    assert_eq!(total(Outcome::success(1), Outcome::failure("b".to_string())), Err("b".to_string()));
}
