use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
use outcome_rail::Outcome;

#[test]
fn result_into_outcome() {
    let parsed = "42".parse::<i32>().into_outcome();
    let invalid = "forty-two".parse::<i32>().map_err(|e| e.to_string()).into_outcome();

    assert_eq!(parsed, Outcome::Success(42));
    assert!(invalid.is_failure());
}

#[test]
fn outcome_into_outcome_is_identity() {
    let outcome = Outcome::<i32, &str>::failure("same");

    assert_eq!(outcome.into_outcome(), Outcome::Failure("same"));
}

#[test]
fn generic_over_into_outcome() {
    fn describe<I: IntoOutcome<u8, &'static str>>(input: I) -> String {
        input.into_outcome().fold(|v| format!("value {}", v), |e| format!("error {}", e))
    }

    assert_eq!(describe(Ok(1)), "value 1");
    assert_eq!(describe(Outcome::failure("boom")), "error boom");
}

#[test]
fn option_ok_or_failure() {
    assert_eq!(Some(3).ok_or_failure("missing"), Outcome::Success(3));
    assert_eq!(None::<i32>.ok_or_failure("missing"), Outcome::Failure("missing"));
}

#[test]
fn option_ok_or_else_failure_is_lazy() {
    let mut calls = 0;
    let present = Some(3).ok_or_else_failure(|| {
        calls += 1;
        "missing"
    });
    assert_eq!(present, Outcome::Success(3));
    assert_eq!(calls, 0);

    let absent = None::<i32>.ok_or_else_failure(|| {
        calls += 1;
        "missing"
    });
    assert_eq!(absent, Outcome::Failure("missing"));
    assert_eq!(calls, 1);
}
