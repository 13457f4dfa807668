use outcome_rail::Outcome;

#[test]
fn collect_all_successes() {
    let outcome: Outcome<Vec<i32>, &str> = (1..=3).map(Outcome::success).collect();

    assert_eq!(outcome, Outcome::Success(vec![1, 2, 3]));
}

#[test]
fn collect_stops_at_first_failure() {
    let inputs = vec![Outcome::success(1), Outcome::failure("second"), Outcome::failure("third")];
    let outcome: Outcome<Vec<i32>, &str> = inputs.into_iter().collect();

    assert_eq!(outcome, Outcome::Failure("second"));
}

#[test]
fn collect_does_not_pull_past_failure() {
    let mut seen = Vec::new();
    let outcome: Outcome<Vec<i32>, String> = ["1", "x", "3"]
        .iter()
        .map(|s| {
            seen.push(*s);
            match s.parse::<i32>() {
                Ok(n) => Outcome::success(n),
                Err(_) => Outcome::failure(format!("bad input: {}", s)),
            }
        })
        .collect();

    assert_eq!(outcome, Outcome::Failure("bad input: x".to_string()));
    assert_eq!(seen, ["1", "x"]);
}
