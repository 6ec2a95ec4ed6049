//! Determinism locks: repeated solves of the same fixture produce the same
//! path, the same canonical report bytes, and the same digest.

use isotope_search::report::SolveReport;
use isotope_search::solve::solve;
use lock_tests::fixtures;

#[test]
fn repeated_solves_yield_identical_outcomes() {
    for name in fixtures::ALL_FIXTURES {
        let initial = fixtures::by_name(name).unwrap();
        let first = solve(&initial).unwrap();
        let second = solve(&initial).unwrap();

        assert_eq!(first.outcome, second.outcome, "fixture {name}");
        assert_eq!(first.metrics, second.metrics, "fixture {name}");
    }
}

#[test]
fn report_bytes_are_reproducible() {
    for name in fixtures::ALL_FIXTURES {
        let initial = fixtures::by_name(name).unwrap();
        let a = SolveReport::build(&initial, &solve(&initial).unwrap());
        let b = SolveReport::build(&initial, &solve(&initial).unwrap());

        assert_eq!(
            a.canonical_bytes().unwrap(),
            b.canonical_bytes().unwrap(),
            "fixture {name} must serialize identically run to run"
        );
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    }
}

#[test]
fn report_json_round_trips_with_expected_fields() {
    let initial = fixtures::classic_two_kind();
    let report = SolveReport::build(&initial, &solve(&initial).unwrap());
    let bytes = report.canonical_bytes().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["outcome"], "solved");
    assert_eq!(value["moves"], 11);
    assert_eq!(
        value["path_fingerprints"].as_array().unwrap().len(),
        12,
        "11 moves visit 12 states"
    );
    assert_eq!(
        value["root_state_fingerprint"],
        value["path_fingerprints"][0],
        "the path starts at the root state"
    );
    assert!(value["metrics"]["expansions"].as_u64().unwrap() > 0);
}
