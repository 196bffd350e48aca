use connect_ops::modules::actions::matching::{is_mutual, MatchDiagnosis};
use connect_ops::modules::actions::model::UserActions;

const A: &str = "346492379800";
const B: &str = "523214175859";

fn actions(likes: &[&str], liked_by: &[&str]) -> UserActions {
    UserActions {
        likes: likes.iter().map(|s| s.to_string()).collect(),
        liked_by: liked_by.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn diagnose(a: &UserActions, b: &UserActions) -> MatchDiagnosis {
    MatchDiagnosis::new(A, a, B, b)
}

#[test]
fn test_mutual_is_symmetric() {
    let cases = [
        (actions(&[B], &[]), actions(&[A], &[])),
        (actions(&[B], &[]), actions(&[], &[])),
        (actions(&[], &[B]), actions(&[A], &[])),
        (actions(&[], &[]), actions(&[], &[])),
        (actions(&[B, "999"], &[A]), actions(&["999", A], &[B])),
    ];

    for (a, b) in &cases {
        let forward = MatchDiagnosis::new(A, a, B, b);
        let backward = MatchDiagnosis::new(B, b, A, a);
        assert_eq!(forward.mutual(), backward.mutual());
        assert_eq!(forward.swap(), backward);
        assert_eq!(
            is_mutual(A, &a.likes, B, &b.likes),
            is_mutual(B, &b.likes, A, &a.likes)
        );
    }
}

#[test]
fn test_not_mutual_without_both_likes() {
    assert!(!diagnose(&actions(&[], &[]), &actions(&[A], &[])).mutual());
    assert!(!diagnose(&actions(&[B], &[]), &actions(&["777"], &[])).mutual());
    assert!(!is_mutual(A, &[], B, &[]));
}

#[test]
fn test_reciprocal_likes_are_mutual() {
    let diagnosis = diagnose(&actions(&[B], &[B]), &actions(&[A], &[A]));
    assert!(diagnosis.mutual());
    assert!(diagnosis.backfilled());
    assert!(!diagnosis.backfill_inconsistent());
}

#[test]
fn test_one_sided_like_is_not_mutual() {
    let diagnosis = diagnose(&actions(&[B], &[]), &actions(&[], &[]));
    assert!(!diagnosis.mutual());
    assert!(!diagnosis.backfill_inconsistent());
}

#[test]
fn test_liked_by_only_means_a_like_from_a_completes_the_match() {
    // B liked A and the reverse index says so; A has not liked B yet.
    let diagnosis = diagnose(&actions(&[], &[B]), &actions(&[A], &[]));

    assert!(!diagnosis.mutual());
    assert!(diagnosis.like_from_a_completes_match());
    assert!(!diagnosis.like_from_b_completes_match());
    assert!(diagnosis.backfilled());
    assert!(!diagnosis.backfill_inconsistent());
}

#[test]
fn test_missing_liked_by_flags_backfill_bug() {
    let diagnosis = diagnose(&actions(&[B], &[]), &actions(&[A], &[]));

    assert!(diagnosis.mutual());
    assert!(!diagnosis.backfilled());
    assert!(diagnosis.backfill_inconsistent());
}

#[test]
fn test_missing_records_read_as_empty() {
    let empty = UserActions::default();
    let diagnosis = diagnose(&empty, &empty);
    assert_eq!(
        diagnosis,
        MatchDiagnosis {
            a_likes_b: false,
            b_likes_a: false,
            a_liked_by_b: false,
            b_liked_by_a: false,
        }
    );
}
