use super::*;
use crate::models::CandidateKind;

fn method(label: &str, completion: &str) -> CompletionCandidate {
    CompletionCandidate::new(label, completion, CandidateKind::PredefinedMethod)
}

#[test]
fn multi_arg_call_targets_first_comma() {
    let insertion = CompletionInsertion::resolve(
        &method("foo(int, int)", "foo(int, int)"),
        Some("fo"),
        AcceptSource::Keyboard,
    )
    .expect("resolve");

    assert_eq!(insertion.text, "foo(int, int)");
    assert_eq!(insertion.tail, "o(int, int)");
    assert_eq!(insertion.remove_len, 2);
    // anchor 12 sits after "fo" typed at 10
    assert_eq!(insertion.caret_target(12, 23), Some(10 + "foo(int".len()));
}

#[test]
fn single_arg_placeholder_is_normalized() {
    let insertion =
        CompletionInsertion::resolve(&method("bar(int)", "bar( )"), Some("ba"), AcceptSource::Keyboard)
            .expect("resolve");

    assert_eq!(insertion.text, "bar()");
    assert_eq!(insertion.tail, "r( )");
    assert_eq!(insertion.caret_target(2, 5), Some(4));
}

#[test]
fn empty_call_leaves_caret_alone() {
    let insertion =
        CompletionInsertion::resolve(&method("noLoop()", "noLoop()"), Some("no"), AcceptSource::Keyboard)
            .expect("resolve");

    assert_eq!(insertion.text, "noLoop()");
    assert_eq!(insertion.caret_target(2, 8), None);
}

#[test]
fn missing_subword_inserts_everything() {
    let insertion =
        CompletionInsertion::resolve(&method("fill(int)", "fill( )"), None, AcceptSource::Keyboard)
            .expect("resolve");

    assert_eq!(insertion.remove_len, 0);
    assert_eq!(insertion.tail, "fill( )");
    assert_eq!(insertion.text, "fill()");
}

#[test]
fn mouse_pick_of_overloaded_group_is_flagged() {
    let group = method("print(...)", "print(");

    let by_mouse = CompletionInsertion::resolve(&group, Some("pr"), AcceptSource::Mouse).expect("resolve");
    assert!(by_mouse.overloaded_mouse_click);
    assert_eq!(by_mouse.caret_target(2, 6), None);

    let by_key = CompletionInsertion::resolve(&group, Some("pr"), AcceptSource::Keyboard).expect("resolve");
    assert!(!by_key.overloaded_mouse_click);
}

#[test]
fn malformed_candidates_are_rejected() {
    let empty = CompletionCandidate::new("ghost", "", CandidateKind::LocalVariable);
    assert_eq!(
        CompletionInsertion::resolve(&empty, Some("g"), AcceptSource::Keyboard),
        Err(CompletionError::MalformedCandidate {
            label: "ghost".into()
        })
    );

    let short = CompletionCandidate::new("x", "x", CandidateKind::LocalVariable);
    assert!(CompletionInsertion::resolve(&short, Some("xyz"), AcceptSource::Keyboard).is_err());
}
