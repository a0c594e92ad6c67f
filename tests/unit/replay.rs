use super::*;

fn script(json: &str) -> ReplayScript {
    serde_json::from_str(json).expect("script")
}

#[test]
fn typing_after_trigger_invalidates_the_anchor() {
    let report = run_script(
        script(
            r#"{
                "text": "void draw() {\n  ",
                "events": [
                    {"type": "type", "text": "fi"},
                    {"type": "trigger", "candidates": [
                        {"label": "fill(int)", "completion": "fill( )", "kind": "predefined_method"},
                        {"label": "filter(int, float)", "completion": "filter(int, float)", "kind": "predefined_method"}
                    ]},
                    {"type": "type", "text": "l"},
                    {"type": "accept"}
                ]
            }"#,
        ),
        Arc::new(CompletionConfig::default()),
    );

    // the anchor stays after "fi" while the caret moved on past "l"
    assert_eq!(
        report.steps[3],
        StepOutcome::Failed {
            error: "insertion anchor 18 no longer matches caret 19".to_string(),
        }
    );
    assert!(!report.visible);
    assert_eq!(report.text, "void draw() {\n  fil");
}

#[test]
fn navigation_then_accept() {
    let report = run_script(
        script(
            r#"{
                "text": "fi",
                "events": [
                    {"type": "trigger", "candidates": [
                        {"label": "fill(int)", "completion": "fill( )", "kind": "predefined_method"},
                        {"label": "filter(int, float)", "completion": "filter(int, float)", "kind": "predefined_method"}
                    ]},
                    {"type": "down"},
                    {"type": "accept", "source": "mouse"},
                    {"type": "down"}
                ]
            }"#,
        ),
        Arc::new(CompletionConfig::default()),
    );

    assert_eq!(report.text, "filter(int, float)");
    assert_eq!(report.caret, "filter(int".len());
    assert_eq!(
        report.steps,
        vec![
            StepOutcome::Triggered { session: 1 },
            StepOutcome::Moved {
                selected: 1,
                scroll: ScrollSignal::StepDown
            },
            StepOutcome::Accepted {
                caret: 10,
                popup_open: false
            },
            StepOutcome::Ignored,
        ]
    );
    assert_eq!(report.doc_refreshes, 2);
    assert_eq!(report.rescans, 0);
    assert!(!report.visible);
}

#[test]
fn overloaded_mouse_pick_stays_open_and_rescans() {
    let report = run_script(
        script(
            r#"{
                "text": "pr",
                "events": [
                    {"type": "trigger", "candidates": [
                        {"label": "print(...)", "completion": "print(", "kind": "predefined_method"}
                    ]},
                    {"type": "accept", "source": "mouse"}
                ]
            }"#,
        ),
        Arc::new(CompletionConfig::default()),
    );

    assert_eq!(report.text, "print(");
    assert!(report.visible);
    assert_eq!(report.rescans, 1);
}

#[test]
fn empty_trigger_and_bad_caret_are_reported() {
    let report = run_script(
        script(
            r#"{
                "text": "ab",
                "events": [
                    {"type": "move_caret", "offset": 9},
                    {"type": "trigger", "candidates": []},
                    {"type": "accept"}
                ]
            }"#,
        ),
        Arc::new(CompletionConfig::default()),
    );

    assert!(matches!(report.steps[0], StepOutcome::Failed { .. }));
    assert_eq!(
        report.steps[1],
        StepOutcome::Failed {
            error: "completion triggered without candidates".to_string()
        }
    );
    assert_eq!(report.steps[2], StepOutcome::Rejected);
    assert_eq!(report.text, "ab");
}
