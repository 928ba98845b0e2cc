//! Tests for participant mode classification.

use byok_catalog::intents::*;

#[test]
fn documented_examples() {
    assert_eq!(classify("workspace").to_string(), "ask");
    assert_eq!(classify("edits").to_string(), "agent");
    assert_eq!(classify("unknown-id").to_string(), "inline");
}

#[test]
fn every_named_participant_has_a_fixed_label() {
    let cases = [
        (DEFAULT_AGENT, ModeLabel::Ask),
        (WORKSPACE_AGENT, ModeLabel::Ask),
        (VSCODE_AGENT, ModeLabel::Ask),
        (TERMINAL_PANEL_AGENT, ModeLabel::Ask),
        (EDITS_AGENT, ModeLabel::Agent),
        (EDITS_AGENT_LEGACY, ModeLabel::Agent),
        (EDITING_SESSION_AGENT, ModeLabel::Edit),
        (EDITING_SESSION_AGENT_2, ModeLabel::Edit),
        (EDITOR_AGENT, ModeLabel::Inline),
        (TERMINAL_AGENT, ModeLabel::Inline),
    ];
    for (id, expected) in cases {
        assert_eq!(classify(id), expected, "{id}");
    }
}

#[test]
fn classifier_is_total() {
    for id in ["", " ", "github.copilot.", "github.copilot", "ASK", "🤖", "edits "] {
        assert_eq!(classify(id), ModeLabel::Inline, "{id:?}");
    }
}

#[test]
fn labels_round_trip_through_strings() {
    for label in [
        ModeLabel::Ask,
        ModeLabel::Agent,
        ModeLabel::Edit,
        ModeLabel::Inline,
    ] {
        let parsed: ModeLabel = label.as_ref().parse().unwrap();
        assert_eq!(parsed, label);
    }
}
