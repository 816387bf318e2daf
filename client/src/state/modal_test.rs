use super::*;

// =============================================================
// ToolKey / descriptor table
// =============================================================

#[test]
fn tool_key_ids_round_trip_for_every_tool() {
    for key in ToolKey::ALL {
        assert_eq!(ToolKey::from_id(key.id()), Some(key));
    }
}

#[test]
fn tool_key_rejects_unknown_ids() {
    assert_eq!(ToolKey::from_id("video-verification"), None);
    assert_eq!(ToolKey::from_id(""), None);
    assert_eq!(ToolKey::from_id("Image-Verification"), None);
}

#[test]
fn descriptors_match_their_keys() {
    for key in ToolKey::ALL {
        assert_eq!(key.descriptor().key, key);
    }
}

#[test]
fn lookup_returns_image_tool_metadata() {
    let desc = lookup("image-verification").unwrap();
    assert_eq!(desc.title, "Image Verification Tool");
    assert!(desc.description.contains("PNG, JPG, WebP"));
}

#[test]
fn lookup_unknown_is_none() {
    assert!(lookup("nope").is_none());
}

// =============================================================
// ModalState transitions
// =============================================================

#[test]
fn modal_starts_closed() {
    let state = ModalState::default();
    assert!(!state.is_open());
    assert_eq!(state.active(), None);
    assert_eq!(state.open_seq(), 0);
    assert!(state.descriptor().is_none());
}

#[test]
fn open_known_tool_marks_open() {
    let mut state = ModalState::default();
    assert!(state.open("trust-score"));
    assert!(state.is_open());
    assert_eq!(state.active(), Some(ToolKey::TrustScore));
    assert_eq!(state.descriptor().unwrap().title, "Trust Score Calculator");
    assert_eq!(state.open_seq(), 1);
}

#[test]
fn open_unknown_tool_is_noop_when_closed() {
    let mut state = ModalState::default();
    assert!(!state.open("unknown"));
    assert_eq!(state, ModalState::default());
}

#[test]
fn open_unknown_tool_is_noop_when_open() {
    let mut state = ModalState::default();
    state.open("risk-analysis");
    let before = state;
    assert!(!state.open("unknown"));
    assert_eq!(state, before);
}

#[test]
fn open_while_open_switches_tool_and_bumps_seq() {
    let mut state = ModalState::default();
    state.open("image-verification");
    state.open("report-generator");
    assert_eq!(state.active(), Some(ToolKey::ReportGenerator));
    assert_eq!(state.open_seq(), 2);
}

#[test]
fn reopening_same_tool_still_bumps_seq() {
    let mut state = ModalState::default();
    state.open("image-verification");
    state.open("image-verification");
    assert_eq!(state.active(), Some(ToolKey::ImageVerification));
    assert_eq!(state.open_seq(), 2);
}

#[test]
fn close_resets_active_tool() {
    let mut state = ModalState::default();
    state.open("image-verification");
    assert!(state.close());
    assert!(!state.is_open());
    assert_eq!(state.active(), None);
}

#[test]
fn close_when_closed_reports_false() {
    let mut state = ModalState::default();
    assert!(!state.close());
}

#[test]
fn every_dismiss_trigger_produces_the_same_state() {
    let triggers = [DismissTrigger::CloseButton, DismissTrigger::Backdrop, DismissTrigger::EscapeKey];
    let mut results = Vec::new();
    for trigger in triggers {
        let mut state = ModalState::default();
        state.open("trust-score");
        assert!(state.dismiss(trigger));
        results.push(state);
    }
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(!results[0].is_open());
}

#[test]
fn escape_while_closed_does_nothing() {
    let mut state = ModalState::default();
    assert!(!state.dismiss(DismissTrigger::EscapeKey));
    assert_eq!(state, ModalState::default());
}

// =============================================================
// body keying
// =============================================================

#[test]
fn body_is_none_while_closed() {
    let mut state = ModalState::default();
    assert_eq!(state.body(), None);
    state.open("trust-score");
    state.close();
    assert_eq!(state.body(), None);
}

#[test]
fn image_tool_mounts_import_and_others_mount_placeholder() {
    for key in ToolKey::ALL {
        let mut state = ModalState::default();
        state.open(key.id());
        let expected = if key == ToolKey::ImageVerification { BodyKind::ImageImport } else { BodyKind::Placeholder };
        assert_eq!(state.body().unwrap().kind, expected);
    }
}

#[test]
fn switching_tools_while_open_yields_a_new_body() {
    let mut state = ModalState::default();
    state.open("image-verification");
    let first = state.body().unwrap();
    state.open("trust-score");
    let second = state.body().unwrap();
    assert_ne!(first, second);
    assert_eq!(second, ModalBody { kind: BodyKind::Placeholder, seq: 2 });
}

#[test]
fn reopening_same_tool_yields_a_new_body() {
    let mut state = ModalState::default();
    state.open("image-verification");
    let first = state.body().unwrap();
    state.open("image-verification");
    let second = state.body().unwrap();
    assert_eq!(first.kind, second.kind);
    assert_ne!(first, second);
}

#[test]
fn unknown_id_keeps_the_mounted_body() {
    let mut state = ModalState::default();
    state.open("risk-analysis");
    let before = state.body();
    state.open("unknown");
    assert_eq!(state.body(), before);
}
