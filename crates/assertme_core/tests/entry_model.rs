use assertme_core::{Entry, EntryDraft, EntryValidationError};
use chrono::{DateTime, Utc};

fn filled_draft() -> EntryDraft {
    EntryDraft {
        what_happened: "argued with roommate".to_string(),
        what_i_felt: "anxious".to_string(),
        what_i_done: "left the room".to_string(),
        what_i_wanted: String::new(),
        what_i_avoided: String::new(),
    }
}

fn fixed_time() -> DateTime<Utc> {
    "2026-03-14T09:26:53Z".parse().unwrap()
}

#[test]
fn draft_validation_requires_first_three_fields() {
    let mut draft = filled_draft();
    draft.what_happened = "   ".to_string();
    assert_eq!(
        draft.validate().unwrap_err(),
        EntryValidationError::BlankRequiredField("whatHappened")
    );

    let mut draft = filled_draft();
    draft.what_i_felt = String::new();
    assert_eq!(
        draft.validate().unwrap_err(),
        EntryValidationError::BlankRequiredField("whatIFelt")
    );

    let mut draft = filled_draft();
    draft.what_i_done = "\n\t".to_string();
    assert_eq!(
        draft.validate().unwrap_err(),
        EntryValidationError::BlankRequiredField("whatIDone")
    );
}

#[test]
fn draft_validation_reports_fields_in_form_order() {
    let draft = EntryDraft::default();
    assert_eq!(
        draft.validate().unwrap_err(),
        EntryValidationError::BlankRequiredField("whatHappened")
    );
}

#[test]
fn draft_with_required_fields_passes_and_optionals_may_stay_blank() {
    filled_draft().validate().unwrap();
}

#[test]
fn from_draft_copies_fields_and_sets_equal_timestamps() {
    let now = fixed_time();
    let entry = Entry::from_draft(&filled_draft(), now);

    assert_eq!(entry.what_happened, "argued with roommate");
    assert_eq!(entry.what_i_felt, "anxious");
    assert_eq!(entry.what_i_done, "left the room");
    assert_eq!(entry.what_i_wanted, "");
    assert_eq!(entry.what_i_avoided, "");
    assert_eq!(entry.created_at, Some(now));
    assert_eq!(entry.updated_at, Some(now));
}

#[test]
fn from_legacy_keeps_only_the_description_and_no_timestamps() {
    let entry = Entry::from_legacy("old plain-text record");

    assert_eq!(entry.what_happened, "old plain-text record");
    assert_eq!(entry.what_i_felt, "");
    assert_eq!(entry.what_i_done, "");
    assert_eq!(entry.what_i_wanted, "");
    assert_eq!(entry.what_i_avoided, "");
    assert_eq!(entry.created_at, None);
    assert_eq!(entry.updated_at, None);
}

#[test]
fn to_draft_round_trips_text_fields() {
    let entry = Entry::from_draft(&filled_draft(), fixed_time());
    assert_eq!(entry.to_draft(), filled_draft());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let entry = Entry::from_draft(&filled_draft(), fixed_time());
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["whatHappened"], "argued with roommate");
    assert_eq!(json["whatIFelt"], "anxious");
    assert_eq!(json["whatIDone"], "left the room");
    assert_eq!(json["whatIWanted"], "");
    assert_eq!(json["whatIAvoided"], "");
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn legacy_entry_serializes_without_timestamp_fields() {
    let json = serde_json::to_value(Entry::from_legacy("no clock back then")).unwrap();

    assert_eq!(json["whatHappened"], "no clock back then");
    assert!(json.get("createdAt").is_none());
    assert!(json.get("updatedAt").is_none());
}

#[test]
fn deserializes_blobs_written_by_existing_installs() {
    // Shape and timestamp format as written by the original application.
    let text = r#"{
        "whatHappened": "missed the deadline",
        "whatIFelt": "ashamed",
        "whatIDone": "apologized",
        "whatIWanted": "",
        "whatIAvoided": "",
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-02T18:30:00.000Z"
    }"#;

    let entry: Entry = serde_json::from_str(text).unwrap();
    assert_eq!(entry.what_happened, "missed the deadline");
    assert!(entry.created_at.unwrap() < entry.updated_at.unwrap());
}

#[test]
fn deserialization_defaults_missing_fields_to_empty() {
    let text = r#"{"whatHappened": "only the description survived"}"#;

    let entry: Entry = serde_json::from_str(text).unwrap();
    assert_eq!(entry.what_happened, "only the description survived");
    assert_eq!(entry.what_i_felt, "");
    assert_eq!(entry.what_i_avoided, "");
    assert_eq!(entry.created_at, None);
    assert_eq!(entry.updated_at, None);
}
