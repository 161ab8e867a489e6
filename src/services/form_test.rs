use super::*;
use tempfile::tempdir;

fn sample() -> FormData {
    FormData {
        context: "The sky is blue.".into(),
        user_answer: "because of scattering".into(),
        correct_answer: "Rayleigh scattering".into(),
        question: "Why is the sky blue?".into(),
    }
}

// =============================================================================
// SessionStore
// =============================================================================

#[test]
fn fresh_load_returns_empty_defaults() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    assert_eq!(store.load(), FormData::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    let data = sample();
    store.save(&data);
    assert_eq!(store.load(), data);
}

#[test]
fn second_save_overwrites_first() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    store.save(&sample());

    let replacement = FormData { context: "Water boils at 100C.".into(), ..FormData::default() };
    store.save(&replacement);

    let loaded = store.load();
    assert_eq!(loaded, replacement);
    assert!(loaded.question.is_empty());
}

#[test]
fn stored_file_uses_fixed_key() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    store.save(&sample());
    assert!(dir.path().join("formData.json").is_file());
}

#[test]
fn corrupt_state_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("formData.json"), "{not json").unwrap();
    let store = SessionStore::new(dir.path());
    assert_eq!(store.load(), FormData::default());
}

#[test]
fn unavailable_storage_is_tolerated() {
    // A path whose parent is a regular file can never be created.
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let store = SessionStore::new(blocker.join("nested"));
    store.save(&sample());
    assert_eq!(store.load(), FormData::default());
}

#[test]
fn partial_stored_record_fills_missing_fields() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("formData.json"), r#"{"context":"abc"}"#).unwrap();
    let store = SessionStore::new(dir.path());

    let loaded = store.load();
    assert_eq!(loaded.context, "abc");
    assert!(loaded.user_answer.is_empty());
    assert!(loaded.correct_answer.is_empty());
    assert!(loaded.question.is_empty());
}

// =============================================================================
// MemoryStore
// =============================================================================

#[test]
fn memory_store_fresh_load_is_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.load(), FormData::default());
}

#[test]
fn memory_store_round_trips_and_overwrites() {
    let store = MemoryStore::new();
    store.save(&sample());
    assert_eq!(store.load(), sample());

    let replacement = FormData { question: "Q2?".into(), ..FormData::default() };
    store.save(&replacement);
    assert_eq!(store.load(), replacement);
}

// =============================================================================
// Serialization format
// =============================================================================

#[test]
fn serialized_keys_are_camel_case() {
    let value = serde_json::to_value(sample()).unwrap();
    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("context"));
    assert!(obj.contains_key("userAnswer"));
    assert!(obj.contains_key("correctAnswer"));
    assert!(obj.contains_key("question"));
}

#[test]
fn legacy_frontend_record_parses() {
    let json = r#"{"context":"","userAnswer":"","correctAnswer":"","question":""}"#;
    let data: FormData = serde_json::from_str(json).unwrap();
    assert_eq!(data, FormData::default());
}
