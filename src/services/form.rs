//! Form-state store — one quiz record, session lifetime.
//!
//! DESIGN
//! ======
//! The whole persistent surface is a single record under a single fixed
//! key. [`FormStore`] is the injectable seam: the production
//! [`SessionStore`] keeps the record as a JSON file in a session-scoped
//! directory, [`MemoryStore`] backs tests and embedders that want no
//! filesystem contact.
//!
//! TRADE-OFFS
//! ==========
//! `load` never fails and `save` never reports failure: missing, broken,
//! or unwritable storage degrades to the empty record rather than
//! surfacing an error. This favors an always-usable form over strict
//! durability, which is all session-scoped state warrants.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed storage key for the form-state record.
pub const FORM_DATA_KEY: &str = "formData";

// =============================================================================
// FORM DATA
// =============================================================================

/// The quiz form record persisted across a user session.
///
/// All four fields are always present; a freshly loaded record with no
/// stored state is all-empty. Serialized field names are camelCase to
/// stay compatible with the service's historical storage format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    /// Source passage supplied by the caller.
    pub context: String,
    /// Answer text supplied by the end user.
    pub user_answer: String,
    /// Answer text returned by the generation service.
    pub correct_answer: String,
    /// Generated question text.
    pub question: String,
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Session-scoped persistence for exactly one [`FormData`] record.
pub trait FormStore: Send + Sync {
    /// Read the stored record. Absent or unreadable state yields the
    /// default all-empty record; this operation never fails.
    fn load(&self) -> FormData;

    /// Overwrite the stored record (last-write-wins). Best-effort: a
    /// failed write is logged and swallowed.
    fn save(&self, data: &FormData);
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// File-backed store: the fixed key maps to one JSON file inside a
/// session-scoped directory.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store state under `dir`, which is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let path = dir.into().join(format!("{FORM_DATA_KEY}.json"));
        Self { path }
    }

    /// Store state in the default session directory under the OS temp
    /// dir. Cleared by the host on reboot, which is the closest native
    /// analog of session storage.
    #[must_use]
    pub fn session_default() -> Self {
        Self::new(std::env::temp_dir().join("quizform"))
    }
}

impl FormStore for SessionStore {
    fn load(&self) -> FormData {
        let Ok(text) = std::fs::read_to_string(&self.path) else {
            return FormData::default();
        };
        match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "stored form state unreadable; using defaults");
                FormData::default()
            }
        }
    }

    fn save(&self, data: &FormData) {
        let text = match serde_json::to_string(data) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "form state serialization failed; skipping save");
                return;
            }
        };
        if let Some(dir) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!(dir = %dir.display(), error = %e, "session storage unavailable; skipping save");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, text) {
            warn!(path = %self.path.display(), error = %e, "form state write failed; skipping save");
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store keyed like the real storage facility. Serves as the
/// substitutable fake in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormStore for MemoryStore {
    fn load(&self) -> FormData {
        let entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries
            .get(FORM_DATA_KEY)
            .and_then(|text| serde_json::from_str(text).ok())
            .unwrap_or_default()
    }

    fn save(&self, data: &FormData) {
        let Ok(text) = serde_json::to_string(data) else {
            return;
        };
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(FORM_DATA_KEY.to_string(), text);
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
